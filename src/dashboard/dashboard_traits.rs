use super::dashboard_model::DashboardSummary;
use crate::errors::Result;

/// Trait defining the contract for the dashboard service
pub trait DashboardServiceTrait: Send + Sync {
    /// Compute a user's totals and budget progress for one calendar month.
    /// Pure function of store state: identical data yields identical
    /// results, and empty stores yield an all-zero summary.
    fn generate_monthly_summary(
        &self,
        user_id: &str,
        year: i32,
        month: u32,
    ) -> Result<DashboardSummary>;
}
