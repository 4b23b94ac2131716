// Module declarations
pub(crate) mod dashboard_model;
pub(crate) mod dashboard_service;
pub(crate) mod dashboard_traits;

// Re-export the public interface
pub use dashboard_model::{BudgetProgress, DashboardSummary};
pub use dashboard_service::DashboardService;
pub use dashboard_traits::DashboardServiceTrait;
