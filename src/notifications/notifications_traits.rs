use async_trait::async_trait;

use super::notifications_model::NotificationPassReport;
use crate::dashboard::dashboard_model::DashboardSummary;
use crate::errors::Result;
use crate::users::users_model::User;

/// Delivers a computed summary to one user. Implementations decide the
/// channel and the rendering.
#[async_trait]
pub trait SummaryDispatcherTrait: Send + Sync {
    async fn send(&self, user: &User, summary: &DashboardSummary) -> Result<()>;
}

/// Low-level delivery of an already rendered message.
#[async_trait]
pub trait MailTransportTrait: Send + Sync {
    async fn deliver(&self, email: &super::notifications_model::SummaryEmail) -> Result<()>;
}

/// Trait defining the contract for the notification service
#[async_trait]
pub trait NotificationServiceTrait: Send + Sync {
    /// Send every user a summary of the month before the current one
    async fn run_monthly_notification_pass(&self) -> NotificationPassReport;

    /// Send every user a summary of the given month
    async fn run_pass_for_period(&self, year: i32, month: u32) -> NotificationPassReport;
}
