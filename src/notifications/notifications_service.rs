use async_trait::async_trait;
use chrono::{Datelike, NaiveDate, Utc};
use log::{error, info};
use std::sync::Arc;

use crate::dashboard::dashboard_traits::DashboardServiceTrait;
use crate::errors::Result;
use crate::notifications::notifications_model::NotificationPassReport;
use crate::notifications::notifications_traits::{
    NotificationServiceTrait, SummaryDispatcherTrait,
};
use crate::users::users_model::User;
use crate::users::users_traits::UserRepositoryTrait;

/// Year and month of the calendar month before the given date.
pub(crate) fn previous_period(today: NaiveDate) -> (i32, u32) {
    if today.month() == 1 {
        (today.year() - 1, 12)
    } else {
        (today.year(), today.month() - 1)
    }
}

/// Batch service that mails every user a summary of the previous month.
pub struct NotificationService {
    user_repo: Arc<dyn UserRepositoryTrait>,
    dashboard_service: Arc<dyn DashboardServiceTrait>,
    dispatcher: Arc<dyn SummaryDispatcherTrait>,
}

impl NotificationService {
    pub fn new(
        user_repo: Arc<dyn UserRepositoryTrait>,
        dashboard_service: Arc<dyn DashboardServiceTrait>,
        dispatcher: Arc<dyn SummaryDispatcherTrait>,
    ) -> Self {
        NotificationService {
            user_repo,
            dashboard_service,
            dispatcher,
        }
    }

    async fn notify_user(&self, user: &User, year: i32, month: u32) -> Result<()> {
        let summary = self
            .dashboard_service
            .generate_monthly_summary(&user.id, year, month)?;
        self.dispatcher.send(user, &summary).await
    }
}

#[async_trait]
impl NotificationServiceTrait for NotificationService {
    async fn run_monthly_notification_pass(&self) -> NotificationPassReport {
        let (year, month) = previous_period(Utc::now().date_naive());
        self.run_pass_for_period(year, month).await
    }

    async fn run_pass_for_period(&self, year: i32, month: u32) -> NotificationPassReport {
        info!("Starting notification pass for {}-{:02}", year, month);

        let users = match self.user_repo.find_all() {
            Ok(users) => users,
            Err(e) => {
                error!("Could not load users for notification pass: {}", e);
                return NotificationPassReport::default();
            }
        };

        if users.is_empty() {
            info!("No registered users, nothing to send");
            return NotificationPassReport::default();
        }

        info!("Sending monthly summaries to {} user(s)", users.len());

        let mut report = NotificationPassReport::default();
        for user in &users {
            report.users_processed += 1;
            if let Err(e) = self.notify_user(user, year, month).await {
                report.failures += 1;
                error!("Failed to notify user {}: {}", user.id, e);
            }
        }

        info!(
            "Notification pass finished: {} user(s) processed, {} failure(s)",
            report.users_processed, report.failures
        );
        report
    }
}
