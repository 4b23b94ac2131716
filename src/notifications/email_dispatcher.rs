use async_trait::async_trait;
use log::info;
use std::fmt::Write as _;
use std::sync::Arc;

use crate::dashboard::dashboard_model::DashboardSummary;
use crate::errors::Result;
use crate::notifications::notifications_model::SummaryEmail;
use crate::notifications::notifications_traits::{MailTransportTrait, SummaryDispatcherTrait};
use crate::users::users_model::User;

/// Renders a monthly summary as a plain-text e-mail and hands it to a mail
/// transport.
pub struct EmailSummaryDispatcher {
    transport: Arc<dyn MailTransportTrait>,
    subject: String,
    signature: String,
}

impl EmailSummaryDispatcher {
    pub fn new(transport: Arc<dyn MailTransportTrait>, subject: String, signature: String) -> Self {
        EmailSummaryDispatcher {
            transport,
            subject,
            signature,
        }
    }

    fn render_body(&self, user: &User, summary: &DashboardSummary) -> String {
        let mut body = String::new();
        let _ = writeln!(body, "Hello, {}!", user.name);
        let _ = writeln!(body);
        let _ = writeln!(body, "Here is your financial summary for last month:");
        let _ = writeln!(body);
        let _ = writeln!(body, "Total income: ${:.2}", summary.total_income);
        let _ = writeln!(body, "Total expenses: ${:.2}", summary.total_expense);
        let _ = writeln!(body, "Final balance: ${:.2}", summary.final_balance);

        if !summary.budgets.is_empty() {
            let _ = writeln!(body);
            let _ = writeln!(body, "Budget progress:");
            for budget in &summary.budgets {
                let _ = writeln!(
                    body,
                    "- {}: spent ${:.2} of ${:.2} ({:.2}%)",
                    budget.category_name,
                    budget.total_spent,
                    budget.monthly_goal,
                    budget.percentage_spent
                );
            }
        }

        let _ = writeln!(body);
        let _ = writeln!(body, "Best regards,");
        let _ = write!(body, "{}", self.signature);
        body
    }
}

#[async_trait]
impl SummaryDispatcherTrait for EmailSummaryDispatcher {
    async fn send(&self, user: &User, summary: &DashboardSummary) -> Result<()> {
        let email = SummaryEmail {
            to: user.email.clone(),
            subject: self.subject.clone(),
            body: self.render_body(user, summary),
        };
        self.transport.deliver(&email).await
    }
}

/// Transport that writes messages to the log instead of a wire. SMTP
/// delivery belongs to the embedding application.
pub struct LogMailTransport;

#[async_trait]
impl MailTransportTrait for LogMailTransport {
    async fn deliver(&self, email: &SummaryEmail) -> Result<()> {
        info!("Sending '{}' to {}", email.subject, email.to);
        Ok(())
    }
}
