use serde::{Deserialize, Serialize};

/// A rendered summary message, ready for a mail transport.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SummaryEmail {
    pub to: String,
    pub subject: String,
    pub body: String,
}

/// Outcome of one monthly notification pass. The pass itself never fails;
/// per-user problems are counted here and logged.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct NotificationPassReport {
    pub users_processed: usize,
    pub failures: usize,
}
