use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Computed monthly summary for one user. Never persisted; recomputed from
/// store state on every request.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub total_income: Decimal,
    pub total_expense: Decimal,
    pub final_balance: Decimal,
    pub budgets: Vec<BudgetProgress>,
}

/// Spending against one category's monthly goal. Only categories with a
/// strictly positive goal appear.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BudgetProgress {
    pub category_name: String,
    pub category_color: Option<String>,
    pub monthly_goal: Decimal,
    pub total_spent: Decimal,
    pub percentage_spent: Decimal,
}
