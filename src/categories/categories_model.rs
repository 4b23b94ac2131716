use diesel::prelude::*;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Database model for budget categories
#[derive(
    Queryable, Identifiable, Selectable, PartialEq, Serialize, Deserialize, Debug, Clone,
)]
#[diesel(table_name = crate::schema::categories)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: String,
    // Never changes after creation
    pub user_id: String,
    pub name: String,
    pub color: Option<String>,
    pub icon: Option<String>,
    pub monthly_goal: Option<String>,
    // Reserved for a future archive feature; nothing toggles it yet
    pub is_active: bool,
    pub created_at: String,
    pub updated_at: String,
}

impl Category {
    /// Monthly goal as an exact decimal. A missing or garbled stored value
    /// reads as no goal.
    pub fn monthly_goal_decimal(&self) -> Option<Decimal> {
        self.monthly_goal.as_deref().and_then(|g| g.parse().ok())
    }

    /// Whether this category participates in budget progress calculations.
    /// Zero and negative goals are stored but never budgeted against.
    pub fn has_budget_goal(&self) -> bool {
        matches!(self.monthly_goal_decimal(), Some(goal) if goal > Decimal::ZERO)
    }
}

/// Model for creating a new category
#[derive(Insertable, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = crate::schema::categories)]
#[serde(rename_all = "camelCase")]
pub struct NewCategory {
    pub id: Option<String>,
    pub user_id: String,
    pub name: String,
    pub color: Option<String>,
    pub icon: Option<String>,
    pub monthly_goal: Option<String>,
    pub is_active: bool,
    pub created_at: String,
    pub updated_at: String,
}

/// Full-replace update payload for a category. Every updatable field is set
/// from this value, so a `None` goal clears the stored goal.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct CategoryUpdate {
    pub name: String,
    pub color: Option<String>,
    pub icon: Option<String>,
    pub monthly_goal: Option<Decimal>,
}
