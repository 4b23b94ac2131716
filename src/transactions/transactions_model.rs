use chrono::NaiveDate;
use diesel::prelude::*;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::constants::DATE_FORMAT;
use crate::transactions::transactions_constants::{
    TRANSACTION_TYPE_EXPENSE, TRANSACTION_TYPE_INCOME,
};
use crate::transactions::transactions_errors::TransactionError;

/// Cash-flow direction of a transaction. The stored amount is always
/// positive; this carries the sign.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransactionType {
    Income,
    Expense,
}

impl TransactionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionType::Income => TRANSACTION_TYPE_INCOME,
            TransactionType::Expense => TRANSACTION_TYPE_EXPENSE,
        }
    }
}

impl std::str::FromStr for TransactionType {
    type Err = TransactionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            TRANSACTION_TYPE_INCOME => Ok(TransactionType::Income),
            TRANSACTION_TYPE_EXPENSE => Ok(TransactionType::Expense),
            other => Err(TransactionError::InvalidData(format!(
                "Unknown transaction type: {}",
                other
            ))),
        }
    }
}

/// Database model for transactions
#[derive(
    Queryable, Identifiable, Selectable, PartialEq, Serialize, Deserialize, Debug, Clone,
)]
#[diesel(table_name = crate::schema::transactions)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: String,
    pub user_id: String,
    pub description: String,
    pub amount: String,
    pub transaction_date: String,
    pub transaction_type: String,
    pub category_id: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

impl Transaction {
    /// Amount as an exact decimal. Writes validate the stored text, so a
    /// parse failure reads as zero rather than poisoning an aggregation.
    pub fn amount_decimal(&self) -> Decimal {
        self.amount.parse().unwrap_or(Decimal::ZERO)
    }

    pub fn date(&self) -> NaiveDate {
        NaiveDate::parse_from_str(&self.transaction_date, DATE_FORMAT).unwrap_or_default()
    }

    pub fn is_income(&self) -> bool {
        self.transaction_type == TRANSACTION_TYPE_INCOME
    }

    pub fn is_expense(&self) -> bool {
        self.transaction_type == TRANSACTION_TYPE_EXPENSE
    }
}

/// Model for creating a new transaction
#[derive(Insertable, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = crate::schema::transactions)]
#[serde(rename_all = "camelCase")]
pub struct NewTransaction {
    pub id: Option<String>,
    pub user_id: String,
    pub description: String,
    pub amount: String,
    pub transaction_date: String,
    pub transaction_type: String,
    pub category_id: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

/// Full-replace update payload for a transaction. The type is fixed at
/// creation; description, amount, date and category can all change, and a
/// `None` category detaches the transaction.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct TransactionUpdate {
    pub description: String,
    pub amount: Decimal,
    pub transaction_date: NaiveDate,
    pub category_id: Option<String>,
}
