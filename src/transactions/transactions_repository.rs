use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use diesel::prelude::*;
use std::sync::Arc;
use uuid::Uuid;

use crate::constants::DATE_FORMAT;
use crate::db::{get_connection, DbPool};
use crate::errors::Result;
use crate::schema::transactions;
use crate::transactions::transactions_errors::TransactionError;
use crate::transactions::transactions_model::{NewTransaction, Transaction, TransactionUpdate};
use crate::transactions::transactions_traits::TransactionRepositoryTrait;

pub struct TransactionRepository {
    pool: Arc<DbPool>,
}

impl TransactionRepository {
    pub fn new(pool: Arc<DbPool>) -> Self {
        TransactionRepository { pool }
    }
}

/// First day of the month and first day of the following month, as stored
/// date strings. Dates are ISO formatted, so lexicographic range filters
/// match chronological ones.
pub(crate) fn month_bounds(year: i32, month: u32) -> std::result::Result<(String, String), TransactionError> {
    let start = NaiveDate::from_ymd_opt(year, month, 1).ok_or_else(|| {
        TransactionError::InvalidData(format!("Invalid period: {}-{}", year, month))
    })?;
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    // Unreachable once the start date validated, but stay total
    let end = NaiveDate::from_ymd_opt(next_year, next_month, 1).ok_or_else(|| {
        TransactionError::InvalidData(format!("Invalid period: {}-{}", next_year, next_month))
    })?;

    Ok((
        start.format(DATE_FORMAT).to_string(),
        end.format(DATE_FORMAT).to_string(),
    ))
}

#[async_trait]
impl TransactionRepositoryTrait for TransactionRepository {
    fn find_by_user_and_period(
        &self,
        user_id: &str,
        year: i32,
        month: u32,
    ) -> Result<Vec<Transaction>> {
        let (start, end) = month_bounds(year, month)?;
        let mut conn = get_connection(&self.pool)?;

        Ok(transactions::table
            .filter(transactions::user_id.eq(user_id))
            .filter(transactions::transaction_date.ge(start))
            .filter(transactions::transaction_date.lt(end))
            .order((
                transactions::transaction_date.asc(),
                transactions::created_at.asc(),
            ))
            .load::<Transaction>(&mut conn)?)
    }

    fn find_by_category(&self, category_id: &str) -> Result<Vec<Transaction>> {
        let mut conn = get_connection(&self.pool)?;
        Ok(transactions::table
            .filter(transactions::category_id.eq(category_id))
            .load::<Transaction>(&mut conn)?)
    }

    fn find_by_id_and_user(
        &self,
        transaction_id: &str,
        user_id: &str,
    ) -> Result<Option<Transaction>> {
        let mut conn = get_connection(&self.pool)?;
        Ok(transactions::table
            .filter(transactions::id.eq(transaction_id))
            .filter(transactions::user_id.eq(user_id))
            .first::<Transaction>(&mut conn)
            .optional()?)
    }

    async fn create(&self, new_transaction: NewTransaction) -> Result<Transaction> {
        let mut conn = get_connection(&self.pool)?;

        let mut transaction = new_transaction;
        if transaction.id.is_none() {
            transaction.id = Some(Uuid::new_v4().to_string());
        }

        diesel::insert_into(transactions::table)
            .values(&transaction)
            .execute(&mut conn)?;

        let id = transaction.id.unwrap_or_default();
        Ok(transactions::table
            .find(&id)
            .first::<Transaction>(&mut conn)?)
    }

    async fn update(
        &self,
        transaction_id: &str,
        user_id: &str,
        update: TransactionUpdate,
    ) -> Result<Transaction> {
        let mut conn = get_connection(&self.pool)?;

        let affected = diesel::update(
            transactions::table
                .filter(transactions::id.eq(transaction_id))
                .filter(transactions::user_id.eq(user_id)),
        )
        .set((
            transactions::description.eq(&update.description),
            transactions::amount.eq(update.amount.to_string()),
            transactions::transaction_date
                .eq(update.transaction_date.format(DATE_FORMAT).to_string()),
            transactions::category_id.eq(&update.category_id),
            transactions::updated_at.eq(Utc::now().to_rfc3339()),
        ))
        .execute(&mut conn)?;

        if affected == 0 {
            return Err(TransactionError::NotFound(format!(
                "Transaction with id {} not found",
                transaction_id
            ))
            .into());
        }

        Ok(transactions::table
            .find(transaction_id)
            .first::<Transaction>(&mut conn)?)
    }

    async fn delete(&self, transaction_id: &str, user_id: &str) -> Result<usize> {
        let mut conn = get_connection(&self.pool)?;

        let affected = diesel::delete(
            transactions::table
                .filter(transactions::id.eq(transaction_id))
                .filter(transactions::user_id.eq(user_id)),
        )
        .execute(&mut conn)?;

        if affected == 0 {
            return Err(TransactionError::NotFound(format!(
                "Transaction with id {} not found",
                transaction_id
            ))
            .into());
        }

        Ok(affected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn month_bounds_cover_every_day_of_the_month() {
        let (start, end) = month_bounds(2025, 2).unwrap();
        assert_eq!(start, "2025-02-01");
        assert_eq!(end, "2025-03-01");
    }

    #[test]
    fn month_bounds_roll_over_at_year_end() {
        let (start, end) = month_bounds(2024, 12).unwrap();
        assert_eq!(start, "2024-12-01");
        assert_eq!(end, "2025-01-01");
    }

    #[test]
    fn month_bounds_reject_invalid_months() {
        assert!(month_bounds(2025, 13).is_err());
        assert!(month_bounds(2025, 0).is_err());
    }
}
