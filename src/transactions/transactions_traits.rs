use async_trait::async_trait;
use chrono::NaiveDate;
use rust_decimal::Decimal;

use super::transactions_model::{NewTransaction, Transaction, TransactionType, TransactionUpdate};
use crate::errors::Result;

/// Trait for transaction repository operations. Lookups are scoped to the
/// owning user except `find_by_category`, which feeds the category-delete
/// disassociation pass.
#[async_trait]
pub trait TransactionRepositoryTrait: Send + Sync {
    /// Get a user's transactions whose date falls inside the given calendar
    /// month, every day inclusive
    fn find_by_user_and_period(
        &self,
        user_id: &str,
        year: i32,
        month: u32,
    ) -> Result<Vec<Transaction>>;

    /// Get every transaction referencing a category
    fn find_by_category(&self, category_id: &str) -> Result<Vec<Transaction>>;

    /// Get a transaction by ID, scoped to the owning user
    fn find_by_id_and_user(
        &self,
        transaction_id: &str,
        user_id: &str,
    ) -> Result<Option<Transaction>>;

    /// Create a new transaction
    async fn create(&self, new_transaction: NewTransaction) -> Result<Transaction>;

    /// Replace the updatable fields of a transaction, scoped to the owning
    /// user
    async fn update(
        &self,
        transaction_id: &str,
        user_id: &str,
        update: TransactionUpdate,
    ) -> Result<Transaction>;

    /// Delete a transaction, scoped to the owning user
    async fn delete(&self, transaction_id: &str, user_id: &str) -> Result<usize>;
}

/// Trait for transaction service operations
#[async_trait]
pub trait TransactionServiceTrait: Send + Sync {
    /// Record a new income or expense for a user
    #[allow(clippy::too_many_arguments)]
    async fn create_transaction(
        &self,
        user_id: &str,
        description: String,
        amount: Decimal,
        date: NaiveDate,
        transaction_type: TransactionType,
        category_id: Option<String>,
    ) -> Result<Transaction>;

    /// List a user's transactions for one calendar month
    fn get_transactions_for_period(
        &self,
        user_id: &str,
        year: i32,
        month: u32,
    ) -> Result<Vec<Transaction>>;

    /// Get one transaction, failing when it does not exist or belongs to
    /// another user
    fn get_transaction(&self, transaction_id: &str, user_id: &str) -> Result<Transaction>;

    /// Replace a transaction's description, amount, date and category
    async fn update_transaction(
        &self,
        transaction_id: &str,
        user_id: &str,
        update: TransactionUpdate,
    ) -> Result<Transaction>;

    /// Delete a transaction
    async fn delete_transaction(&self, transaction_id: &str, user_id: &str) -> Result<()>;
}
