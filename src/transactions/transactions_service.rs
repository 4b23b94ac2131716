use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use log::debug;
use rust_decimal::Decimal;
use std::sync::Arc;

use crate::categories::categories_errors::CategoryError;
use crate::categories::categories_traits::CategoryRepositoryTrait;
use crate::constants::DATE_FORMAT;
use crate::errors::Result;
use crate::transactions::transactions_errors::TransactionError;
use crate::transactions::transactions_model::{
    NewTransaction, Transaction, TransactionType, TransactionUpdate,
};
use crate::transactions::transactions_traits::{
    TransactionRepositoryTrait, TransactionServiceTrait,
};
use crate::users::users_errors::UserError;
use crate::users::users_traits::UserRepositoryTrait;

pub struct TransactionService {
    transaction_repo: Arc<dyn TransactionRepositoryTrait>,
    category_repo: Arc<dyn CategoryRepositoryTrait>,
    user_repo: Arc<dyn UserRepositoryTrait>,
}

impl TransactionService {
    pub fn new(
        transaction_repo: Arc<dyn TransactionRepositoryTrait>,
        category_repo: Arc<dyn CategoryRepositoryTrait>,
        user_repo: Arc<dyn UserRepositoryTrait>,
    ) -> Self {
        TransactionService {
            transaction_repo,
            category_repo,
            user_repo,
        }
    }

    /// Resolve an optional category reference, scoped to the owner. A
    /// reference to a missing or foreign category is a NotFound, never a
    /// silent detach.
    fn resolve_category(&self, category_id: Option<String>, user_id: &str) -> Result<Option<String>> {
        match category_id {
            None => Ok(None),
            Some(id) => match self.category_repo.find_by_id_and_user(&id, user_id)? {
                Some(category) => Ok(Some(category.id)),
                None => Err(CategoryError::NotFound(format!(
                    "Category with id {} not found",
                    id
                ))
                .into()),
            },
        }
    }

    fn validate_fields(description: &str, amount: Decimal) -> Result<()> {
        if description.trim().is_empty() {
            return Err(
                TransactionError::InvalidData("Description is required".to_string()).into(),
            );
        }
        if amount <= Decimal::ZERO {
            return Err(TransactionError::InvalidData(
                "Amount must be strictly positive".to_string(),
            )
            .into());
        }
        Ok(())
    }
}

#[async_trait]
impl TransactionServiceTrait for TransactionService {
    async fn create_transaction(
        &self,
        user_id: &str,
        description: String,
        amount: Decimal,
        date: NaiveDate,
        transaction_type: TransactionType,
        category_id: Option<String>,
    ) -> Result<Transaction> {
        if self.user_repo.find_by_id(user_id)?.is_none() {
            return Err(
                UserError::NotFound(format!("User with id {} not found", user_id)).into(),
            );
        }
        Self::validate_fields(&description, amount)?;
        let category_id = self.resolve_category(category_id, user_id)?;

        debug!(
            "Recording {} of {} for user {}",
            transaction_type.as_str(),
            amount,
            user_id
        );
        let now = Utc::now().to_rfc3339();

        let new_transaction = NewTransaction {
            id: None,
            user_id: user_id.to_string(),
            description,
            amount: amount.to_string(),
            transaction_date: date.format(DATE_FORMAT).to_string(),
            transaction_type: transaction_type.as_str().to_string(),
            category_id,
            created_at: now.clone(),
            updated_at: now,
        };

        self.transaction_repo.create(new_transaction).await
    }

    fn get_transactions_for_period(
        &self,
        user_id: &str,
        year: i32,
        month: u32,
    ) -> Result<Vec<Transaction>> {
        self.transaction_repo
            .find_by_user_and_period(user_id, year, month)
    }

    fn get_transaction(&self, transaction_id: &str, user_id: &str) -> Result<Transaction> {
        self.transaction_repo
            .find_by_id_and_user(transaction_id, user_id)?
            .ok_or_else(|| {
                TransactionError::NotFound(format!(
                    "Transaction with id {} not found",
                    transaction_id
                ))
                .into()
            })
    }

    async fn update_transaction(
        &self,
        transaction_id: &str,
        user_id: &str,
        update: TransactionUpdate,
    ) -> Result<Transaction> {
        Self::validate_fields(&update.description, update.amount)?;
        let category_id = self.resolve_category(update.category_id.clone(), user_id)?;

        self.transaction_repo
            .update(
                transaction_id,
                user_id,
                TransactionUpdate {
                    category_id,
                    ..update
                },
            )
            .await
    }

    async fn delete_transaction(&self, transaction_id: &str, user_id: &str) -> Result<()> {
        self.transaction_repo
            .delete(transaction_id, user_id)
            .await?;
        Ok(())
    }
}
