use async_trait::async_trait;
use chrono::Utc;
use log::debug;
use rust_decimal::Decimal;
use std::sync::Arc;

use crate::categories::categories_errors::CategoryError;
use crate::categories::categories_model::{Category, CategoryUpdate, NewCategory};
use crate::categories::categories_traits::{CategoryRepositoryTrait, CategoryServiceTrait};
use crate::errors::Result;
use crate::users::users_errors::UserError;
use crate::users::users_traits::UserRepositoryTrait;

pub struct CategoryService {
    category_repo: Arc<dyn CategoryRepositoryTrait>,
    user_repo: Arc<dyn UserRepositoryTrait>,
}

impl CategoryService {
    pub fn new(
        category_repo: Arc<dyn CategoryRepositoryTrait>,
        user_repo: Arc<dyn UserRepositoryTrait>,
    ) -> Self {
        CategoryService {
            category_repo,
            user_repo,
        }
    }
}

#[async_trait]
impl CategoryServiceTrait for CategoryService {
    async fn create_category(
        &self,
        user_id: &str,
        name: String,
        color: Option<String>,
        icon: Option<String>,
        monthly_goal: Option<Decimal>,
    ) -> Result<Category> {
        if self.user_repo.find_by_id(user_id)?.is_none() {
            return Err(
                UserError::NotFound(format!("User with id {} not found", user_id)).into(),
            );
        }

        if name.trim().is_empty() {
            return Err(CategoryError::InvalidData("Category name is required".to_string()).into());
        }

        debug!("Creating category '{}' for user {}", name, user_id);
        let now = Utc::now().to_rfc3339();

        // Zero and negative goals are stored as-is; the dashboard ignores them
        let new_category = NewCategory {
            id: None,
            user_id: user_id.to_string(),
            name,
            color,
            icon,
            monthly_goal: monthly_goal.map(|g| g.to_string()),
            is_active: true,
            created_at: now.clone(),
            updated_at: now,
        };

        self.category_repo.create(new_category).await
    }

    fn get_categories(&self, user_id: &str) -> Result<Vec<Category>> {
        self.category_repo.find_by_user(user_id)
    }

    fn get_category(&self, category_id: &str, user_id: &str) -> Result<Category> {
        self.category_repo
            .find_by_id_and_user(category_id, user_id)?
            .ok_or_else(|| {
                CategoryError::NotFound(format!("Category with id {} not found", category_id))
                    .into()
            })
    }

    async fn update_category(
        &self,
        category_id: &str,
        user_id: &str,
        update: CategoryUpdate,
    ) -> Result<Category> {
        if update.name.trim().is_empty() {
            return Err(CategoryError::InvalidData("Category name is required".to_string()).into());
        }

        self.category_repo
            .update(category_id, user_id, update)
            .await
    }

    async fn delete_category(&self, category_id: &str, user_id: &str) -> Result<()> {
        debug!("Deleting category {} for user {}", category_id, user_id);
        self.category_repo
            .delete_with_disassociation(category_id, user_id)
            .await?;
        Ok(())
    }
}
