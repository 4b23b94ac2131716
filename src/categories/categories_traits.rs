use async_trait::async_trait;
use rust_decimal::Decimal;

use super::categories_model::{Category, CategoryUpdate, NewCategory};
use crate::errors::Result;

/// Trait for category repository operations. Every lookup is scoped to the
/// owning user; a foreign category is indistinguishable from a missing one.
#[async_trait]
pub trait CategoryRepositoryTrait: Send + Sync {
    /// Get all categories owned by a user
    fn find_by_user(&self, user_id: &str) -> Result<Vec<Category>>;

    /// Get a category by ID, scoped to the owning user
    fn find_by_id_and_user(&self, category_id: &str, user_id: &str) -> Result<Option<Category>>;

    /// Create a new category
    async fn create(&self, new_category: NewCategory) -> Result<Category>;

    /// Replace the updatable fields of a category, scoped to the owning user
    async fn update(
        &self,
        category_id: &str,
        user_id: &str,
        update: CategoryUpdate,
    ) -> Result<Category>;

    /// Delete a category and null out the category reference on every
    /// transaction that pointed at it, as one atomic group
    async fn delete_with_disassociation(&self, category_id: &str, user_id: &str) -> Result<usize>;
}

/// Trait for category service operations
#[async_trait]
pub trait CategoryServiceTrait: Send + Sync {
    /// Create a new category for a user
    async fn create_category(
        &self,
        user_id: &str,
        name: String,
        color: Option<String>,
        icon: Option<String>,
        monthly_goal: Option<Decimal>,
    ) -> Result<Category>;

    /// List a user's categories
    fn get_categories(&self, user_id: &str) -> Result<Vec<Category>>;

    /// Get one category, failing when it does not exist or belongs to
    /// another user
    fn get_category(&self, category_id: &str, user_id: &str) -> Result<Category>;

    /// Replace a category's name, color, icon and monthly goal
    async fn update_category(
        &self,
        category_id: &str,
        user_id: &str,
        update: CategoryUpdate,
    ) -> Result<Category>;

    /// Delete a category, disassociating its transactions first
    async fn delete_category(&self, category_id: &str, user_id: &str) -> Result<()>;
}
