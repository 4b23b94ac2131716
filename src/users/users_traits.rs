use async_trait::async_trait;

use super::users_model::{NewUser, User};
use crate::errors::Result;

/// Trait defining the contract for user repository operations
#[async_trait]
pub trait UserRepositoryTrait: Send + Sync {
    /// Get every registered user
    fn find_all(&self) -> Result<Vec<User>>;

    /// Get a user by ID
    fn find_by_id(&self, user_id: &str) -> Result<Option<User>>;

    /// Get a user by e-mail address
    fn find_by_email(&self, email: &str) -> Result<Option<User>>;

    /// Check whether an e-mail address is already registered
    fn exists_by_email(&self, email: &str) -> Result<bool>;

    /// Create a new user
    async fn create(&self, new_user: NewUser) -> Result<User>;
}

/// Trait defining the contract for user service operations
pub trait UserServiceTrait: Send + Sync {
    /// Get a user by ID, failing when no such user exists
    fn get_user(&self, user_id: &str) -> Result<User>;

    /// List every registered user
    fn list_users(&self) -> Result<Vec<User>>;
}
