use std::sync::Arc;

use crate::errors::Result;
use crate::users::users_errors::UserError;
use crate::users::users_model::User;
use crate::users::users_traits::{UserRepositoryTrait, UserServiceTrait};

/// Read-side service over the user store, consumed by the API layer
pub struct UserService {
    user_repo: Arc<dyn UserRepositoryTrait>,
}

impl UserService {
    pub fn new(user_repo: Arc<dyn UserRepositoryTrait>) -> Self {
        UserService { user_repo }
    }
}

impl UserServiceTrait for UserService {
    fn get_user(&self, user_id: &str) -> Result<User> {
        self.user_repo.find_by_id(user_id)?.ok_or_else(|| {
            UserError::NotFound(format!("User with id {} not found", user_id)).into()
        })
    }

    fn list_users(&self) -> Result<Vec<User>> {
        self.user_repo.find_all()
    }
}
