use async_trait::async_trait;

use super::auth_model::LoginResponse;
use crate::errors::Result;
use crate::users::users_model::User;

/// Signs tokens that identify an authenticated user.
pub trait TokenIssuerTrait: Send + Sync {
    fn issue(&self, user: &User) -> Result<String>;
}

/// Trait defining the contract for authentication operations
#[async_trait]
pub trait AuthServiceTrait: Send + Sync {
    /// Register a new account. The e-mail address must not be taken.
    async fn register(&self, name: String, email: String, password: String) -> Result<User>;

    /// Exchange credentials for a signed token
    fn login(&self, email: &str, password: &str) -> Result<LoginResponse>;
}
