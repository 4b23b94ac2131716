use async_trait::async_trait;
use chrono::Utc;
use log::{debug, info};
use std::sync::Arc;

use crate::auth::auth_errors::AuthError;
use crate::auth::auth_model::LoginResponse;
use crate::auth::auth_traits::{AuthServiceTrait, TokenIssuerTrait};
use crate::auth::password::{hash_password, verify_password};
use crate::errors::Result;
use crate::users::users_errors::UserError;
use crate::users::users_model::{NewUser, User};
use crate::users::users_traits::UserRepositoryTrait;

/// Service for account registration and credential-based login.
pub struct AuthService {
    user_repo: Arc<dyn UserRepositoryTrait>,
    token_issuer: Arc<dyn TokenIssuerTrait>,
}

impl AuthService {
    pub fn new(
        user_repo: Arc<dyn UserRepositoryTrait>,
        token_issuer: Arc<dyn TokenIssuerTrait>,
    ) -> Self {
        AuthService {
            user_repo,
            token_issuer,
        }
    }
}

#[async_trait]
impl AuthServiceTrait for AuthService {
    async fn register(&self, name: String, email: String, password: String) -> Result<User> {
        if name.trim().is_empty() {
            return Err(UserError::InvalidData("Name is required".to_string()).into());
        }
        if email.trim().is_empty() {
            return Err(UserError::InvalidData("E-mail is required".to_string()).into());
        }
        if password.is_empty() {
            return Err(UserError::InvalidData("Password is required".to_string()).into());
        }

        if self.user_repo.exists_by_email(&email)? {
            return Err(UserError::EmailAlreadyExists(email).into());
        }

        let password_hash = hash_password(&password)?;
        let now = Utc::now().to_rfc3339();
        let user = self
            .user_repo
            .create(NewUser {
                id: None,
                name,
                email,
                password_hash,
                created_at: now.clone(),
                updated_at: now,
            })
            .await?;

        info!("Registered new user {}", user.id);
        Ok(user)
    }

    fn login(&self, email: &str, password: &str) -> Result<LoginResponse> {
        debug!("Login attempt for {}", email);

        // An unknown e-mail and a wrong password answer identically
        let user = self
            .user_repo
            .find_by_email(email)?
            .ok_or(AuthError::InvalidCredentials)?;

        verify_password(password, &user.password_hash)?;
        let token = self.token_issuer.issue(&user)?;

        Ok(LoginResponse { token })
    }
}
