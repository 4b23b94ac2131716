// Module declarations
pub(crate) mod auth_errors;
pub(crate) mod auth_model;
pub(crate) mod auth_service;
pub(crate) mod auth_traits;
pub(crate) mod password;
pub(crate) mod token_issuer;

// Re-export the public interface
pub use auth_errors::AuthError;
pub use auth_model::LoginResponse;
pub use auth_service::AuthService;
pub use auth_traits::{AuthServiceTrait, TokenIssuerTrait};
pub use password::{hash_password, verify_password};
pub use token_issuer::JwtTokenIssuer;
