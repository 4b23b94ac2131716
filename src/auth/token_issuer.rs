use std::time::{Duration, SystemTime, UNIX_EPOCH};

use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::auth::auth_errors::AuthError;
use crate::auth::auth_traits::TokenIssuerTrait;
use crate::config::CoreConfig;
use crate::errors::Result;
use crate::users::users_model::User;

#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub iss: String,
    pub iat: usize,
    pub exp: usize,
}

/// Issues and validates HS256 tokens whose subject is the user's e-mail.
pub struct JwtTokenIssuer {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    issuer: String,
    token_ttl: Duration,
}

impl JwtTokenIssuer {
    pub fn new(secret: &[u8], issuer: String, token_ttl: Duration) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        validation.set_issuer(&[&issuer]);
        JwtTokenIssuer {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            validation,
            issuer,
            token_ttl,
        }
    }

    /// Build an issuer from configuration. Fails when no secret is set so a
    /// misconfigured deployment never signs with an empty key.
    pub fn from_config(config: &CoreConfig) -> Result<Self> {
        let secret = config
            .jwt_secret
            .as_deref()
            .ok_or(AuthError::NotConfigured)?;
        Ok(Self::new(
            secret.as_bytes(),
            config.token_issuer.clone(),
            Duration::from_secs(config.token_ttl_hours * 3600),
        ))
    }

    /// Decode a token, returning its claims when the signature, issuer and
    /// expiry all check out.
    pub fn validate_token(&self, token: &str) -> Result<Claims> {
        decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| AuthError::Token(e.to_string()).into())
    }
}

impl TokenIssuerTrait for JwtTokenIssuer {
    fn issue(&self, user: &User) -> Result<String> {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_err(|_| AuthError::Token("System clock is before UNIX_EPOCH".to_string()))?;
        let exp = now + self.token_ttl;
        let claims = Claims {
            sub: user.email.clone(),
            iss: self.issuer.clone(),
            iat: now.as_secs() as usize,
            exp: exp.as_secs() as usize,
        };
        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| AuthError::Token(e.to_string()).into())
    }
}
