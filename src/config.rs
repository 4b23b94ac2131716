/// Runtime configuration for the core, loaded from the environment.
///
/// The embedding application (HTTP server, scheduler binary) decides when to
/// load this; nothing in the core reads the environment on its own.
pub struct CoreConfig {
    pub data_dir: String,
    pub jwt_secret: Option<String>,
    pub token_ttl_hours: u64,
    pub token_issuer: String,
    pub email_subject: String,
    pub email_signature: String,
}

impl CoreConfig {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let data_dir = std::env::var("FINTRACK_DATA_DIR").unwrap_or_else(|_| "./data".into());
        let jwt_secret = std::env::var("FINTRACK_JWT_SECRET").ok();
        let token_ttl_hours: u64 = std::env::var("FINTRACK_TOKEN_TTL_HOURS")
            .unwrap_or_else(|_| "24".into())
            .parse()
            .unwrap_or(24);
        let token_issuer =
            std::env::var("FINTRACK_TOKEN_ISSUER").unwrap_or_else(|_| "fintrack-api".into());
        let email_subject = std::env::var("FINTRACK_EMAIL_SUBJECT")
            .unwrap_or_else(|_| "Your monthly financial summary".into());
        let email_signature =
            std::env::var("FINTRACK_EMAIL_SIGNATURE").unwrap_or_else(|_| "The Fintrack team".into());

        Self {
            data_dir,
            jwt_secret,
            token_ttl_hours,
            token_issuer,
            email_subject,
            email_signature,
        }
    }
}
