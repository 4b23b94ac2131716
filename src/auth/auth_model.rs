use serde::{Deserialize, Serialize};

/// Issued on a successful login.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub token: String,
}
