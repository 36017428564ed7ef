//! Token and password hashing configuration.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    /// HS256 signing secret. Override with `JWT_SECRET` in every real deployment.
    pub jwt_secret: String,
    pub token_ttl_hours: u64,
    pub bcrypt_cost: u32,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: "your_jwt_secret".to_string(),
            token_ttl_hours: 24,
            bcrypt_cost: 10,
        }
    }
}
