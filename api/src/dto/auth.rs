use cmei_core::AccessToken;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// OAuth2 password-flow form posted to `/token`
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LoginForm {
    #[validate(length(min = 1, max = 150))]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: String,
}

impl From<AccessToken> for TokenResponse {
    fn from(token: AccessToken) -> Self {
        Self {
            access_token: token.access_token,
            token_type: token.token_type,
        }
    }
}
