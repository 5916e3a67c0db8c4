use std::sync::Arc;

use chrono::Utc;
use jsonwebtoken::{DecodingKey, EncodingKey, Validation, decode, encode};
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};
use warden_application::Collaborator;
use warden_core::{AccessToken, TokenIssuer, TokenIssuerError, UserId};

#[derive(Clone)]
pub struct JwtConfig {
    pub jwt_secret: Secret<String>,
    pub token_ttl_in_seconds: i64,
}

impl JwtConfig {
    pub fn as_bytes(&self) -> &[u8] {
        self.jwt_secret.expose_secret().as_bytes()
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Claims {
    pub sub: String,
    pub exp: usize,
}

/// Issues HS256-signed JWTs whose subject is the user id.
#[derive(Clone)]
pub struct JwtTokenIssuer {
    config: JwtConfig,
}

impl JwtTokenIssuer {
    pub fn new(config: JwtConfig) -> Self {
        Self { config }
    }
}

#[async_trait::async_trait]
impl TokenIssuer for JwtTokenIssuer {
    #[tracing::instrument(name = "Generating access token", skip_all, fields(user_id = %user_id))]
    async fn generate(&self, user_id: &UserId) -> Result<AccessToken, TokenIssuerError> {
        let token = generate_access_token(
            user_id,
            self.config.token_ttl_in_seconds,
            self.config.as_bytes(),
        )?;

        AccessToken::parse(token).map_err(|e| TokenIssuerError::UnexpectedError(e.to_string()))
    }
}

impl Collaborator for JwtTokenIssuer {
    fn token_issuer(self: Arc<Self>) -> Option<Arc<dyn TokenIssuer>> {
        Some(self)
    }
}

// Create JWT access token
pub fn generate_access_token(
    user_id: &UserId,
    token_ttl_seconds: i64,
    secret: &[u8],
) -> Result<String, TokenIssuerError> {
    let delta = chrono::Duration::try_seconds(token_ttl_seconds).ok_or(
        TokenIssuerError::UnexpectedError("Failed to create token duration".to_string()),
    )?;

    // Create JWT expiration time
    let exp = Utc::now()
        .checked_add_signed(delta)
        .ok_or(TokenIssuerError::UnexpectedError(
            "Duration out of range".to_string(),
        ))?
        .timestamp();

    let exp: usize = exp.try_into().map_err(|_| {
        TokenIssuerError::UnexpectedError("Failed to cast i64 to usize".to_string())
    })?;

    let claims = Claims {
        sub: user_id.to_string(),
        exp,
    };

    encode(
        &jsonwebtoken::Header::default(),
        &claims,
        &EncodingKey::from_secret(secret),
    )
    .map_err(|e| TokenIssuerError::TokenError(e.to_string()))
}

// Check a token's signature and expiry and return its claims
pub fn decode_access_token(token: &str, secret: &[u8]) -> Result<Claims, TokenIssuerError> {
    decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret),
        &Validation::default(),
    )
    .map(|data| data.claims)
    .map_err(|e| TokenIssuerError::TokenError(e.to_string()))
}
