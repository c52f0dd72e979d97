//! Bearer-token authentication for the JSON API.
//!
//! Tokens are issued by the external identity service; this extractor only
//! validates them against the shared secret and exposes the claims to
//! handlers.

use std::future::{Ready, ready};

use actix_web::error::ErrorUnauthorized;
use actix_web::http::header;
use actix_web::{Error, FromRequest, HttpRequest, dev::Payload, web};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

use crate::models::config::ServerConfig;

#[derive(Clone, Debug, Serialize, Deserialize)]
/// Claims carried by a validated bearer token.
pub struct AuthenticatedUser {
    pub sub: String,
    pub email: String,
    pub name: String,
    pub exp: usize,
}

impl AuthenticatedUser {
    /// Decodes and validates a token, returning the claims on success.
    pub fn from_token(token: &str, secret: &str) -> Option<Self> {
        decode::<AuthenticatedUser>(
            token,
            &DecodingKey::from_secret(secret.as_bytes()),
            &Validation::default(),
        )
        .map(|data| data.claims)
        .ok()
    }

    /// Signs the claims into a token. The identity service does this in
    /// production; tests use it to mint valid credentials.
    pub fn to_token(&self, secret: &str) -> Result<String, jsonwebtoken::errors::Error> {
        encode(
            &Header::default(),
            self,
            &EncodingKey::from_secret(secret.as_bytes()),
        )
    }
}

impl FromRequest for AuthenticatedUser {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let user = req
            .app_data::<web::Data<ServerConfig>>()
            .and_then(|config| {
                let header_value = req.headers().get(header::AUTHORIZATION)?.to_str().ok()?;
                let token = header_value.strip_prefix("Bearer ")?;
                Self::from_token(token.trim(), &config.secret)
            });

        ready(user.ok_or_else(|| ErrorUnauthorized("Invalid or missing bearer token")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn claims() -> AuthenticatedUser {
        AuthenticatedUser {
            sub: "user-1".to_string(),
            email: "admin@example.com".to_string(),
            name: "Admin".to_string(),
            exp: (chrono::Utc::now().timestamp() + 3600) as usize,
        }
    }

    #[test]
    fn token_round_trip() {
        let user = claims();
        let token = user.to_token("secret").expect("token should sign");

        let decoded = AuthenticatedUser::from_token(&token, "secret").expect("token is valid");
        assert_eq!(decoded.email, user.email);
        assert_eq!(decoded.sub, user.sub);
    }

    #[test]
    fn token_with_wrong_secret_is_rejected() {
        let token = claims().to_token("secret").expect("token should sign");
        assert!(AuthenticatedUser::from_token(&token, "other-secret").is_none());
    }

    #[test]
    fn expired_token_is_rejected() {
        let mut user = claims();
        user.exp = 1_000_000; // far in the past
        let token = user.to_token("secret").expect("token should sign");
        assert!(AuthenticatedUser::from_token(&token, "secret").is_none());
    }
}
