//! Authenticated caller extraction.
//!
//! Tokens are issued by the identity provider and arrive as
//! `Authorization: Bearer <jwt>`. Handlers that take an [`AuthenticatedUser`]
//! argument reject requests without a valid token before any service code
//! runs.

use std::future::{Ready, ready};

use actix_web::http::StatusCode;
use actix_web::{FromRequest, HttpRequest, HttpResponse, ResponseError, dev::Payload, web};
use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::config::ServerConfig;
use crate::routes::ApiResponse;

/// Group membership required for venue-operator operations.
pub const VENUE_GROUP: &str = "venue";

/// Verified claims of the caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthenticatedUser {
    /// Unique subject assigned by the identity provider.
    pub sub: String,
    pub email: String,
    #[serde(rename = "cognito:groups", default)]
    pub groups: Vec<String>,
    pub exp: usize,
}

impl AuthenticatedUser {
    pub fn in_group(&self, group: &str) -> bool {
        self.groups.iter().any(|g| g == group)
    }
}

/// Verifies bearer tokens against the configured secret.
#[derive(Clone)]
pub struct JwtVerifier {
    key: DecodingKey,
    validation: Validation,
}

impl JwtVerifier {
    pub fn new(secret: &str, issuer: Option<&str>, audience: Option<&str>) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        if let Some(issuer) = issuer {
            validation.set_issuer(&[issuer]);
        }
        match audience {
            Some(audience) => validation.set_audience(&[audience]),
            None => validation.validate_aud = false,
        }
        Self {
            key: DecodingKey::from_secret(secret.as_bytes()),
            validation,
        }
    }

    pub fn from_config(config: &ServerConfig) -> Self {
        Self::new(
            &config.jwt_secret,
            config.jwt_issuer.as_deref(),
            config.jwt_audience.as_deref(),
        )
    }

    pub fn verify(&self, token: &str) -> Result<AuthenticatedUser, AuthError> {
        decode::<AuthenticatedUser>(token, &self.key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| {
                log::warn!("Rejected bearer token: {e}");
                AuthError::InvalidToken
            })
    }
}

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("missing bearer token")]
    MissingToken,
    #[error("invalid bearer token")]
    InvalidToken,
    #[error("authentication is not configured")]
    NotConfigured,
}

impl ResponseError for AuthError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::NotConfigured => StatusCode::INTERNAL_SERVER_ERROR,
            _ => StatusCode::UNAUTHORIZED,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        HttpResponse::build(status).json(ApiResponse::<()>::error(status, self.to_string()))
    }
}

fn bearer_token(req: &HttpRequest) -> Option<&str> {
    req.headers()
        .get(actix_web::http::header::AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|token| !token.is_empty())
}

impl FromRequest for AuthenticatedUser {
    type Error = AuthError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let Some(verifier) = req.app_data::<web::Data<JwtVerifier>>() else {
            log::error!("JwtVerifier missing from application data");
            return ready(Err(AuthError::NotConfigured));
        };
        let result = match bearer_token(req) {
            Some(token) => verifier.verify(token),
            None => Err(AuthError::MissingToken),
        };
        ready(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jsonwebtoken::{EncodingKey, Header, encode};

    fn token(secret: &str, groups: &[&str]) -> String {
        let claims = AuthenticatedUser {
            sub: "sub-1".into(),
            email: "owner@venue.test".into(),
            groups: groups.iter().map(|g| g.to_string()).collect(),
            exp: 4_102_444_800,
        };
        encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(secret.as_bytes()),
        )
        .unwrap()
    }

    #[test]
    fn verifies_tokens_signed_with_the_secret() {
        let verifier = JwtVerifier::new("secret", None, None);
        let user = verifier.verify(&token("secret", &["venue"])).unwrap();
        assert_eq!(user.sub, "sub-1");
        assert!(user.in_group(VENUE_GROUP));
    }

    #[test]
    fn rejects_tokens_signed_with_another_secret() {
        let verifier = JwtVerifier::new("secret", None, None);
        assert!(matches!(
            verifier.verify(&token("other", &["venue"])),
            Err(AuthError::InvalidToken)
        ));
    }

    #[test]
    fn group_claim_defaults_to_empty() {
        let verifier = JwtVerifier::new("secret", None, None);
        let user = verifier.verify(&token("secret", &[])).unwrap();
        assert!(!user.in_group(VENUE_GROUP));
    }
}
