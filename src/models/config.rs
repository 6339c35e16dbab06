use serde::Deserialize;

use crate::domain::types::{PublicUrl, TypeConstraintError};
use crate::repository::{CreateGuard, DeletePolicy};

/// Configuration options for the products service.
///
/// Loaded from `config/default.yaml`, an optional `config/{APP_ENV}.yaml`
/// and `APP_`-prefixed environment variables, in that order.
#[derive(Clone, Debug, Deserialize)]
pub struct ServerConfig {
    pub address: String,
    pub port: u16,
    /// SQLite database path.
    pub database_url: String,
    /// Shared secret used to verify identity provider tokens (HS256).
    pub jwt_secret: String,
    #[serde(default)]
    pub jwt_issuer: Option<String>,
    #[serde(default)]
    pub jwt_audience: Option<String>,
    /// Bucket receiving uploaded product images.
    pub s3_bucket: String,
    pub s3_region: String,
    /// Custom endpoint for S3-compatible stores.
    #[serde(default)]
    pub s3_endpoint: Option<String>,
    #[serde(default)]
    pub s3_force_path_style: bool,
    /// Base of returned image URLs; defaults to `https://{s3_bucket}`.
    #[serde(default)]
    pub public_base_url: Option<String>,
    #[serde(default)]
    pub create_guard: CreateGuard,
    #[serde(default)]
    pub delete_policy: DeletePolicy,
    /// Browser origins allowed by CORS; empty allows any origin.
    #[serde(default)]
    pub cors_allowed_origins: Vec<String>,
}

impl ServerConfig {
    /// Base URL that storage keys are appended to, without a trailing slash.
    pub fn public_base_url(&self) -> String {
        match &self.public_base_url {
            Some(url) => url.trim_end_matches('/').to_string(),
            None => format!("https://{}", self.s3_bucket),
        }
    }

    /// Reject settings that would otherwise only fail once a request uses them.
    pub fn validate(&self) -> Result<(), TypeConstraintError> {
        PublicUrl::new(self.public_base_url())?;
        Ok(())
    }
}
