//! Session token configuration.
//!
//! - `JWT_SECRET`: HMAC secret shared by signing and verification
//! - `JWT_EXPIRY`: token and cookie lifetime in seconds (default one day)
//! - `COOKIE_SECURE`: mark the `auth_token` cookie `Secure`

use std::env;

use crate::env_or;

/// The one cookie that carries the signed session token.
pub const AUTH_COOKIE_NAME: &str = "auth_token";

const DEFAULT_SECRET: &str = "change-me-in-production";

#[derive(Clone, Debug)]
pub struct JwtConfig {
    pub secret: String,
    pub expiry_seconds: i64,
    pub cookie_secure: bool,
}

impl JwtConfig {
    pub fn from_env() -> Self {
        let secret = env::var("JWT_SECRET").unwrap_or_else(|_| {
            tracing::warn!("JWT_SECRET is not set; using the development default");
            DEFAULT_SECRET.to_string()
        });

        Self {
            secret,
            expiry_seconds: env_or("JWT_EXPIRY", 86_400),
            cookie_secure: env_or("COOKIE_SECURE", false),
        }
    }

    /// Fixed configuration for tests and tooling.
    pub fn with_secret(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            expiry_seconds: 3600,
            cookie_secure: false,
        }
    }
}
