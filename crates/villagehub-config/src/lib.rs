//! # VillageHub Config
//!
//! Configuration structures, each loaded from environment variables with a
//! `from_env()` constructor:
//!
//! - [`jwt`]: token signing secret, lifetime and cookie flags
//! - [`cors`]: allowed browser origins
//! - [`database`]: PostgreSQL URL and pool size
//! - [`storage`]: upload directory, public URL prefix and size limit
//! - [`server`]: bind address
//!
//! ```ignore
//! use villagehub_config::{JwtConfig, ServerConfig};
//!
//! let jwt_config = JwtConfig::from_env();
//! let server = ServerConfig::from_env();
//! ```

pub mod cors;
pub mod database;
pub mod jwt;
pub mod server;
pub mod storage;

pub use cors::CorsConfig;
pub use database::DatabaseConfig;
pub use jwt::{AUTH_COOKIE_NAME, JwtConfig};
pub use server::ServerConfig;
pub use storage::StorageConfig;

pub(crate) fn env_or<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(default)
}
