//! # VillageHub Core
//!
//! Foundational types shared by every VillageHub crate:
//!
//! - [`errors`]: [`AppError`], the HTTP-aware error returned by handlers
//! - [`response`]: the `{ success, message, data }` success envelope
//! - [`pagination`]: page/limit query parameters and list metadata
//! - [`password`]: bcrypt hashing and verification
//! - [`file_storage`]: the media storage abstraction and its local backend
//!
//! # Example
//!
//! ```ignore
//! use villagehub_core::{AppError, ApiResponse};
//!
//! async fn handler() -> Result<Json<ApiResponse<Spot>>, AppError> {
//!     let spot = load().await.ok_or_else(|| AppError::not_found(anyhow!("Tourism spot not found")))?;
//!     Ok(Json(ApiResponse::ok(spot)))
//! }
//! ```

pub mod errors;
pub mod file_storage;
pub mod pagination;
pub mod password;
pub mod response;

pub use errors::AppError;
pub use file_storage::{FileStorage, LocalFileStorage, StorageError};
pub use pagination::{PaginationMeta, PaginationParams};
pub use password::{hash_password, verify_password};
pub use response::{ApiResponse, Paginated};
