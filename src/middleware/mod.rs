//! Request-processing middleware and the extractors that read its output.
//!
//! - [`gate`]: the authorization gate every non-static request passes through
//! - [`auth`]: extractors exposing the identity the gate attached
//!
//! # Flow
//!
//! 1. The browser sends the `auth_token` cookie.
//! 2. [`gate::authorization_gate`] classifies the request, verifies the token
//!    when the route needs one, and either short-circuits (redirect or JSON
//!    error) or forwards.
//! 3. On forward it inserts an [`villagehub_auth::Identity`] extension and the
//!    `x-user-id` / `x-user-role` headers.
//! 4. Handlers take [`auth::AuthUser`] or [`auth::RequireAdmin`]; neither
//!    looks at client-controlled headers.
//!
//! ```ignore
//! async fn create_business(AuthUser(identity): AuthUser, ...) -> Result<..., AppError> {
//!     BusinessService::create(&state.db, identity.user_id, ...).await
//! }
//! ```

pub mod auth;
pub mod gate;
