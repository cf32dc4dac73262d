//! # VillageHub Auth
//!
//! Session tokens and the authorization policy every request passes through.
//!
//! - [`claims`]: [`Role`], the token [`Claims`] and the per-request [`Identity`]
//! - [`jwt`]: token issuance and the pure [`verify_token`] check
//! - [`gate`]: route classification and the pass/redirect/reject decision table
//!
//! The policy does no I/O: `gate::evaluate` takes a path, a
//! method and the raw cookie value and returns a [`gate::Evaluation`]. The
//! HTTP adapter in the application applies that decision to the request.
//!
//! ```ignore
//! use villagehub_auth::gate::{evaluate, Decision};
//!
//! let evaluation = evaluate("/dashboard", &Method::GET, cookie, &jwt_config);
//! match evaluation.decision {
//!     Decision::Redirect(to) => { /* ... */ }
//!     _ => {}
//! }
//! ```

pub mod claims;
pub mod gate;
pub mod jwt;

pub use claims::{Claims, Identity, Role};
pub use gate::{Credential, Decision, Evaluation, Rejection, RouteClass};
pub use jwt::{VerifyError, create_token, verify_token};
