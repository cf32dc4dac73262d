//! # VillageHub
//!
//! Web application for a village tourism and business directory: public
//! pages and a JSON API for tourist spots, local businesses and events, an
//! admin dashboard, and a user dashboard for business submissions.
//!
//! ## Request flow
//!
//! ```text
//! request ─► logging ─► CORS ─► authorization gate ─► route handler
//!                                 │
//!                                 ├─ 307 redirect (pages)
//!                                 └─ 401/403 JSON (API)
//! ```
//!
//! The gate ([`middleware::gate`]) runs the policy in
//! [`villagehub_auth::gate`]: it classifies the path and method, verifies
//! the `auth_token` cookie when the route needs it, and attaches the
//! caller's [`villagehub_auth::Identity`] for handlers.
//!
//! | path | no / bad token | USER | ADMIN |
//! |------|----------------|------|-------|
//! | `/api/auth/sign{in,up,out}` | pass | pass | pass |
//! | `/user-dashboard...` | redirect `/auth/signin` | pass | pass |
//! | `/dashboard...` | redirect `/auth/signin` | redirect `/user-dashboard` | pass |
//! | `/api/user/...` | 401 | pass | pass |
//! | `GET /api/...` | pass | pass | pass |
//! | `POST /api/business...` | 401 | pass | pass |
//! | other `/api/...` writes | 401 | 403 | pass |
//!
//! ## Layout
//!
//! ```text
//! src/
//! ├── middleware/   # authorization gate and identity extractors
//! ├── modules/      # feature modules (controller / service / router)
//! ├── docs.rs       # OpenAPI document
//! ├── logging.rs    # subscriber set-up and request logging
//! ├── router.rs     # application router
//! ├── state.rs      # shared state
//! └── validator.rs  # ValidatedJson extractor
//! ```
//!
//! Workspace crates: `villagehub-core` (errors, envelopes, pagination,
//! storage), `villagehub-config`, `villagehub-db`, `villagehub-auth`,
//! `villagehub-models`, `villagehub-cli`.
//!
//! API documentation is served at `/swagger-ui`.

pub mod docs;
pub mod logging;
pub mod middleware;
pub mod modules;
pub mod router;
pub mod state;
pub mod validator;

pub use villagehub_auth;
pub use villagehub_config;
pub use villagehub_core;
pub use villagehub_db;
pub use villagehub_models;
