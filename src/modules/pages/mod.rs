//! Server-rendered pages. Each is a thin HTML shell over the same services
//! the JSON API uses.

pub mod controller;
pub mod render;
pub mod router;

pub use router::init_pages_router;
