//! Administrative commands behind the `villagehub-cli` binary.
//!
//! - [`admin`]: create or promote administrator accounts
//! - [`seeder`]: load sample tourism spots, businesses and events

pub mod admin;
pub mod seeder;
