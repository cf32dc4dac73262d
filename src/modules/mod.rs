//! Feature modules. Each has a `controller` (handlers with OpenAPI
//! annotations), a `service` (SQL and business rules) and a `router`.

pub mod account;
pub mod auth;
pub mod business;
pub mod events;
pub mod pages;
pub mod tourism;
pub mod uploads;
pub mod users;
