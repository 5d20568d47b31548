//! Homestead Core - Domain entities, services, and traits.
//!
//! This crate contains the business logic for the Homestead real-estate
//! marketplace: the investment return calculator, listings, documents, the
//! scripted assistant, and the demo sign-in session. Everything is held in
//! memory; storage is abstracted behind repository traits.

pub mod calculator;
pub mod chat;
pub mod constants;
pub mod documents;
pub mod errors;
pub mod events;
pub mod properties;
pub mod users;
pub mod utils;

// Re-export the calculator surface
pub use calculator::*;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
