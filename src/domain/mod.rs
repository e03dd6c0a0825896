//! Domain layer for menu-roulette
//!
//! Core models, errors, and the ports the services depend on.

pub mod errors;
pub mod models;
pub mod ports;

pub use errors::{GenerationError, InputError, SessionError, SessionResult};
