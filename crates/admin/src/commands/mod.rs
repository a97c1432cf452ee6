//! Command implementations.
//!
//! Each command talks to a `DocumentStore` and returns what it did; the
//! binary turns the result into console output.

pub mod maintenance;
pub mod personality;
pub mod ranks;
pub mod seo;
pub mod status;
pub mod trials;
pub mod web_settings;
