//! humanbench_admin - seeding and maintenance tooling for the humanbench
//! document store.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod loader;
pub mod output;
pub mod storage;

pub use config::Config;
pub use error::{AdminError, Result};
