//! Pure domain logic for the Human Benchmark back office: record shapes,
//! seed catalogues, storage abstractions and page metadata. Nothing in this
//! crate performs I/O.

pub mod maintenance;
pub mod personality;
pub mod ranks;
pub mod seo;
pub mod storage;
pub mod trials;
pub mod web_settings;
