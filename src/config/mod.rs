// src/config/mod.rs
//! Configuration system for credential-digest
//!
//! Central, lazy-loaded global config with TOML + env override of the path.

pub use app::{load, load_from, load_or_default, Config, DigestSettings, LoggingSettings};

mod app;
mod defaults;
