// src/consts.rs
//! Shared constants — digest sizes and defaults

/// SHA-256 output size in bytes
pub const DIGEST_LEN: usize = 32;

/// Length of the lowercase hex digest text
pub const DIGEST_HEX_LEN: usize = DIGEST_LEN * 2;

/// Env var naming the config file
pub const CONFIG_ENV_VAR: &str = "CREDENTIAL_DIGEST_CONFIG";

/// Config file used when the env var is unset
pub const DEFAULT_CONFIG_PATH: &str = "credential-digest.toml";

/// Default tracing filter when `RUST_LOG` is unset
pub const DEFAULT_LOG_FILTER: &str = "info";
