// src/config/defaults.rs
use crate::algo::DigestAlgorithm;
use crate::config::app::{DigestSettings, LoggingSettings};
use crate::consts::DEFAULT_LOG_FILTER;

pub fn default_digest() -> DigestSettings {
    DigestSettings {
        algorithm: DigestAlgorithm::default(),
    }
}

pub fn default_logging() -> LoggingSettings {
    LoggingSettings {
        filter: default_log_filter(),
    }
}

pub fn default_log_filter() -> String {
    DEFAULT_LOG_FILTER.into()
}
