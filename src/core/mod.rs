// src/core/mod.rs
pub mod digest;
pub mod digester;
pub mod encode;
#[cfg(feature = "async")]
pub mod nonblocking;
pub mod verify;

pub use digest::*;
pub use digester::*;
pub use encode::*;
#[cfg(feature = "async")]
pub use nonblocking::*;
pub use verify::*;

// Keep only the absolute top-level public API here if needed
pub type Result<T> = std::result::Result<T, crate::error::CoreError>;
