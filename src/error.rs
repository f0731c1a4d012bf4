//! Crate-level error type

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RegistryError {
    /// The stop-on-first switch tripped. The violation is already on stderr.
    #[error("validation stopped on first failure")]
    Halted,

    /// The registry layout itself is unusable; validation cannot continue.
    #[error("{0}")]
    Structural(String),
}
