//! Domain-specific errors.
//!
//! Usage errors never surface to callers; the controller reports them on the
//! warn channel and leaves its state untouched.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum UsageError {
    #[error("event carries neither an input file list nor a drop payload")]
    UnrecognizedSource,
}
