//! Framework error type.
//!
//! Sub-crates may define their own error enums and convert them into
//! `CatError` via `From` impls, or keep them separate and wrap `CatError` as
//! one variant.  Both patterns are acceptable; prefer whichever keeps error
//! sites clean.

use thiserror::Error;

/// The top-level error type for `cat-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum CatError {
    #[error("unknown parameter column {0:?}")]
    UnknownParameter(String),

    #[error("{what} length {got} does not match expected {expected}")]
    DimensionMismatch {
        expected: usize,
        got:      usize,
        what:     &'static str,
    },

    #[error("selection strategy {strategy:?} requires an exposure matrix but none was supplied")]
    MissingExposureMatrix { strategy: &'static str },

    #[error("configuration error: {0}")]
    Config(String),

    #[error("parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Shorthand result type for all `cat-*` crates.
pub type CatResult<T> = Result<T, CatError>;
