//! Implementation-level failures.
//!
//! These are distinct from in-language faults: an incompatible operand
//! pair or a division by zero never reaches this type, it resolves to
//! `Value::None`/`false` inside the evaluator and keeps running. An
//! `Error` means the front-end rejected the source, or the program used a
//! construct outside the supported subset, or an internal invariant was
//! violated.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("parse error: {0}")]
    Parse(String),

    #[error("unsupported construct: {0}")]
    Unsupported(String),

    #[error("internal error: {0}")]
    Internal(String),
}

pub type Result<T> = std::result::Result<T, Error>;
