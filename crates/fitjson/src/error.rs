use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("serde_json error: {0}")]
    SerdeJson(#[from] serde_json::Error),

    /// A quoted value at a numeric field is not a number literal.
    #[error("field `{path}`: cannot coerce {value:?} to a number")]
    NumericCoercion { path: String, value: String },

    /// The record reported a field that maps to none of the known kinds.
    #[error("field `{path}`: unsupported field kind `{kind}`")]
    UnsupportedKind { path: String, kind: String },

    #[error("schema at `{path}`: {message}")]
    Schema { path: String, message: String },
}

pub type Result<T> = core::result::Result<T, Error>;
