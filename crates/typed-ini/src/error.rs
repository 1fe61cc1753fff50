use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::value::ValueKind;

#[derive(Debug, Error)]
pub enum Error {
    #[error("cannot open {}: {source}", .path.display())]
    FileOpen {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[cfg(feature = "json")]
    #[error("serde_json error: {0}")]
    SerdeJson(#[from] serde_json::Error),

    #[error("line {line}: key `{key}` appears before any [section] header")]
    NoActiveSection { line: usize, key: String },

    #[error("line {line}: `{text}` is not a representable {kind}")]
    InvalidNumber {
        line: usize,
        text: String,
        kind: ValueKind,
    },

    #[error("path `{path}` has no `.` between section and key")]
    MalformedPath { path: String },

    #[error("section `{section}` does not exist")]
    SectionNotFound { section: String },

    #[error("key `{key}` does not exist in section `{section}`")]
    KeyNotFound { section: String, key: String },

    #[error("`{path}` holds {found}, not {expected}")]
    TypeMismatch {
        path: String,
        expected: ValueKind,
        found: ValueKind,
    },
}

pub type Result<T> = core::result::Result<T, Error>;
