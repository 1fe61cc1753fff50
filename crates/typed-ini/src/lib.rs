#![doc = include_str!("../README.md")]

pub mod decode;
pub mod document;
pub mod error;
mod number;
pub mod options;
pub mod value;

pub use crate::document::{Document, Entry, Section};
pub use crate::error::{Error, Result};
pub use crate::options::Options;
pub use crate::value::{FromValue, Value, ValueKind};

use std::fs::File;
use std::io::Read;
use std::path::Path;

pub fn from_str(s: &str, options: &Options) -> Result<Document> {
    crate::decode::parser::parse_document(s, options)
}

pub fn from_reader<R: Read>(mut reader: R, options: &Options) -> Result<Document> {
    let mut s = String::new();
    reader.read_to_string(&mut s)?;
    from_str(&s, options)
}

/// Read the whole file, then parse it. The file is closed before parsing
/// starts.
pub fn from_path<P: AsRef<Path>>(path: P, options: &Options) -> Result<Document> {
    let path = path.as_ref();
    let open_error = |source| Error::FileOpen {
        path: path.to_path_buf(),
        source,
    };
    let mut s = String::new();
    File::open(path)
        .and_then(|mut f| f.read_to_string(&mut s))
        .map_err(open_error)?;
    from_str(&s, options)
}
