//! Decoding pipeline: scanner -> type inference -> document builder

pub mod infer;
pub mod parser;
pub mod scanner;
