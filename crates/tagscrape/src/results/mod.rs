//! Persisting extracted values.

pub mod writer;

pub use writer::{write_lines, DEFAULT_OUTPUT_FILE};
