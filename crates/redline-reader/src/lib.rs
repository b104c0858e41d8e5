#![warn(clippy::pedantic)]

pub mod config;
pub mod error;
pub mod line;
pub mod reader;
pub mod streaming;

mod scan;

pub use config::{DEFAULT_CHUNK_SIZE, DEFAULT_MAX_LINE_SIZE, ReaderConfig};
pub use error::ReadError;
pub use line::Line;
pub use reader::{LineReader, Lines};
pub use streaming::AsyncLineReader;
