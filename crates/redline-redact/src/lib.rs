#![warn(clippy::pedantic)]

pub mod error;
pub mod literal;
pub mod report;

pub use error::RedactError;
pub use literal::{DEFAULT_MASK, LiteralRedactor};
pub use report::{Redaction, RedactionReport};
