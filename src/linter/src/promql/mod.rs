//! PromQL input handling
//!
//! The linter never parses query text itself; it delegates to the
//! promql-parser crate and works on the resulting AST.
//!
//! # Modules
//!
//! - [`parser`] - PromQL parsing using the promql-parser crate
//! - [`error`] - Error types for PromQL operations

pub mod error;
pub mod parser;

pub use error::PromQLError;
pub use parser::{get_metric_name, parse, validate};
