//! Static checks for PromQL queries
//!
//! The crate inspects an already parsed PromQL expression and reports uses of
//! counter series (`*_total`) that bypass the functions converting them into
//! a rate (`rate`, `irate`, `increase`, `resets`).
//!
//! ```text
//! query text → promql-parser AST → pre-order walk → rule → diagnostics → report
//! ```
//!
//! # Example
//!
//! ```ignore
//! use linter::lint_query;
//!
//! let diagnostics = lint_query("sum(http_requests_total)")?;
//! assert_eq!(diagnostics.len(), 1);
//! ```

pub mod classify;
pub mod diagnostic;
pub mod error;
pub mod input;
pub mod policy;
pub mod promql;
pub mod report;
pub mod rule;
pub mod walk;

pub use diagnostic::{Diagnostic, DiagnosticKind, DiagnosticSink};
pub use error::LintError;
pub use report::{OutputFormat, Reporter, Summary};
pub use rule::{check_expr, check_node, lint, lint_query};
