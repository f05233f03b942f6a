//! PromQL parser wrapper
//!
//! This module provides a thin wrapper around the promql-parser crate with
//! linter-specific error handling and selector helpers.

use promql_parser::label::MatchOp;
use promql_parser::parser::{self, Expr, VectorSelector};

use super::error::PromQLError;

/// Label holding the series name inside a selector's matchers
pub const METRIC_NAME_LABEL: &str = "__name__";

/// Parse a PromQL query string into an AST expression
///
/// # Arguments
/// * `query` - The PromQL query string to parse
///
/// # Returns
/// The parsed expression AST, or a parse error
///
/// # Examples
/// ```ignore
/// use linter::promql::parser::parse;
///
/// let expr = parse("rate(http_requests_total[5m])").unwrap();
/// let expr = parse("sum by (job)(rate(http_requests_total[5m]))").unwrap();
/// ```
pub fn parse(query: &str) -> Result<Expr, PromQLError> {
    let query = query.trim();
    if query.is_empty() {
        return Err(PromQLError::EmptyQuery);
    }
    parser::parse(query).map_err(|e| PromQLError::ParseError(e.to_string()))
}

/// Check if a query string is syntactically valid
pub fn validate(query: &str) -> Result<(), PromQLError> {
    parse(query).map(|_| ())
}

/// Extract the series name from a vector selector
///
/// The literal metric identifier wins; otherwise an exact `__name__`
/// matcher is used. Regex name matchers do not name a single series and
/// yield `None`.
pub fn get_metric_name(vs: &VectorSelector) -> Option<&str> {
    if let Some(name) = vs.name.as_deref() {
        return Some(name);
    }
    vs.matchers
        .matchers
        .iter()
        .find(|m| m.name == METRIC_NAME_LABEL && matches!(m.op, MatchOp::Equal))
        .map(|m| m.value.as_str())
}
