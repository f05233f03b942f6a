//! PromQL-specific error types

/// Errors that can occur while turning query text into an AST
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PromQLError {
    /// Error parsing the PromQL query syntax
    #[error("PromQL parse error: {0}")]
    ParseError(String),
    /// The query text was empty after trimming
    #[error("PromQL query is empty")]
    EmptyQuery,
}
