//! Rule violations and the sink they are reported to

use std::fmt;

use serde::Serialize;

/// What went wrong at a node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DiagnosticKind {
    /// A rate-converting function was applied to something that is not a counter selector
    RateOnNonCounter,
    /// A counter selector is consumed by something other than a rate-converting function
    UnwrappedCounter,
    /// A rate-converting call carries no argument to check
    MalformedCall,
}

impl DiagnosticKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::RateOnNonCounter => "rate_on_non_counter",
            Self::UnwrappedCounter => "unwrapped_counter",
            Self::MalformedCall => "malformed_call",
        }
    }
}

impl fmt::Display for DiagnosticKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single violation found while walking a query
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    /// Offending function name or selector source text
    pub subject: String,
    /// Source text of the enclosing call, or of the selector's parent
    pub context: String,
}

impl Diagnostic {
    pub fn rate_on_non_counter(function: &str, call: impl fmt::Display) -> Self {
        Self {
            kind: DiagnosticKind::RateOnNonCounter,
            subject: function.to_string(),
            context: call.to_string(),
        }
    }

    pub fn unwrapped_counter(selector: impl fmt::Display, parent: impl fmt::Display) -> Self {
        Self {
            kind: DiagnosticKind::UnwrappedCounter,
            subject: selector.to_string(),
            context: parent.to_string(),
        }
    }

    pub fn malformed_call(function: &str, call: impl fmt::Display) -> Self {
        Self {
            kind: DiagnosticKind::MalformedCall,
            subject: function.to_string(),
            context: call.to_string(),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            DiagnosticKind::RateOnNonCounter => write!(
                f,
                "function {} must be called on a counter selector in {}",
                self.subject, self.context
            ),
            DiagnosticKind::UnwrappedCounter => write!(
                f,
                "counter selector {} used in expression without first passing through rate(), irate(), increase() or resets()",
                self.subject
            ),
            DiagnosticKind::MalformedCall => write!(
                f,
                "function {} called without arguments in {}",
                self.subject, self.context
            ),
        }
    }
}

/// Append-only collector for diagnostics
pub trait DiagnosticSink {
    fn report(&mut self, diagnostic: Diagnostic);
}

impl DiagnosticSink for Vec<Diagnostic> {
    fn report(&mut self, diagnostic: Diagnostic) {
        self.push(diagnostic);
    }
}
