//! Rendering lint results for humans and machines

use std::fmt;
use std::io::Write;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::diagnostic::Diagnostic;
use crate::error::LintError;
use crate::promql::PromQLError;

/// Output format of the report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// `error: ...` lines
    #[default]
    Text,
    /// One JSON object per line
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text => write!(f, "text"),
            Self::Json => write!(f, "json"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(format!("unknown output format '{other}', expected text or json")),
        }
    }
}

#[derive(Serialize)]
struct JsonRecord<'a> {
    query: &'a str,
    kind: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    subject: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    context: Option<&'a str>,
    message: String,
}

/// Totals over every query a [`Reporter`] has seen
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    pub queries: usize,
    pub violations: usize,
    pub parse_failures: usize,
}

impl Summary {
    /// Whether the run should end with a failing exit status
    pub fn is_failure(&self, fail_on_violation: bool) -> bool {
        self.parse_failures > 0 || (fail_on_violation && self.violations > 0)
    }
}

/// Writes lint results for a sequence of queries
pub struct Reporter<W: Write> {
    out: W,
    format: OutputFormat,
    summary: Summary,
}

impl<W: Write> Reporter<W> {
    pub fn new(out: W, format: OutputFormat) -> Self {
        Self {
            out,
            format,
            summary: Summary::default(),
        }
    }

    /// Write the outcome of linting `query`
    pub fn report_query(
        &mut self,
        query: &str,
        result: &Result<Vec<Diagnostic>, PromQLError>,
    ) -> Result<(), LintError> {
        self.summary.queries += 1;
        match result {
            Ok(diagnostics) => {
                self.summary.violations += diagnostics.len();
                for diagnostic in diagnostics {
                    self.write_diagnostic(query, diagnostic)?;
                }
            }
            Err(err) => {
                self.summary.parse_failures += 1;
                self.write_parse_failure(query, err)?;
            }
        }
        Ok(())
    }

    fn write_diagnostic(&mut self, query: &str, diagnostic: &Diagnostic) -> Result<(), LintError> {
        match self.format {
            OutputFormat::Text => writeln!(self.out, "error: {diagnostic}")?,
            OutputFormat::Json => self.write_json(&JsonRecord {
                query,
                kind: diagnostic.kind.as_str(),
                subject: Some(diagnostic.subject.as_str()),
                context: Some(diagnostic.context.as_str()),
                message: diagnostic.to_string(),
            })?,
        }
        Ok(())
    }

    fn write_parse_failure(&mut self, query: &str, err: &PromQLError) -> Result<(), LintError> {
        match self.format {
            OutputFormat::Text => writeln!(self.out, "error: failed to parse query {query}: {err}")?,
            OutputFormat::Json => self.write_json(&JsonRecord {
                query,
                kind: "parse_error",
                subject: None,
                context: None,
                message: err.to_string(),
            })?,
        }
        Ok(())
    }

    fn write_json(&mut self, record: &JsonRecord<'_>) -> Result<(), LintError> {
        serde_json::to_writer(&mut self.out, record).map_err(std::io::Error::from)?;
        writeln!(self.out)?;
        Ok(())
    }

    /// Flush and hand back the underlying writer
    pub fn finish(mut self) -> Result<(W, Summary), LintError> {
        self.out.flush()?;
        Ok((self.out, self.summary))
    }
}
