use std::io;
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum LintError {
    #[error("Failed to read queries from {}: {source}", path.display())]
    ReadInput {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Failed to write report: {0}")]
    WriteReport(#[from] io::Error),
}
