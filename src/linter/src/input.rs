//! Loading queries from files and streams
//!
//! One query per line. Blank lines and lines starting with `#` are skipped.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use crate::error::LintError;

/// Path that stands for standard input
pub const STDIN_PATH: &str = "-";

/// Read queries from a line-oriented reader
pub fn read_queries<R: BufRead>(reader: R) -> io::Result<Vec<String>> {
    let mut queries = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let query = line.trim();
        if query.is_empty() || query.starts_with('#') {
            continue;
        }
        queries.push(query.to_string());
    }
    Ok(queries)
}

/// Read queries from `path`, or from stdin when `path` is `-`
pub fn read_query_file(path: &Path) -> Result<Vec<String>, LintError> {
    let wrap = |source| LintError::ReadInput {
        path: path.to_path_buf(),
        source,
    };

    let queries = if path.as_os_str() == STDIN_PATH {
        read_queries(io::stdin().lock()).map_err(wrap)?
    } else {
        let file = File::open(path).map_err(wrap)?;
        read_queries(BufReader::new(file)).map_err(wrap)?
    };
    log::debug!("read {} queries from {}", queries.len(), path.display());
    Ok(queries)
}
