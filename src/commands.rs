use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use common::cli::{CommonArgs, utils};
use common::config::Configuration;
use linter::input::{read_queries, read_query_file};
use linter::{OutputFormat, Reporter, Summary, lint_query};

/// Flag PromQL counters used without rate(), irate(), increase() or resets()
#[derive(Parser, Debug)]
#[command(name = "promlint", version, about)]
pub struct Cli {
    #[command(flatten)]
    common: CommonArgs,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Lint PromQL queries
    Check(CheckArgs),
    /// Show current configuration and exit
    Config {
        #[arg(long, help = "Show configuration in JSON format")]
        json: bool,
    },
    /// Show version information and exit
    Version,
}

#[derive(Args, Debug)]
struct CheckArgs {
    /// Queries to lint; read from stdin when neither queries nor files are given
    #[arg(value_name = "QUERY")]
    queries: Vec<String>,

    /// File with one query per line (`-` for stdin)
    #[arg(short, long = "file", value_name = "PATH")]
    files: Vec<PathBuf>,

    /// Output format, overrides the configured one
    #[arg(long, value_name = "text|json")]
    format: Option<OutputFormat>,
}

impl Cli {
    pub fn run(self) -> Result<ExitCode> {
        utils::init_logging(&self.common);
        let config = utils::load_config(self.common.config.as_ref())?;

        match self.command {
            Commands::Check(args) => args.run(&config),
            Commands::Config { json } => {
                utils::display_config(&config, json)?;
                Ok(ExitCode::SUCCESS)
            }
            Commands::Version => {
                println!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
                println!("Rust version: {}", env!("CARGO_PKG_RUST_VERSION"));
                Ok(ExitCode::SUCCESS)
            }
        }
    }
}

impl CheckArgs {
    fn run(self, config: &Configuration) -> Result<ExitCode> {
        let queries = self.collect_queries()?;
        let format = self.format.unwrap_or(config.output.format);

        // Text diagnostics are an stderr side channel; JSON is the command's output.
        let out: Box<dyn Write> = match format {
            OutputFormat::Text => Box::new(io::stderr().lock()),
            OutputFormat::Json => Box::new(io::stdout().lock()),
        };
        let (_, summary) = check_queries(&queries, out, format)?;

        log::info!(
            "Checked {} queries: {} violation(s), {} parse failure(s)",
            summary.queries,
            summary.violations,
            summary.parse_failures
        );

        if summary.is_failure(config.fail_on_violation) {
            Ok(ExitCode::FAILURE)
        } else {
            Ok(ExitCode::SUCCESS)
        }
    }

    fn collect_queries(&self) -> Result<Vec<String>> {
        if self.queries.is_empty() && self.files.is_empty() {
            log::debug!("Reading queries from stdin");
            return read_queries(io::stdin().lock()).context("Failed to read queries from stdin");
        }

        let mut queries = self.queries.clone();
        for path in &self.files {
            queries.extend(read_query_file(path)?);
        }
        if queries.is_empty() {
            log::warn!("No queries to check");
        }
        Ok(queries)
    }
}

fn check_queries<W: Write>(
    queries: &[String],
    out: W,
    format: OutputFormat,
) -> Result<(W, Summary)> {
    let mut reporter = Reporter::new(out, format);
    for query in queries {
        reporter.report_query(query, &lint_query(query))?;
    }
    Ok(reporter.finish()?)
}
