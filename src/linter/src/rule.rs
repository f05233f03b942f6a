//! Counter rate rule
//!
//! Counters only carry meaning once converted into a per-time-unit rate.
//! The rule checks both directions of that contract at every node:
//!
//! - a rate-converting call must be applied to a counter selector;
//! - a counter selector must be consumed directly by a rate-converting call.
//!
//! A counter selector that is the whole query has no parent and is not
//! flagged. Violations never stop the walk; every one of them is reported.

use log::{debug, warn};
use promql_parser::parser::Expr;

use crate::classify::{is_counter_name, is_counter_selector};
use crate::diagnostic::{Diagnostic, DiagnosticSink};
use crate::policy::is_rate_function;
use crate::promql::{self, PromQLError};
use crate::walk::{Node, inspect};

/// Apply the rule to one node given its direct parent
pub fn check_node<S>(node: Node<'_>, parent: Option<Node<'_>>, sink: &mut S)
where
    S: DiagnosticSink + ?Sized,
{
    match node {
        Node::Call { name, args, expr } => {
            if !is_rate_function(&node) {
                return;
            }
            match args.first() {
                Some(arg) => {
                    if !is_counter_selector(&Node::from(arg.as_ref())) {
                        debug!("{name}() applied to non-counter argument {arg}");
                        sink.report(Diagnostic::rate_on_non_counter(name, expr));
                    }
                }
                None => {
                    warn!("{name}() has no arguments, skipping argument check");
                    sink.report(Diagnostic::malformed_call(name, expr));
                }
            }
        }
        Node::InstantSelector { name, expr } | Node::RangeSelector { name, expr } => {
            if !name.is_some_and(is_counter_name) {
                return;
            }
            let Some(parent) = parent else {
                return;
            };
            if !is_rate_function(&parent) {
                debug!("counter selector {expr} consumed by {}", parent.expr());
                sink.report(Diagnostic::unwrapped_counter(expr, parent.expr()));
            }
        }
        Node::Other(_) => {}
    }
}

/// Walk `expr` and report every violation to `sink`
///
/// The check itself never fails; its findings are whatever lands in `sink`.
pub fn check_expr<S>(expr: &Expr, sink: &mut S)
where
    S: DiagnosticSink + ?Sized,
{
    inspect(expr, &mut |node, parent| check_node(node, parent, &mut *sink));
}

/// Collect the diagnostics for an already parsed expression
pub fn lint(expr: &Expr) -> Vec<Diagnostic> {
    let mut diagnostics = Vec::new();
    check_expr(expr, &mut diagnostics);
    diagnostics
}

/// Parse `query` and collect its diagnostics
pub fn lint_query(query: &str) -> Result<Vec<Diagnostic>, PromQLError> {
    let expr = promql::parse(query)?;
    let diagnostics = lint(&expr);
    debug!(
        "linted query {:?}: {} violation(s)",
        query.trim(),
        diagnostics.len()
    );
    Ok(diagnostics)
}
