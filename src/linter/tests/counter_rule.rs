use linter::promql::parse;
use linter::{Diagnostic, DiagnosticKind, check_expr, lint, lint_query};
use rstest::rstest;

#[rstest]
#[case::rate_wrapped("rate(http_requests_total[5m])")]
#[case::bare_counter_root("http_requests_total")]
#[case::bare_range_root("http_requests_total[5m]")]
#[case::rates_added("rate(http_requests_total[5m]) + rate(errors_total[5m])")]
#[case::aggregated_rate("sum by (job) (rate(http_requests_total[5m]))")]
#[case::ratio_of_increases(
    "increase(errors_total[1h]) / increase(http_requests_total[1h])"
)]
#[case::gauge_arithmetic("node_memory_free_bytes / node_memory_total_bytes")]
#[case::histogram_quantile(
    "histogram_quantile(0.9, sum by (le) (rate(request_duration_seconds_bucket_total[5m])))"
)]
#[case::label_matchers(r#"irate(http_requests_total{job="api", code=~"5.."}[1m])"#)]
#[case::offset(r#"resets(process_restarts_total[1h] offset 1d)"#)]
fn clean_queries(#[case] query: &str) {
    let diagnostics = lint_query(query).unwrap();
    assert!(diagnostics.is_empty(), "{query}: {diagnostics:?}");
}

#[rstest]
#[case::rate_on_gauge("rate(http_requests_active[5m])", &[DiagnosticKind::RateOnNonCounter])]
#[case::sum_of_counter("sum(http_requests_total)", &[DiagnosticKind::UnwrappedCounter])]
#[case::counter_arithmetic(
    "http_requests_total / 60",
    &[DiagnosticKind::UnwrappedCounter]
)]
#[case::counter_in_paren("(http_requests_total)", &[DiagnosticKind::UnwrappedCounter])]
#[case::counter_in_gauge_function(
    "deriv(http_requests_total[5m])",
    &[DiagnosticKind::UnwrappedCounter]
)]
#[case::rate_over_subquery(
    "rate(http_requests_total[5m:1m])",
    &[DiagnosticKind::RateOnNonCounter, DiagnosticKind::UnwrappedCounter]
)]
#[case::two_unwrapped(
    "errors_total / http_requests_total",
    &[DiagnosticKind::UnwrappedCounter, DiagnosticKind::UnwrappedCounter]
)]
#[case::misused_and_unwrapped(
    "increase(queue_depth[1h]) * http_requests_total",
    &[DiagnosticKind::RateOnNonCounter, DiagnosticKind::UnwrappedCounter]
)]
fn violating_queries(#[case] query: &str, #[case] expected: &[DiagnosticKind]) {
    let kinds: Vec<DiagnosticKind> = lint_query(query)
        .unwrap()
        .into_iter()
        .map(|d| d.kind)
        .collect();
    assert_eq!(kinds, expected, "{query}");
}

#[test]
fn rate_on_gauge_names_the_function() {
    let diagnostics = lint_query("rate(http_requests_active[5m])").unwrap();
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].subject, "rate");
    assert!(diagnostics[0].context.contains("http_requests_active"));
    assert!(
        diagnostics[0]
            .to_string()
            .starts_with("function rate must be called on a counter selector in ")
    );
}

#[test]
fn unwrapped_counter_names_the_selector() {
    let diagnostics = lint_query("sum(http_requests_total)").unwrap();
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].subject, "http_requests_total");
    assert!(diagnostics[0].context.starts_with("sum"));
    assert_eq!(
        diagnostics[0].to_string(),
        "counter selector http_requests_total used in expression without first passing through rate(), irate(), increase() or resets()"
    );
}

#[test]
fn diagnostics_follow_pre_order() {
    let diagnostics =
        lint_query("sum(a_total) + rate(b_gauge[5m]) - avg(c_total)").unwrap();
    let subjects: Vec<&str> = diagnostics.iter().map(|d| d.subject.as_str()).collect();
    assert_eq!(subjects, vec!["a_total", "rate", "c_total"]);
}

#[test]
fn repeated_checks_are_identical() {
    let expr = parse("sum(a_total) + rate(b_gauge[5m]) - avg(c_total)").unwrap();
    let first = lint(&expr);
    let second = lint(&expr);
    assert_eq!(first.len(), 3);
    assert_eq!(first, second);
}

#[test]
fn sink_accumulates_across_queries() {
    let mut sink: Vec<Diagnostic> = Vec::new();
    for query in ["sum(a_total)", "rate(b_total[5m])", "rate(c[5m])"] {
        check_expr(&parse(query).unwrap(), &mut sink);
    }
    assert_eq!(sink.len(), 2);
    assert_eq!(sink[0].kind, DiagnosticKind::UnwrappedCounter);
    assert_eq!(sink[1].kind, DiagnosticKind::RateOnNonCounter);
}
