//! Functions that turn a counter into a per-time-unit rate

use crate::walk::Node;

/// The closed set of rate-converting functions
pub const RATE_FUNCTIONS: [&str; 4] = ["increase", "irate", "rate", "resets"];

/// Whether `name` is exactly one of [`RATE_FUNCTIONS`]
pub fn is_rate_function_name(name: &str) -> bool {
    RATE_FUNCTIONS.contains(&name)
}

/// Whether `node` is a call to a rate-converting function
pub fn is_rate_function(node: &Node<'_>) -> bool {
    match node {
        Node::Call { name, .. } => is_rate_function_name(name),
        Node::InstantSelector { .. } | Node::RangeSelector { .. } | Node::Other(_) => false,
    }
}
