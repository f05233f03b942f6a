//! Counter classification by naming convention
//!
//! Counters are recognised purely by the series name suffix. Traversal
//! context never influences the result.

use crate::walk::Node;

/// Suffix reserved for counter series
pub const COUNTER_SUFFIX: &str = "_total";

/// Whether `name` follows the counter naming convention
///
/// Exact, case-sensitive suffix match.
pub fn is_counter_name(name: &str) -> bool {
    name.ends_with(COUNTER_SUFFIX)
}

/// Whether `node` is an instant or range selector reading a counter series
pub fn is_counter_selector(node: &Node<'_>) -> bool {
    match node {
        Node::InstantSelector { name, .. } | Node::RangeSelector { name, .. } => {
            name.is_some_and(is_counter_name)
        }
        Node::Call { .. } | Node::Other(_) => false,
    }
}
