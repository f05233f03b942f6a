//! Pre-order traversal over a PromQL AST
//!
//! [`inspect`] visits every node exactly once, parent before children, and
//! hands the visitor the node together with its direct parent. Nodes are
//! presented through [`Node`], a closed view that only distinguishes the
//! shapes the lint rules care about.

use promql_parser::parser::{
    AggregateExpr, BinaryExpr, Expr, ParenExpr, SubqueryExpr, UnaryExpr,
};

use crate::promql::get_metric_name;

/// Rule-facing view of an AST node
#[derive(Debug, Clone, Copy)]
pub enum Node<'a> {
    /// Function call such as `rate(...)`
    Call {
        name: &'a str,
        args: &'a [Box<Expr>],
        expr: &'a Expr,
    },
    /// Instant vector selector, `metric{...}`
    InstantSelector { name: Option<&'a str>, expr: &'a Expr },
    /// Range vector selector, `metric{...}[5m]`
    RangeSelector { name: Option<&'a str>, expr: &'a Expr },
    /// Anything else: aggregations, operators, literals, subqueries
    Other(&'a Expr),
}

impl<'a> Node<'a> {
    /// The AST expression this view was built from
    pub fn expr(&self) -> &'a Expr {
        match *self {
            Self::Call { expr, .. }
            | Self::InstantSelector { expr, .. }
            | Self::RangeSelector { expr, .. } => expr,
            Self::Other(expr) => expr,
        }
    }

    /// Series name for selector nodes, `None` for everything else
    pub fn series_name(&self) -> Option<&'a str> {
        match self {
            Self::InstantSelector { name, .. } | Self::RangeSelector { name, .. } => *name,
            Self::Call { .. } | Self::Other(_) => None,
        }
    }
}

impl<'a> From<&'a Expr> for Node<'a> {
    fn from(expr: &'a Expr) -> Self {
        match expr {
            Expr::Call(call) => Self::Call {
                name: call.func.name,
                args: &call.args.args,
                expr,
            },
            Expr::VectorSelector(vs) => Self::InstantSelector {
                name: get_metric_name(vs),
                expr,
            },
            Expr::MatrixSelector(ms) => Self::RangeSelector {
                name: get_metric_name(&ms.vs),
                expr,
            },
            Expr::Aggregate(_)
            | Expr::Unary(_)
            | Expr::Binary(_)
            | Expr::Paren(_)
            | Expr::Subquery(_)
            | Expr::NumberLiteral(_)
            | Expr::StringLiteral(_)
            | Expr::Extension(_) => Self::Other(expr),
        }
    }
}

/// Direct children of an expression, in evaluation order
///
/// A range selector is a leaf: its embedded instant selector is part of the
/// same node, not a child of it.
pub fn children(expr: &Expr) -> Vec<&Expr> {
    match expr {
        Expr::Aggregate(AggregateExpr { expr, param, .. }) => match param {
            Some(param) => vec![param.as_ref(), expr.as_ref()],
            None => vec![expr.as_ref()],
        },
        Expr::Binary(BinaryExpr { lhs, rhs, .. }) => vec![lhs.as_ref(), rhs.as_ref()],
        Expr::Call(call) => call.args.args.iter().map(|arg| arg.as_ref()).collect(),
        Expr::Paren(ParenExpr { expr }) => vec![expr.as_ref()],
        Expr::Unary(UnaryExpr { expr }) => vec![expr.as_ref()],
        Expr::Subquery(SubqueryExpr { expr, .. }) => vec![expr.as_ref()],
        Expr::VectorSelector(_)
        | Expr::MatrixSelector(_)
        | Expr::NumberLiteral(_)
        | Expr::StringLiteral(_)
        | Expr::Extension(_) => Vec::new(),
    }
}

/// Walk `root` in pre-order, calling `visitor(node, parent)` once per node
///
/// `parent` is `None` only for the root.
pub fn inspect<'a, F>(root: &'a Expr, visitor: &mut F)
where
    F: FnMut(Node<'a>, Option<Node<'a>>),
{
    visit(root, None, visitor);
}

fn visit<'a, F>(expr: &'a Expr, parent: Option<&'a Expr>, visitor: &mut F)
where
    F: FnMut(Node<'a>, Option<Node<'a>>),
{
    visitor(Node::from(expr), parent.map(Node::from));
    for child in children(expr) {
        visit(child, Some(expr), visitor);
    }
}
