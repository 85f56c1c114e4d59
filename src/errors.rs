//! Provides the error type used throughout this crate.

use thiserror::Error;

/// The error type used throughout this crate.
///
/// All fallible operations report the condition they detected and leave
/// recovery to the caller; nothing is retried or silently defaulted.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TreeError {
    // Tree queries
    #[error("operation requires a non-empty tree")]
    EmptyTree,
    #[error("no key satisfies the query")]
    NotFound,
    #[error("inorder and preorder sequences do not describe the same tree")]
    MismatchedTraversals,
    // Expression parsing and evaluation
    #[error("malformed expression: {0}")]
    MalformedExpression(String),
    #[error("unbalanced parentheses")]
    UnbalancedParentheses,
    #[error("unknown operator: {0}")]
    UnknownOperator(char),
    #[error("division by zero")]
    DivisionByZero,
}
