//! ## About
//!
//! An ordered binary-tree toolkit: invariant-preserving binary-search-tree
//! operations, tree construction and transformation routines, recursive and
//! explicit-stack traversals, and a small stack-machine expression
//! evaluator built on the same tree and stack primitives.
//!
//! Everything is a pure function or an in-place mutation of a tree owned
//! exclusively by the caller; the crate is single-threaded, performs no
//! I/O, and installs no tracing subscriber (it only emits through the
//! [`tracing`] facade). Callers construct or mutate a tree through
//! [`Bst`]/[`builder`], then hand it to [`traverse`] for read-only analysis
//! or in-place value transforms; [`expr`] consumes the shared [`Stack`]
//! abstraction but never shares tree instances with the other modules.
//!
//! ## Naming conventions
//! * Structs – substantives naming the entity (trees, nodes, iterators)
//! * Methods – imperative forms, except getters and factories which use
//!   substantives (i.e., omit a `get_` prefix) much like the standard
//!   library
//! * Free functions – verbs for transforms, substantives for pure queries

pub mod bst;
pub mod builder;
pub mod errors;
pub mod expr;
pub mod node;
pub mod stack;
pub mod traverse;

pub use bst::{single_child_chain, single_child_chain_bounds, Bst};
pub use builder::{balanced_from_sorted, count_distinct_bsts, parse_ternary};
pub use errors::TreeError;
pub use expr::{eval_postfix, evaluate, infix_to_postfix, parse_tree, Symbol};
pub use node::{ExprNode, Link, NaryNode, Node};
pub use stack::Stack;
pub use traverse::{
    extent, nary_height, postorder_from_traversals, Extent, InOrder, PreOrder,
};
