//! A minimal LIFO stack shared by the iterative traversals and the
//! expression evaluator.
//!
//! [`pop`](Stack::pop) and [`peek`](Stack::peek) return `Option` so each
//! caller can map emptiness to its own error condition (an unmatched
//! parenthesis and a missing operand are different failures that happen to
//! surface at the same spot). A stack instance is always scoped to a single
//! call and never shared across invocations.

/// A LIFO stack over a growable buffer.
#[derive(Debug, Default)]
pub struct Stack<T> {
    items: Vec<T>,
}

impl<T> Stack<T> {
    pub fn new() -> Self {
        Stack { items: Vec::new() }
    }

    /// Preallocates for the expected depth, e.g. the height of the tree
    /// about to be traversed.
    pub fn with_capacity(capacity: usize) -> Self {
        Stack {
            items: Vec::with_capacity(capacity),
        }
    }

    pub fn push(&mut self, item: T) {
        self.items.push(item);
    }

    pub fn pop(&mut self) -> Option<T> {
        self.items.pop()
    }

    pub fn peek(&self) -> Option<&T> {
        self.items.last()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }
}
