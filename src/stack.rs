//! Persistent stack of partial trees.
//!
//! Every push or pop returns a new stack that shares its tail with the old
//! one, so a parser state can be forked in O(1) without copying any of the
//! trees built so far.

use std::fmt;
use std::sync::Arc;

use crate::tree::Tree;

struct Frame {
    tree: Arc<Tree>,
    below: Option<Arc<Frame>>,
}

#[derive(Clone, Default)]
pub struct TreeStack {
    top: Option<Arc<Frame>>,
    size: usize,
}

impl TreeStack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&self, tree: Arc<Tree>) -> TreeStack {
        TreeStack {
            top: Some(Arc::new(Frame { tree, below: self.top.clone() })),
            size: self.size + 1,
        }
    }

    /// Returns the top tree and the stack beneath it.
    pub fn pop(&self) -> Option<(Arc<Tree>, TreeStack)> {
        let frame = self.top.as_ref()?;
        let rest = TreeStack { top: frame.below.clone(), size: self.size - 1 };
        Some((Arc::clone(&frame.tree), rest))
    }

    pub fn peek(&self) -> Option<&Arc<Tree>> {
        self.top.as_ref().map(|frame| &frame.tree)
    }

    /// Tree `depth` positions below the top; `peek_at(0)` is `peek()`.
    pub fn peek_at(&self, depth: usize) -> Option<&Arc<Tree>> {
        self.iter().nth(depth)
    }

    pub fn len(&self) -> usize {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Iterates from the top of the stack down.
    pub fn iter(&self) -> Iter<'_> {
        Iter { next: self.top.as_deref() }
    }

    /// Trees in sentence order, bottom of the stack first.
    pub fn to_vec(&self) -> Vec<Arc<Tree>> {
        let mut trees: Vec<Arc<Tree>> = self.iter().cloned().collect();
        trees.reverse();
        trees
    }
}

pub struct Iter<'a> {
    next: Option<&'a Frame>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a Arc<Tree>;

    fn next(&mut self) -> Option<Self::Item> {
        let frame = self.next?;
        self.next = frame.below.as_deref();
        Some(&frame.tree)
    }
}

impl fmt::Debug for TreeStack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.to_vec().iter().map(|t| t.to_string())).finish()
    }
}

// Unlink frames iteratively so dropping a long unshared chain cannot
// overflow the call stack.
impl Drop for TreeStack {
    fn drop(&mut self) {
        let mut next = self.top.take();
        while let Some(frame) = next {
            match Arc::try_unwrap(frame) {
                Ok(mut frame) => next = frame.below.take(),
                Err(_) => break,
            }
        }
    }
}
