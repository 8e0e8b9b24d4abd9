use std::fmt;
use std::sync::Arc;

use crate::structs::{Head, Side, TaggedWord};

/// Prefix marking an intermediate node introduced by binarization.
pub const TEMPORARY_PREFIX: char = '@';

/// A labeled constituent. Nodes are immutable once built: transitions wrap
/// existing subtrees in new parents and never hand out mutable access, so a
/// subtree can be shared by any number of parser states.
#[derive(Debug, Clone, PartialEq)]
pub struct Tree {
    label: String,
    children: Vec<Arc<Tree>>,
    head_child: Option<usize>,
    token: Option<TaggedWord>,
    head: Arc<Head>,
}

impl Tree {
    /// A node directly dominating one input token, labeled with its tag.
    pub fn preterminal(token: TaggedWord, position: usize) -> Tree {
        let head = Arc::new(Head { token: token.clone(), position });
        Tree {
            label: token.tag.clone(),
            children: Vec::new(),
            head_child: None,
            token: Some(token),
            head,
        }
    }

    /// A single-child node; the head passes through its only child.
    pub fn unary(label: impl Into<String>, child: Arc<Tree>) -> Tree {
        let head = Arc::clone(&child.head);
        Tree {
            label: label.into(),
            children: vec![child],
            head_child: Some(0),
            token: None,
            head,
        }
    }

    /// A two-child node headed on `side`.
    pub fn binary(label: impl Into<String>, left: Arc<Tree>, right: Arc<Tree>, side: Side) -> Tree {
        let (head_child, head) = match side {
            Side::Left => (0, Arc::clone(&left.head)),
            Side::Right => (1, Arc::clone(&right.head)),
        };
        Tree {
            label: label.into(),
            children: vec![left, right],
            head_child: Some(head_child),
            token: None,
            head,
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn children(&self) -> &[Arc<Tree>] {
        &self.children
    }

    pub fn token(&self) -> Option<&TaggedWord> {
        self.token.as_ref()
    }

    pub fn head_child(&self) -> Option<&Arc<Tree>> {
        self.head_child.and_then(|i| self.children.get(i))
    }

    pub fn head_child_index(&self) -> Option<usize> {
        self.head_child
    }

    /// The lexical head, percolated up from the preterminals at build time.
    pub fn head(&self) -> &Head {
        &self.head
    }

    pub fn is_preterminal(&self) -> bool {
        self.children.is_empty() && self.token.is_some()
    }

    /// True for a single-child wrapper added by a unary move.
    pub fn is_unary(&self) -> bool {
        self.children.len() == 1
    }

    pub fn is_temporary(&self) -> bool {
        is_temporary_label(&self.label)
    }

    /// Follows single-child wrappers down to the first preterminal or
    /// branching node.
    pub fn strip_unaries(tree: &Arc<Tree>) -> Arc<Tree> {
        let mut node = tree;
        while node.is_unary() {
            node = &node.children[0];
        }
        Arc::clone(node)
    }

    /// Tokens under this node, left to right.
    pub fn tokens(&self) -> Vec<&TaggedWord> {
        let mut tokens = Vec::new();
        collect_tokens(self, &mut tokens);
        tokens
    }
}

fn collect_tokens<'a>(node: &'a Tree, tokens: &mut Vec<&'a TaggedWord>) {
    if let Some(token) = &node.token {
        tokens.push(token);
    }
    for child in &node.children {
        collect_tokens(child, tokens);
    }
}

pub fn is_temporary_label(label: &str) -> bool {
    label.starts_with(TEMPORARY_PREFIX)
}

/// Label with any binarization marker removed, e.g. `@NP` -> `NP`.
pub fn basic_category(label: &str) -> &str {
    label.strip_prefix(TEMPORARY_PREFIX).unwrap_or(label)
}

// (NP (DT This) (VBZ is))
impl fmt::Display for Tree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}", self.label)?;
        if let Some(token) = &self.token {
            write!(f, " {}", token.word)?;
        }
        for child in &self.children {
            write!(f, " {}", child)?;
        }
        write!(f, ")")
    }
}
