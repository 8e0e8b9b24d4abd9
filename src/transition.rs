//! The five shift-reduce moves.
//!
//! Each transition has a legality predicate, a pure function of the state
//! (and the deployment's [`LegalityPolicy`]), and an `apply` that builds the
//! successor state. `apply` only checks what it needs to build a well-formed
//! tree; callers are expected to have consulted `is_legal` first.

use std::fmt;
use std::sync::Arc;

use tracing::{trace, warn};

use crate::error::{Error, Result};
use crate::policy::LegalityPolicy;
use crate::stack::TreeStack;
use crate::state::State;
use crate::structs::Side;
use crate::tree::{basic_category, is_temporary_label, Tree};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Transition {
    /// Push the next token as a preterminal.
    Shift,
    /// Wrap the top tree in a single-child node.
    Unary { label: String, root: bool },
    /// Several unary wraps in one move; `labels` are innermost first.
    CompoundUnary { labels: Vec<String>, root: bool },
    /// Combine the top two trees, headed on `side`.
    Binary { label: String, side: Side, root: bool },
    /// As `Binary`, but the unary chain on `side` is spliced out first.
    BinaryRemoveUnary { label: String, side: Side, root: bool },
}

impl Transition {
    pub fn shift() -> Transition {
        Transition::Shift
    }

    pub fn unary(label: impl Into<String>, root: bool) -> Transition {
        Transition::Unary { label: label.into(), root }
    }

    pub fn compound_unary<S: Into<String>>(
        labels: impl IntoIterator<Item = S>,
        root: bool,
    ) -> Result<Transition> {
        let labels: Vec<String> = labels.into_iter().map(Into::into).collect();
        if labels.is_empty() {
            return Err(Error::InvalidTransition(
                "compound unary needs at least one label".to_string(),
            ));
        }
        Ok(Transition::CompoundUnary { labels, root })
    }

    pub fn binary(label: impl Into<String>, side: Side, root: bool) -> Transition {
        Transition::Binary { label: label.into(), side, root }
    }

    pub fn binary_remove_unary(label: impl Into<String>, side: Side, root: bool) -> Transition {
        Transition::BinaryRemoveUnary { label: label.into(), side, root }
    }

    pub fn is_root(&self) -> bool {
        match self {
            Transition::Shift => false,
            Transition::Unary { root, .. }
            | Transition::CompoundUnary { root, .. }
            | Transition::Binary { root, .. }
            | Transition::BinaryRemoveUnary { root, .. } => *root,
        }
    }

    /// Legality under the default policy.
    pub fn is_legal(&self, state: &State) -> bool {
        self.is_legal_under(state, &LegalityPolicy::default())
    }

    pub fn is_legal_under(&self, state: &State, policy: &LegalityPolicy) -> bool {
        match self {
            Transition::Shift => !state.end_of_queue(),
            Transition::Unary { label, root } => {
                unary_chain_legal(state, std::slice::from_ref(label), *root, policy)
            }
            Transition::CompoundUnary { labels, root } => {
                !labels.is_empty() && unary_chain_legal(state, labels, *root, policy)
            }
            Transition::Binary { label, side, root } => {
                let stack = state.stack();
                match (stack.peek_at(1), stack.peek_at(0)) {
                    (Some(left), Some(right)) => {
                        binary_legal(state, left, right, label, *side, *root)
                    }
                    _ => false,
                }
            }
            Transition::BinaryRemoveUnary { label, side, root } => {
                let stack = state.stack();
                let (left, right) = match (stack.peek_at(1), stack.peek_at(0)) {
                    (Some(left), Some(right)) => (left, right),
                    _ => return false,
                };
                let designated = match side {
                    Side::Left => left,
                    Side::Right => right,
                };
                if !designated.is_unary() {
                    return false;
                }
                let stripped = Tree::strip_unaries(designated);
                let (left, right) = match side {
                    Side::Left => (&stripped, right),
                    Side::Right => (left, &stripped),
                };
                binary_legal(state, left, right, label, *side, *root)
            }
        }
    }

    /// Builds the successor state. Fails fast with `IllegalTransition` when
    /// the state lacks what this move needs; the old state is untouched.
    pub fn apply(&self, state: &State) -> Result<State> {
        let next = match self {
            Transition::Shift => {
                let position = state.token_position();
                let token = state
                    .next_token()
                    .ok_or_else(|| self.illegal(state, "no tokens left to shift"))?;
                let leaf = Tree::preterminal(token.clone(), position);
                state.advance(position + 1, state.stack().push(Arc::new(leaf)))
            }
            Transition::Unary { label, .. } => {
                let (top, rest) = state
                    .stack()
                    .pop()
                    .ok_or_else(|| self.illegal(state, "stack is empty"))?;
                let node = Tree::unary(label.as_str(), top);
                state.advance(state.token_position(), rest.push(Arc::new(node)))
            }
            Transition::CompoundUnary { labels, .. } => {
                if labels.is_empty() {
                    return Err(self.illegal(state, "no labels to apply"));
                }
                let (mut node, rest) = state
                    .stack()
                    .pop()
                    .ok_or_else(|| self.illegal(state, "stack is empty"))?;
                for label in labels {
                    node = Arc::new(Tree::unary(label.as_str(), node));
                }
                state.advance(state.token_position(), rest.push(node))
            }
            Transition::Binary { label, side, .. } => {
                let (left, right, rest) = self.pop_two(state)?;
                let node = Tree::binary(label.as_str(), left, right, *side);
                state.advance(state.token_position(), rest.push(Arc::new(node)))
            }
            Transition::BinaryRemoveUnary { label, side, .. } => {
                let (left, right, rest) = self.pop_two(state)?;
                let (left, right) = match side {
                    Side::Left if left.is_unary() => (Tree::strip_unaries(&left), right),
                    Side::Right if right.is_unary() => (left, Tree::strip_unaries(&right)),
                    _ => {
                        return Err(self.illegal(state, "designated side has no unary node to remove"))
                    }
                };
                let node = Tree::binary(label.as_str(), left, right, *side);
                state.advance(state.token_position(), rest.push(Arc::new(node)))
            }
        };
        trace!(
            transition = %self,
            position = next.token_position(),
            stack = next.stack().len(),
            "applied"
        );
        Ok(next)
    }

    // Pops B then A, returning them as (A, B) in sentence order.
    fn pop_two(&self, state: &State) -> Result<(Arc<Tree>, Arc<Tree>, TreeStack)> {
        let popped = state
            .stack()
            .pop()
            .and_then(|(right, rest)| rest.pop().map(|(left, rest)| (left, right, rest)));
        popped.ok_or_else(|| self.illegal(state, "needs two trees on the stack"))
    }

    fn illegal(&self, state: &State, reason: &str) -> Error {
        warn!(
            transition = %self,
            position = state.token_position(),
            stack = state.stack().len(),
            reason,
            "illegal transition applied"
        );
        Error::IllegalTransition {
            transition: self.to_string(),
            reason: reason.to_string(),
        }
    }
}

/// Checks a run of unary wraps against the current top, one label at a
/// time. The chain rule only looks at the pre-existing top: a compound
/// unary is a single move however many labels it carries.
fn unary_chain_legal(state: &State, labels: &[String], root: bool, policy: &LegalityPolicy) -> bool {
    let stack = state.stack();
    let top = match stack.peek() {
        Some(top) => top,
        None => return false,
    };
    if top.is_unary() && !policy.allow_unary_chains {
        return false;
    }
    if top.is_temporary() {
        return false;
    }
    let mut current = top.label();
    for label in labels {
        if is_temporary_label(label) {
            return false;
        }
        if !policy.allow_same_label_unary && label == current {
            return false;
        }
        current = label.as_str();
    }
    if root && (stack.len() != 1 || !state.end_of_queue()) {
        return false;
    }
    true
}

/// Shared by both binary moves, given the operands as they will be combined.
fn binary_legal(state: &State, left: &Tree, right: &Tree, label: &str, side: Side, root: bool) -> bool {
    if left.is_temporary() && right.is_temporary() {
        return false;
    }
    // A binarized fragment must be completed by the node it belongs to.
    if right.is_temporary()
        && (side != Side::Right || basic_category(right.label()) != basic_category(label))
    {
        return false;
    }
    if left.is_temporary()
        && (side != Side::Left || basic_category(left.label()) != basic_category(label))
    {
        return false;
    }
    let closes_parse = state.stack().len() == 2 && state.end_of_queue();
    if is_temporary_label(label) && closes_parse {
        return false;
    }
    if root && !closes_parse {
        return false;
    }
    true
}

// Shift, Unary(NP), CompoundUnary(VP,NP), LeftBinary(NP), RightBinaryRemoveUnary(NP);
// a leading '*' marks a root transition.
impl fmt::Display for Transition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_root() {
            write!(f, "*")?;
        }
        match self {
            Transition::Shift => write!(f, "Shift"),
            Transition::Unary { label, .. } => write!(f, "Unary({})", label),
            Transition::CompoundUnary { labels, .. } => {
                write!(f, "CompoundUnary({})", labels.join(","))
            }
            Transition::Binary { label, side, .. } => write!(f, "{}Binary({})", side, label),
            Transition::BinaryRemoveUnary { label, side, .. } => {
                write!(f, "{}BinaryRemoveUnary({})", side, label)
            }
        }
    }
}
