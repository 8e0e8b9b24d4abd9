use std::collections::HashSet;

use tracing::debug;

use crate::policy::LegalityPolicy;
use crate::state::State;
use crate::structs::Side;
use crate::transition::Transition;

/// The candidate transitions a scorer may choose between.
#[derive(Debug, Clone, Default)]
pub struct TransitionRegistry {
    transitions: Vec<Transition>,
}

impl TransitionRegistry {
    /// Duplicates are dropped; the first occurrence keeps its place.
    pub fn new(transitions: impl IntoIterator<Item = Transition>) -> Self {
        let mut seen = HashSet::new();
        let transitions = transitions
            .into_iter()
            .filter(|t| seen.insert(t.clone()))
            .collect();
        TransitionRegistry { transitions }
    }

    /// Shift, then for every label a unary and all four binary moves, then
    /// root unary and root binaries for `root_label`.
    pub fn from_labels<S: AsRef<str>>(labels: &[S], root_label: &str) -> Self {
        let mut transitions = vec![Transition::shift()];
        for label in labels {
            let label = label.as_ref();
            transitions.push(Transition::unary(label, false));
            for side in [Side::Left, Side::Right] {
                transitions.push(Transition::binary(label, side, false));
                transitions.push(Transition::binary_remove_unary(label, side, false));
            }
        }
        transitions.push(Transition::unary(root_label, true));
        for side in [Side::Left, Side::Right] {
            transitions.push(Transition::binary(root_label, side, true));
        }
        Self::new(transitions)
    }

    pub fn transitions(&self) -> &[Transition] {
        &self.transitions
    }

    pub fn len(&self) -> usize {
        self.transitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }

    /// Candidates legal in `state`, in registry order.
    pub fn legal_transitions(&self, state: &State, policy: &LegalityPolicy) -> Vec<&Transition> {
        let legal: Vec<&Transition> = self
            .transitions
            .iter()
            .filter(|t| t.is_legal_under(state, policy))
            .collect();
        debug!(
            position = state.token_position(),
            stack = state.stack().len(),
            legal = legal.len(),
            candidates = self.transitions.len(),
            "legal transitions"
        );
        legal
    }
}
