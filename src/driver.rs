//! Decoding loops around the transition system.
//!
//! Choosing among legal transitions is left to a [`Scorer`]; this module only
//! asks for a choice, applies it, and stops at a terminal state.

use std::sync::Arc;

use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::policy::LegalityPolicy;
use crate::registry::TransitionRegistry;
use crate::state::State;
use crate::structs::TaggedWord;
use crate::transition::Transition;
use crate::tree::Tree;

/// Picks one of the currently legal transitions, by index into `legal`.
/// Returning `None` stops decoding.
pub trait Scorer {
    fn choose(&self, state: &State, legal: &[&Transition]) -> Option<usize>;
}

impl<F> Scorer for F
where
    F: Fn(&State, &[&Transition]) -> Option<usize>,
{
    fn choose(&self, state: &State, legal: &[&Transition]) -> Option<usize> {
        self(state, legal)
    }
}

pub struct GreedyDriver<'a, S> {
    registry: &'a TransitionRegistry,
    scorer: S,
    policy: LegalityPolicy,
    max_transitions: Option<usize>,
}

impl<'a, S: Scorer> GreedyDriver<'a, S> {
    pub fn new(registry: &'a TransitionRegistry, scorer: S) -> Self {
        GreedyDriver {
            registry,
            scorer,
            policy: LegalityPolicy::default(),
            max_transitions: None,
        }
    }

    pub fn with_policy(mut self, policy: LegalityPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Bounds the number of moves, for policies that allow unary cycles.
    pub fn with_max_transitions(mut self, max_transitions: usize) -> Self {
        self.max_transitions = Some(max_transitions);
        self
    }

    pub fn parse(&self, sentence: Arc<[TaggedWord]>) -> Result<Arc<Tree>> {
        let state = self.run(State::initial(sentence))?;
        match state.result() {
            Some(tree) => Ok(Arc::clone(tree)),
            None => Err(stalled(&state)),
        }
    }

    /// Advances `state` until it is terminal.
    pub fn run(&self, mut state: State) -> Result<State> {
        let mut steps = 0;
        while !state.is_terminal() {
            if self.max_transitions.is_some_and(|max| steps >= max) {
                debug!(steps, "transition limit reached");
                return Err(stalled(&state));
            }
            let legal = self.registry.legal_transitions(&state, &self.policy);
            if legal.is_empty() {
                return Err(stalled(&state));
            }
            let transition = match self.scorer.choose(&state, &legal).and_then(|i| legal.get(i)) {
                Some(transition) => *transition,
                None => return Err(stalled(&state)),
            };
            state = transition.apply(&state)?;
            steps += 1;
        }
        info!(steps, tokens = state.sentence_len(), "parse complete");
        Ok(state)
    }
}

/// Applies a fixed sequence, checking legality before every step.
pub fn replay<'t>(
    state: &State,
    transitions: impl IntoIterator<Item = &'t Transition>,
    policy: &LegalityPolicy,
) -> Result<State> {
    let mut state = state.clone();
    for (step, transition) in transitions.into_iter().enumerate() {
        if !transition.is_legal_under(&state, policy) {
            debug!(step, transition = %transition, "rejected by legality check");
            return Err(Error::IllegalTransition {
                transition: transition.to_string(),
                reason: format!("not legal at step {}", step + 1),
            });
        }
        state = transition.apply(&state)?;
    }
    Ok(state)
}

/// Applies a fixed sequence without consulting `is_legal`; only the
/// structural checks inside `apply` remain.
pub fn replay_unchecked<'t>(
    state: &State,
    transitions: impl IntoIterator<Item = &'t Transition>,
) -> Result<State> {
    let mut state = state.clone();
    for transition in transitions {
        state = transition.apply(&state)?;
    }
    Ok(state)
}

fn stalled(state: &State) -> Error {
    Error::Stalled {
        position: state.token_position(),
        stack_size: state.stack().len(),
    }
}
