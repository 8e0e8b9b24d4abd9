//! Shift-reduce transition system for constituency parsing.
//!
//! A [`State`] holds the position in a tagged sentence and a persistent
//! stack of partial trees. The five [`Transition`] variants each carry a
//! legality predicate and an `apply` that yields a new state, leaving the
//! old one intact so search code can branch freely.

pub mod driver;
pub mod error;
pub mod notation;
pub mod output;
pub mod policy;
pub mod registry;
pub mod stack;
pub mod state;
pub mod structs;
pub mod transition;
pub mod tree;

pub use driver::{replay, replay_unchecked, GreedyDriver, Scorer};
pub use error::{Error, Result};
pub use policy::LegalityPolicy;
pub use registry::TransitionRegistry;
pub use stack::TreeStack;
pub use state::State;
pub use structs::{tagged_sentence, Head, Side, TaggedWord};
pub use transition::Transition;
pub use tree::Tree;
