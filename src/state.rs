use std::sync::Arc;

use crate::error::Result;
use crate::stack::TreeStack;
use crate::structs::{tagged_sentence, TaggedWord};
use crate::tree::Tree;

/// Parser configuration: position in the sentence plus the stack of
/// partial trees. States are values; transitions build new ones.
#[derive(Debug, Clone)]
pub struct State {
    token_position: usize,
    stack: TreeStack,
    sentence: Arc<[TaggedWord]>,
}

impl State {
    pub fn initial(sentence: Arc<[TaggedWord]>) -> State {
        State {
            token_position: 0,
            stack: TreeStack::new(),
            sentence,
        }
    }

    pub fn from_words_and_tags<W, T>(words: &[W], tags: &[T]) -> Result<State>
    where
        W: AsRef<str>,
        T: AsRef<str>,
    {
        Ok(State::initial(tagged_sentence(words, tags)?))
    }

    pub(crate) fn advance(&self, token_position: usize, stack: TreeStack) -> State {
        State {
            token_position,
            stack,
            sentence: Arc::clone(&self.sentence),
        }
    }

    pub fn token_position(&self) -> usize {
        self.token_position
    }

    pub fn stack(&self) -> &TreeStack {
        &self.stack
    }

    pub fn sentence(&self) -> &Arc<[TaggedWord]> {
        &self.sentence
    }

    pub fn sentence_len(&self) -> usize {
        self.sentence.len()
    }

    pub fn next_token(&self) -> Option<&TaggedWord> {
        self.sentence.get(self.token_position)
    }

    /// True once every token has been shifted.
    pub fn end_of_queue(&self) -> bool {
        self.token_position >= self.sentence.len()
    }

    pub fn is_terminal(&self) -> bool {
        self.end_of_queue() && self.stack.len() == 1
    }

    /// The completed tree, if this state is terminal.
    pub fn result(&self) -> Option<&Arc<Tree>> {
        if self.is_terminal() {
            self.stack.peek()
        } else {
            None
        }
    }
}
