use std::io::{self, Write};

use crate::state::State;
use crate::transition::Transition;

// --- Output Writing---

/// Writes the finished tree, or for an incomplete state
/// `(NOPARSE <stack trees> <unshifted words>)` so the diagnostics stay on
/// one line like a tree would.
pub fn write_state<W: Write>(writer: &mut W, state: &State) -> io::Result<()> {
    if let Some(tree) = state.result() {
        writeln!(writer, "{}", tree)?;
        return Ok(());
    }

    let mut parts: Vec<String> = state.stack().to_vec().iter().map(|t| t.to_string()).collect();
    parts.extend(
        state.sentence()[state.token_position().min(state.sentence_len())..]
            .iter()
            .map(|token| token.word.clone()),
    );
    if parts.is_empty() {
        writeln!(writer, "(NOPARSE)")?;
    } else {
        writeln!(writer, "(NOPARSE {})", parts.join(" "))?;
    }
    Ok(())
}

// one transition per line, in the notation scripts are written in
pub fn write_transitions<W: Write>(writer: &mut W, transitions: &[&Transition]) -> io::Result<()> {
    for transition in transitions {
        writeln!(writer, "{}", transition)?;
    }
    writer.flush()
}
