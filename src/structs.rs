use clap::Parser;
use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

use crate::error::{Error, Result};

// --- Data Structures ---

/// A (word, part-of-speech tag) pair supplied by an external tagger.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TaggedWord {
    pub word: String,
    pub tag: String,
}

impl TaggedWord {
    pub fn new(word: impl Into<String>, tag: impl Into<String>) -> Self {
        TaggedWord { word: word.into(), tag: tag.into() }
    }
}

impl fmt::Display for TaggedWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.word, self.tag)
    }
}

/// Builds a shared tagged sentence from parallel word and tag lists.
pub fn tagged_sentence<W, T>(words: &[W], tags: &[T]) -> Result<Arc<[TaggedWord]>>
where
    W: AsRef<str>,
    T: AsRef<str>,
{
    if words.len() != tags.len() {
        return Err(Error::MalformedSentence(format!(
            "{} words but {} tags",
            words.len(),
            tags.len()
        )));
    }
    let mut sentence = Vec::with_capacity(words.len());
    for (i, (word, tag)) in words.iter().zip(tags).enumerate() {
        let (word, tag) = (word.as_ref(), tag.as_ref());
        if word.is_empty() || tag.is_empty() {
            return Err(Error::MalformedSentence(format!(
                "empty word or tag at position {}",
                i
            )));
        }
        sentence.push(TaggedWord::new(word, tag));
    }
    Ok(sentence.into())
}

/// Which child of a binary node supplies the head.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Right,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Left => write!(f, "Left"),
            Side::Right => write!(f, "Right"),
        }
    }
}

/// Lexical head of a constituent: the token and its sentence position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Head {
    pub token: TaggedWord,
    pub position: usize,
}

// --- Command Line ---

#[derive(Parser, Debug)]
#[command(name = "srparse", about = "Shift-reduce transition mechanics for constituency parsing", version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Apply a transition script to a tagged sentence and print the result
    Replay(ReplayArgs),
    /// Replay a script prefix and list the transitions legal afterwards
    Legal(LegalArgs),
}

#[derive(clap::Args, Debug)]
pub struct PolicyArgs {
    /// Permit a plain unary directly on top of another unary node
    #[arg(long)]
    pub allow_unary_chains: bool,
    /// Permit a unary whose label equals the label it wraps
    #[arg(long)]
    pub allow_same_label_unary: bool,
}

#[derive(Parser, Debug)]
pub struct ReplayArgs {
    /// Tagged sentence, e.g. "This/DT is/VBZ a/DT test/NN"
    #[arg(short, long)]
    pub sentence: String,
    /// File holding one transition per line
    #[arg(short, long)]
    pub transitions: PathBuf,
    /// Apply transitions without checking legality first
    #[arg(long)]
    pub unchecked: bool,
    #[command(flatten)]
    pub policy: PolicyArgs,
}

#[derive(Parser, Debug)]
pub struct LegalArgs {
    /// Tagged sentence, e.g. "This/DT is/VBZ a/DT test/NN"
    #[arg(short, long)]
    pub sentence: String,
    /// File holding the transitions to replay before listing
    #[arg(short, long)]
    pub transitions: Option<PathBuf>,
    /// Comma separated constituent labels for the candidate set
    #[arg(short, long, value_delimiter = ',', default_value = "S,NP,VP,PP")]
    pub labels: Vec<String>,
    /// Label used for root transitions
    #[arg(long, default_value = "ROOT")]
    pub root_label: String,
    #[command(flatten)]
    pub policy: PolicyArgs,
}
