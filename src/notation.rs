//! Text forms for transitions and tagged sentences.
//!
//! Transitions use the same notation their `Display` impl produces:
//! `Shift`, `Unary(NP)`, `CompoundUnary(VP,NP)`, `LeftBinary(NP)`,
//! `RightBinaryRemoveUnary(NP)`, with a leading `*` for root transitions.
//! Sentences are whitespace separated `word/TAG` items.

use std::fs;
use std::path::Path;
use std::sync::Arc;

use nom::branch::alt;
use nom::bytes::complete::{tag, take_while1};
use nom::character::complete::{char, space0};
use nom::combinator::{all_consuming, map, opt, value};
use nom::multi::separated_list1;
use nom::sequence::{delimited, pair, preceded, tuple};
use nom::IResult;

use crate::error::{Error, Result};
use crate::structs::{Side, TaggedWord};
use crate::transition::Transition;

fn label(input: &str) -> IResult<&str, &str> {
    take_while1(|c: char| !c.is_whitespace() && c != '(' && c != ')' && c != ',')(input)
}

fn single_argument(input: &str) -> IResult<&str, String> {
    map(
        delimited(pair(char('('), space0), label, pair(space0, char(')'))),
        String::from,
    )(input)
}

fn argument_list(input: &str) -> IResult<&str, Vec<String>> {
    map(
        delimited(
            pair(char('('), space0),
            separated_list1(delimited(space0, char(','), space0), label),
            pair(space0, char(')')),
        ),
        |labels: Vec<&str>| labels.into_iter().map(String::from).collect(),
    )(input)
}

fn side(input: &str) -> IResult<&str, Side> {
    alt((value(Side::Left, tag("Left")), value(Side::Right, tag("Right"))))(input)
}

fn reduce(input: &str, root: bool) -> IResult<&str, Transition> {
    alt((
        map(preceded(tag("CompoundUnary"), argument_list), move |labels: Vec<String>| {
            Transition::CompoundUnary { labels, root }
        }),
        map(preceded(tag("Unary"), single_argument), move |label: String| {
            Transition::Unary { label, root }
        }),
        map(
            tuple((side, tag("BinaryRemoveUnary"), single_argument)),
            move |(side, _, label): (Side, &str, String)| Transition::BinaryRemoveUnary { label, side, root },
        ),
        map(tuple((side, tag("Binary"), single_argument)), move |(side, _, label): (Side, &str, String)| {
            Transition::Binary { label, side, root }
        }),
    ))(input)
}

fn transition(input: &str) -> IResult<&str, Transition> {
    let (input, root) = map(opt(char('*')), |star: Option<char>| star.is_some())(input)?;
    if root {
        reduce(input, true)
    } else {
        alt((value(Transition::Shift, tag("Shift")), non_root_reduce))(input)
    }
}

fn non_root_reduce(input: &str) -> IResult<&str, Transition> {
    reduce(input, false)
}

pub fn parse_transition(text: &str) -> Result<Transition> {
    all_consuming(delimited(space0, transition, space0))(text)
        .map(|(_, transition)| transition)
        .map_err(|e| Error::Notation(format!("'{}': {}", text.trim(), e)))
}

/// One transition per line; blank lines and `#` comments are skipped.
pub fn parse_script(text: &str) -> Result<Vec<Transition>> {
    let mut transitions = Vec::new();
    for (line_num, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let transition = parse_transition(line)
            .map_err(|e| match e {
                Error::Notation(msg) => Error::Notation(format!("line {}: {}", line_num + 1, msg)),
                other => other,
            })?;
        transitions.push(transition);
    }
    Ok(transitions)
}

pub fn load_script(path: &Path) -> Result<Vec<Transition>> {
    let text = fs::read_to_string(path)?;
    parse_script(&text)
}

/// Splits each item at its last `/`, so words may contain slashes.
pub fn parse_tagged_sentence(text: &str) -> Result<Arc<[TaggedWord]>> {
    let mut sentence = Vec::new();
    for (i, item) in text.split_whitespace().enumerate() {
        match item.rsplit_once('/') {
            Some((word, pos)) if !word.is_empty() && !pos.is_empty() => {
                sentence.push(TaggedWord::new(word, pos));
            }
            _ => {
                return Err(Error::MalformedSentence(format!(
                    "item {} ('{}') is not of the form word/TAG",
                    i + 1,
                    item
                )))
            }
        }
    }
    Ok(sentence.into())
}
