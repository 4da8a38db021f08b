//! Entry points for converting Chatwork markup.
//!
//! [`parse_text`] runs the whole pipeline: newline normalisation, the
//! classify/extract/attach loop and the final merge. [`parse_tree`] stops
//! before the merge so callers can inspect the tree.

use std::{borrow::Cow, sync::LazyLock};

use log::{debug, trace};
use regex::Regex;

use crate::{
    error::ParseError,
    factory::attach,
    node::Tree,
    state::Classifier,
    token::next_token_at,
};

/// Marker of the `[dtext:...]` family, which is never rendered.
pub const BLOCKED_TAG: &str = "[dtext";

static NEWLINES_RE: LazyLock<Regex> = lazy_regex!(r"\n+", "newline run regex should compile");

/// Collapse every run of newlines into a blank line.
///
/// # Examples
///
/// ```
/// use cwmark::parse::normalize_newlines;
///
/// assert_eq!(normalize_newlines("a\nb\n\n\nc"), "a\n\nb\n\nc");
/// ```
#[must_use]
pub fn normalize_newlines(text: &str) -> Cow<'_, str> { NEWLINES_RE.replace_all(text, "\n\n") }

/// Whether `text` contains a tag family that suppresses the whole message.
#[must_use]
pub fn is_blocked(text: &str) -> bool { text.contains(BLOCKED_TAG) }

/// Parse `raw` into a markup tree.
///
/// Returns `Ok(None)` when the input is blocked.
///
/// # Errors
/// Returns [`ParseError::UnmatchedPattern`] if the classifier and the token
/// extractor disagree, which indicates a bug in the pattern set.
pub fn parse_tree(raw: &str) -> Result<Option<Tree>, ParseError> {
    if is_blocked(raw) {
        debug!("input contains {BLOCKED_TAG}; skipping");
        return Ok(None);
    }

    let text = normalize_newlines(raw);
    let mut tree = Tree::new();
    let mut cursor = tree.root();
    let mut classifier = Classifier::new(&text);
    let mut pos = 0;
    loop {
        let state = classifier.classify_at(pos);
        let Some(token) = next_token_at(&mut classifier, pos, state)? else {
            break;
        };
        trace!("{:?} {:?}", token.kind, token.text);
        cursor = attach(&mut tree, cursor, &token);
        pos = text.len() - token.rest.len();
    }
    debug!("parsed {} bytes into {} nodes", raw.len(), tree.len());
    Ok(Some(tree))
}

/// Convert Chatwork markup to Markdown.
///
/// Unknown tags, unbalanced closing tags and stray brackets are tolerated.
/// Input containing `[dtext` yields an empty string.
///
/// # Errors
/// Returns [`ParseError::UnmatchedPattern`] if the classifier and the token
/// extractor disagree, which indicates a bug in the pattern set.
///
/// # Examples
///
/// ```
/// use cwmark::parse_text;
///
/// assert_eq!(parse_text("[title]Hello[/title]").unwrap(), "**Hello**");
/// assert_eq!(parse_text("[To:42]Alice").unwrap(), "Dear: Alice");
/// ```
pub fn parse_text(raw: &str) -> Result<String, ParseError> {
    Ok(parse_tree(raw)?.map(|tree| tree.merge()).unwrap_or_default())
}
