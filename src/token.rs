//! Token extraction.
//!
//! Provides [`Token`] and [`next_token`], which pulls exactly one token off
//! the front of the unparsed text once [`classify`](crate::state::classify)
//! has decided what comes next. [`next_token_at`] does the same against a
//! [`Classifier`] and reuses its cached match.

use crate::{
    error::ParseError,
    state::{Classifier, State},
};

/// Kind of a classified token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    SelfClosed,
    Open,
    Close,
    Literal,
}

/// One token and the text that follows it.
#[derive(Debug, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: TokenKind,
    /// Matched text, including the brackets for tags.
    pub text: &'a str,
    /// Unconsumed input after `text`.
    pub rest: &'a str,
}

/// Extract the first match of `state`'s pattern from `rest`.
///
/// Returns `Ok(None)` for [`State::End`]. Anything preceding the match is
/// discarded, which is how stray `[` characters disappear.
///
/// # Errors
/// Returns [`ParseError::UnmatchedPattern`] if the pattern selected by the
/// classifier does not match `rest`.
///
/// # Examples
///
/// ```
/// use cwmark::{state::State, token::{TokenKind, next_token}};
///
/// let tok = next_token("[hr]tail", State::SelfClosed).unwrap().unwrap();
/// assert_eq!(tok.kind, TokenKind::SelfClosed);
/// assert_eq!(tok.text, "[hr]");
/// assert_eq!(tok.rest, "tail");
/// ```
pub fn next_token(rest: &str, state: State) -> Result<Option<Token<'_>>, ParseError> {
    let (Some(kind), Some(re)) = (token_kind(state), state.regex()) else {
        return Ok(None);
    };
    let m = re.find(rest).ok_or_else(|| ParseError::UnmatchedPattern {
        state,
        pattern: state.pattern(),
        remainder: rest.to_string(),
    })?;
    Ok(Some(Token {
        kind,
        text: m.as_str(),
        rest: &rest[m.end()..],
    }))
}

fn token_kind(state: State) -> Option<TokenKind> {
    match state {
        State::Open => Some(TokenKind::Open),
        State::SelfClosed => Some(TokenKind::SelfClosed),
        State::Close => Some(TokenKind::Close),
        State::Left => Some(TokenKind::Literal),
        State::End => None,
    }
}

/// Extract the token for `state` at byte offset `pos` of the classifier's
/// text, reusing the match the classifier already found.
///
/// # Errors
/// Returns [`ParseError::UnmatchedPattern`] if the selected pattern has no
/// match at or after `pos`.
pub fn next_token_at<'t>(
    classifier: &mut Classifier<'t>,
    pos: usize,
    state: State,
) -> Result<Option<Token<'t>>, ParseError> {
    let Some(kind) = token_kind(state) else {
        return Ok(None);
    };
    let text = classifier.text();
    let (start, end) = classifier
        .find(state, pos)
        .ok_or_else(|| ParseError::UnmatchedPattern {
            state,
            pattern: state.pattern(),
            remainder: text[pos..].to_string(),
        })?;
    Ok(Some(Token {
        kind,
        text: &text[start..end],
        rest: &text[end..],
    }))
}
