//! Classification of the next token in Chatwork markup.
//!
//! Four patterns describe what can appear next in the unparsed text: an
//! opening tag, a self-closed tag, a closing tag or a literal run. The
//! classifier looks at where each pattern first matches and picks the state
//! whose match comes first, using the precedence rules in [`classify`].

use std::sync::LazyLock;

use regex::Regex;

/// Surrounding tags that open a nesting level.
pub const OPEN_PATTERN: &str = r"\[(?:info|title|code|qt|task|download)(?:[: ][^\[\]]*)?\]";
/// Any bracket tag that does not start with `/`.
///
/// Opening tags match this pattern too, at the same position.
pub const SELF_CLOSED_PATTERN: &str = r"\[[^\[\]/][^\[\]]*\]";
pub const CLOSE_PATTERN: &str = r"\[/[^\[\]]+\]";
/// A run of text without an opening bracket.
pub const LEFT_PATTERN: &str = r"[^\[]+";

static OPEN_RE: LazyLock<Regex> = lazy_regex!(OPEN_PATTERN, "open tag regex should compile");
static SELF_CLOSED_RE: LazyLock<Regex> =
    lazy_regex!(SELF_CLOSED_PATTERN, "self-closed tag regex should compile");
static CLOSE_RE: LazyLock<Regex> = lazy_regex!(CLOSE_PATTERN, "close tag regex should compile");
static LEFT_RE: LazyLock<Regex> = lazy_regex!(LEFT_PATTERN, "literal run regex should compile");

/// What the parser expects to consume next.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum State {
    /// An opening tag such as `[info]`.
    Open,
    /// A standalone tag such as `[hr]` or `[To:123]`.
    SelfClosed,
    /// A closing tag such as `[/info]`.
    Close,
    /// Literal text up to the next bracket.
    Left,
    /// Nothing left to parse.
    End,
}

impl State {
    /// Regex that extracts a token of this kind, or `None` for [`State::End`].
    #[must_use]
    pub fn regex(self) -> Option<&'static Regex> {
        match self {
            Self::Open => Some(&*OPEN_RE),
            Self::SelfClosed => Some(&*SELF_CLOSED_RE),
            Self::Close => Some(&*CLOSE_RE),
            Self::Left => Some(&*LEFT_RE),
            Self::End => None,
        }
    }

    /// Source text of [`State::regex`], used in error reports.
    #[must_use]
    pub fn pattern(self) -> &'static str {
        match self {
            Self::Open => OPEN_PATTERN,
            Self::SelfClosed => SELF_CLOSED_PATTERN,
            Self::Close => CLOSE_PATTERN,
            Self::Left => LEFT_PATTERN,
            Self::End => "",
        }
    }
}

/// Byte offset of the first match, with `usize::MAX` standing in for "none".
fn match_index(re: &Regex, text: &str) -> usize {
    re.find(text).map_or(usize::MAX, |m| m.start())
}

/// Pick the state from the four match offsets.
///
/// The comparisons are order sensitive. An opening tag always matches the
/// self-closed pattern at the same offset, so `Open` is tested first and only
/// requires `open <= self_closed`; the remaining checks are strict.
fn decide(open: usize, self_closed: usize, close: usize, left: usize) -> State {
    if open <= self_closed && self_closed < close && self_closed < left {
        State::Open
    } else if self_closed < close && self_closed < left {
        State::SelfClosed
    } else if close < self_closed && close < left {
        State::Close
    } else if left < self_closed && left < close {
        State::Left
    } else {
        State::End
    }
}

/// Decide which kind of token starts earliest in `rest`.
///
/// # Examples
///
/// ```
/// use cwmark::state::{State, classify};
///
/// assert_eq!(classify("[info]x[/info]"), State::Open);
/// assert_eq!(classify("[hr]"), State::SelfClosed);
/// assert_eq!(classify("[/qt]"), State::Close);
/// assert_eq!(classify("hello [hr]"), State::Left);
/// assert_eq!(classify(""), State::End);
/// ```
#[must_use]
pub fn classify(rest: &str) -> State {
    decide(
        match_index(&OPEN_RE, rest),
        match_index(&SELF_CLOSED_RE, rest),
        match_index(&CLOSE_RE, rest),
        match_index(&LEFT_RE, rest),
    )
}

/// Last known match of one pattern, in absolute byte offsets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Cached {
    Unknown,
    Found(usize, usize),
    Exhausted,
}

const TOKEN_STATES: [State; 4] = [State::Open, State::SelfClosed, State::Close, State::Left];

/// Classifier that walks one text from front to back.
///
/// Each pattern's next match is cached and searched again only once the
/// cursor has moved past its start. The patterns have no anchors or
/// look-around, so a match starting at or after the cursor is still the
/// leftmost one and the results equal [`classify`] on the remaining suffix.
/// A pattern that found nothing is never searched again.
#[derive(Debug)]
pub struct Classifier<'t> {
    text: &'t str,
    cache: [Cached; 4],
}

impl<'t> Classifier<'t> {
    #[must_use]
    pub fn new(text: &'t str) -> Self {
        Self {
            text,
            cache: [Cached::Unknown; 4],
        }
    }

    #[must_use]
    pub fn text(&self) -> &'t str { self.text }

    /// Byte range of the first match of `state`'s pattern at or after `pos`.
    ///
    /// Returns `None` for [`State::End`] or when nothing matches.
    pub fn find(&mut self, state: State, pos: usize) -> Option<(usize, usize)> {
        let slot = TOKEN_STATES.iter().position(|s| *s == state)?;
        let stale = match self.cache[slot] {
            Cached::Unknown => true,
            Cached::Found(start, _) => start < pos,
            Cached::Exhausted => false,
        };
        if stale {
            let re = state.regex()?;
            self.cache[slot] = re
                .find_at(self.text, pos)
                .map_or(Cached::Exhausted, |m| Cached::Found(m.start(), m.end()));
        }
        match self.cache[slot] {
            Cached::Found(start, end) => Some((start, end)),
            Cached::Unknown | Cached::Exhausted => None,
        }
    }

    /// Classify the text starting at byte offset `pos`.
    pub fn classify_at(&mut self, pos: usize) -> State {
        let [open, self_closed, close, left] =
            TOKEN_STATES.map(|state| self.find(state, pos).map_or(usize::MAX, |(start, _)| start));
        decide(open, self_closed, close, left)
    }
}
