//! Error type for the markup parser.

use crate::state::State;

/// Failure raised while converting markup.
///
/// Malformed markup never produces an error; it is absorbed by the parser's
/// fallback rules. The only variant signals that the classifier picked a
/// pattern which then failed to match, which means the classifier and the
/// extractor disagree about the pattern set.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("classifier chose {state:?} but pattern `{pattern}` does not match {remainder:?}")]
    UnmatchedPattern {
        state: State,
        pattern: &'static str,
        remainder: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_names_pattern_and_remainder() {
        let err = ParseError::UnmatchedPattern {
            state: State::Close,
            pattern: r"\[/x\]",
            remainder: "abc".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("Close"));
        assert!(msg.contains(r"\[/x\]"));
        assert!(msg.contains("\"abc\""));
    }
}
