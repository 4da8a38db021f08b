//! Helper macros used across the crate.

/// Lazily compile a [`Regex`] with a custom panic message.
///
/// The patterns passed to this macro are fixed literals, so a compile failure
/// is a programming error rather than a runtime condition.
///
/// # Examples
///
/// ```
/// use std::sync::LazyLock;
///
/// use regex::Regex;
/// static TAG: LazyLock<Regex> = cwmark::lazy_regex!(r"\[[a-z]+\]", "tag");
/// assert!(TAG.is_match("[info]"));
/// ```
#[macro_export]
macro_rules! lazy_regex {
    ($pattern:expr, $msg:expr $(,)?) => {
        LazyLock::new(|| Regex::new($pattern).expect($msg))
    };
}
