//! File helpers for converting Chatwork exports.

use std::{fs, path::Path};

use anyhow::Context;

use crate::parse::parse_text;

/// Drop the single newline that terminates most saved or piped messages.
///
/// Only one `\n` is removed; blank lines the author typed at the end survive
/// and are normalised like any other run.
///
/// # Examples
///
/// ```
/// use cwmark::io::strip_final_newline;
///
/// assert_eq!(strip_final_newline("[hr]\n"), "[hr]");
/// assert_eq!(strip_final_newline("a\n\n"), "a\n");
/// assert_eq!(strip_final_newline("a"), "a");
/// ```
#[must_use]
pub fn strip_final_newline(text: &str) -> &str { text.strip_suffix('\n').unwrap_or(text) }

/// Read a message file without its terminating newline.
///
/// # Errors
/// Returns an error naming `path` if the file cannot be read.
pub fn read_message(path: &Path) -> anyhow::Result<String> {
    let mut text =
        fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
    let len = strip_final_newline(&text).len();
    text.truncate(len);
    Ok(text)
}

/// Read `path` and return its Markdown rendering.
///
/// # Errors
/// Returns an error if the file cannot be read or the parser fails.
pub fn convert_file(path: &Path) -> anyhow::Result<String> {
    let text = read_message(path)?;
    parse_text(&text).with_context(|| format!("failed to convert {}", path.display()))
}

/// Rewrite a file in place with its Markdown rendering.
///
/// # Errors
/// Returns an error if reading, converting or writing the file fails.
pub fn rewrite(path: &Path) -> anyhow::Result<()> {
    let markdown = convert_file(path)?;
    fs::write(path, markdown + "\n").with_context(|| format!("failed to write {}", path.display()))
}

#[cfg(test)]
mod tests {
    use tempfile::tempdir;

    use super::*;

    #[test]
    fn rewrite_roundtrip() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("message.txt");
        fs::write(&file, "[title]Release[/title]\nshipped").unwrap();
        rewrite(&file).unwrap();
        let out = fs::read_to_string(&file).unwrap();
        assert_eq!(out, "**Release**\n\nshipped\n");
    }

    #[test]
    fn trailing_newline_is_not_doubled() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("message.txt");
        fs::write(&file, "[title]T[/title]\n").unwrap();
        assert_eq!(convert_file(&file).unwrap(), "**T**");
        rewrite(&file).unwrap();
        assert_eq!(fs::read_to_string(&file).unwrap(), "**T**\n");
    }

    #[test]
    fn only_one_newline_is_stripped() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("message.txt");
        fs::write(&file, "a\n\n\n").unwrap();
        assert_eq!(read_message(&file).unwrap(), "a\n\n");
        assert_eq!(convert_file(&file).unwrap(), "a\n\n");
    }

    #[test]
    fn convert_missing_file_names_path() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("missing.txt");
        let err = convert_file(&file).unwrap_err();
        assert!(format!("{err:#}").contains("missing.txt"));
    }
}
