//! Utility helpers shared across integration tests.
#![allow(dead_code)]

use assert_cmd::Command;

/// Convert `input` and fail the test if the parser reports an error.
pub fn convert(input: &str) -> String {
    cwmark::parse_text(input).unwrap_or_else(|err| panic!("failed to convert {input:?}: {err}"))
}

/// Build a command for the `cwmark` binary.
pub fn cwmark_cmd() -> Command {
    Command::cargo_bin("cwmark").expect("Failed to create cargo command for cwmark")
}
