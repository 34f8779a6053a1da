//! Text argument handling: `-` reads stdin, everything is sanitized before sending.

use std::io::Read;

use anyhow::{bail, Context, Result};

/// Longest document accepted from the command line, in bytes.
pub const MAX_TEXT_LENGTH: usize = 200_000;

/// Resolves a text argument, reading stdin when it is `-`.
pub fn read_text(arg: &str) -> Result<String> {
    let raw = if arg == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("failed to read text from stdin")?;
        buf
    } else {
        arg.to_string()
    };
    sanitize_text(&raw, MAX_TEXT_LENGTH)
}

/// Strip ASCII control characters other than newlines and tabs, trim
/// surrounding whitespace, and enforce a byte-length limit.
pub fn sanitize_text(input: &str, max_len: usize) -> Result<String> {
    if input.len() > max_len {
        bail!("input exceeds maximum length of {} bytes", max_len);
    }
    let sanitized: String = input
        .chars()
        .filter(|c| !c.is_ascii_control() || matches!(*c, '\n' | '\t'))
        .collect::<String>()
        .trim()
        .to_string();
    if sanitized.is_empty() {
        bail!("input is empty after sanitization");
    }
    Ok(sanitized)
}

/// Trims a document ID and rejects empty ones.
pub fn validate_id(input: &str) -> Result<String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        bail!("document ID must not be empty");
    }
    if trimmed.chars().any(|c| c.is_whitespace() || c.is_control()) {
        bail!("document ID '{}' contains whitespace", trimmed);
    }
    Ok(trimmed.to_string())
}
