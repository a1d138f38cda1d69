//! Input capture over any `BufRead`/`Write` pair.
//!
//! End of input is the cancellation signal and is reported as `None`, which
//! is distinct from an empty answer (`Some("")`).

use std::io::{self, BufRead, Write};

/// Reads one line without its line ending. `None` at end of input.
pub(super) fn read_line<R: BufRead>(input: &mut R) -> io::Result<Option<String>> {
    let mut buf = String::new();
    if input.read_line(&mut buf)? == 0 {
        return Ok(None);
    }
    let trimmed_len = buf.trim_end_matches(['\n', '\r']).len();
    buf.truncate(trimmed_len);
    Ok(Some(buf))
}

pub(super) fn ask<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    question: &str,
) -> io::Result<Option<String>> {
    write!(out, "{}", question)?;
    out.flush()?;
    read_line(input)
}

/// Yes/no question, defaulting to no (including at end of input).
pub(super) fn confirm<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    question: &str,
) -> io::Result<bool> {
    let answer = ask(input, out, &format!("{} [y/N] ", question))?;
    Ok(matches!(
        answer.as_deref().map(|a| a.trim().to_ascii_lowercase()).as_deref(),
        Some("y") | Some("yes")
    ))
}
