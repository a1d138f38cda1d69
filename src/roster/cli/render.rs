//! # Rendering
//!
//! Turns command results into terminal text. Every function returns a
//! `String`; the caller decides where it goes. Numbering comes from the
//! [`DisplayIndex`](roster::index::DisplayIndex) assigned over the projected
//! view, never from the record itself.

use colored::Colorize;
use roster::api::{CmdMessage, MessageLevel};
use roster::index::DisplayRecord;
use roster::view::SearchQuery;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

pub(super) const EMPTY_STORE: &str = "No records yet.";

/// Renders the visible rows. `total` is the store size, used to tell an empty
/// store apart from a search with no hits.
pub(super) fn render_list(
    rows: &[DisplayRecord],
    query: &SearchQuery,
    total: usize,
    name_width: usize,
) -> String {
    let mut output = String::new();

    if !query.is_empty() {
        let header = format!(
            "Search \"{}\": {} of {}",
            query.as_str(),
            rows.len(),
            total
        );
        output.push_str(&format!("{}\n", header.dimmed()));
    }

    if rows.is_empty() {
        let message = if total == 0 {
            EMPTY_STORE.to_string()
        } else {
            format!("No records match '{}'.", query.as_str())
        };
        output.push_str(&format!("{}\n", message.dimmed()));
        return output;
    }

    let idx_width = rows.len().to_string().len();
    for dr in rows {
        let idx = format!("{:>width$}", dr.index.to_string(), width = idx_width);
        let name = truncate_to_width(&dr.record.name, name_width);
        output.push_str(&format!("{} : {}\n", idx.yellow(), name));
    }

    output
}

pub(super) fn render_messages(messages: &[CmdMessage]) -> String {
    let mut output = String::new();
    for message in messages {
        let line = match message.level {
            MessageLevel::Info => message.content.dimmed(),
            MessageLevel::Success => message.content.green(),
            MessageLevel::Warning => message.content.yellow(),
            MessageLevel::Error => message.content.red(),
        };
        output.push_str(&format!("{}\n", line));
    }
    output
}

pub(super) fn render_text_list(lines: &[String], empty_message: &str) -> String {
    if lines.is_empty() {
        return format!("{}\n", empty_message);
    }
    lines.iter().map(|l| format!("{}\n", l)).collect()
}

/// Cuts `s` to at most `max_width` terminal columns, ending in `…` when cut.
pub(super) fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            break;
        }
        result.push(c);
        current_width += char_width;
    }
    result.push('…');
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use roster::index::index_records;
    use roster::model::{Record, RecordId};

    fn rows(names: &[&str]) -> Vec<DisplayRecord> {
        index_records(
            names
                .iter()
                .enumerate()
                .map(|(i, n)| Record::new(RecordId::new(i as u64 + 1), *n))
                .collect(),
        )
    }

    fn plain() {
        colored::control::set_override(false);
    }

    #[test]
    fn numbers_rows_from_one() {
        plain();
        let out = render_list(&rows(&["Harry Potter", "Edward"]), &SearchQuery::default(), 2, 60);
        assert_eq!(out, "1 : Harry Potter\n2 : Edward\n");
    }

    #[test]
    fn pads_indexes_to_same_width() {
        plain();
        let names: Vec<String> = (1..=10).map(|i| format!("N{i}")).collect();
        let refs: Vec<&str> = names.iter().map(String::as_str).collect();
        let out = render_list(&rows(&refs), &SearchQuery::default(), 10, 60);
        assert!(out.starts_with(" 1 : N1\n"));
        assert!(out.ends_with("10 : N10\n"));
    }

    #[test]
    fn empty_store_message() {
        plain();
        let out = render_list(&[], &SearchQuery::default(), 0, 60);
        assert_eq!(out, "No records yet.\n");
    }

    #[test]
    fn search_without_hits_is_distinct_from_empty_store() {
        plain();
        let out = render_list(&[], &SearchQuery::new("Zed"), 3, 60);
        assert!(out.contains("Search \"zed\": 0 of 3"));
        assert!(out.contains("No records match 'zed'."));
    }

    #[test]
    fn search_header_counts_matches() {
        plain();
        let out = render_list(&rows(&["Noname"]), &SearchQuery::new("no"), 4, 60);
        assert_eq!(out, "Search \"no\": 1 of 4\n1 : Noname\n");
    }

    #[test]
    fn truncates_long_names() {
        assert_eq!(truncate_to_width("Hermione Granger", 8), "Hermion…");
        assert_eq!(truncate_to_width("Edward", 8), "Edward");
        // Wide characters count double.
        assert_eq!(truncate_to_width("日本語のテキスト", 6), "日本…");
    }

    #[test]
    fn messages_one_per_line() {
        plain();
        let out = render_messages(&[CmdMessage::success("a"), CmdMessage::error("b")]);
        assert_eq!(out, "a\nb\n");
    }

    #[test]
    fn text_list_falls_back_to_empty_message() {
        assert_eq!(render_text_list(&[], "Nothing."), "Nothing.\n");
        assert_eq!(render_text_list(&["x = 1".to_string()], "Nothing."), "x = 1\n");
    }
}
