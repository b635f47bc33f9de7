//! Plain-text report over a list of notes.

use std::fmt::Write;

use crate::api::Note;

const RULE_WIDTH: usize = 50;
const CONTENT_PREVIEW_CHARS: usize = 100;

const DEFAULT_TITLE: &str = "Untitled";
const DEFAULT_CONTENT: &str = "No content";

fn starts_with_vowel(text: &str) -> bool {
    text.chars()
        .next()
        .map(|c| c.to_lowercase().all(|l| "aeiou".contains(l)))
        .unwrap_or(false)
}

/// Cut to the first `CONTENT_PREVIEW_CHARS` characters, marking the cut.
fn preview(content: &str) -> String {
    match content.char_indices().nth(CONTENT_PREVIEW_CHARS) {
        Some((cut, _)) => format!("{}...", &content[..cut]),
        None => content.to_string(),
    }
}

fn section(out: &mut String, heading: &str) {
    let rule = "=".repeat(RULE_WIDTH);
    let _ = writeln!(out, "{rule}\n {heading}\n{rule}");
}

/// Render the report: totals, titles starting with a vowel, then every
/// note in order with its content preview.
pub fn generate_report(notes: &[Note]) -> String {
    let mut out = String::new();

    section(&mut out, "NOTES REPORT");
    let _ = writeln!(out, "Total notes: {}", notes.len());

    if notes.is_empty() {
        let _ = writeln!(out, "No notes found.");
        return out;
    }

    let vowel_titles: Vec<&str> = notes
        .iter()
        .filter_map(|n| n.title.as_deref())
        .filter(|t| starts_with_vowel(t))
        .collect();

    if vowel_titles.is_empty() {
        let _ = writeln!(out, "No titles starting with vowel found.");
    } else {
        let _ = writeln!(out, "Titles starting with vowel:");
        for title in vowel_titles {
            let _ = writeln!(out, " - {title}");
        }
    }

    out.push('\n');
    section(&mut out, "ALL NOTES DETAILS");

    for (i, note) in notes.iter().enumerate() {
        let id = note
            .id
            .map(|id| id.to_string())
            .unwrap_or_else(|| "N/A".to_string());
        let title = note.title.as_deref().unwrap_or(DEFAULT_TITLE);
        let content = note.content.as_deref().map(preview);
        let content = content.as_deref().unwrap_or(DEFAULT_CONTENT);

        let _ = writeln!(out, "{}. ID: {}", i + 1, id);
        let _ = writeln!(out, "   Title: {title}");
        let _ = writeln!(out, "   Content: {content}");
        out.push('\n');
    }

    out
}
