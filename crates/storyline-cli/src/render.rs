//! Console rendering of a [`Timeline`].

use std::fmt::Write as _;

use storyline_core::constants::CONSOLE_WIDTH;
use storyline_core::{ConsolidatedGroup, Timeline, TimelineEntry};

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Render every window: a `#` banner with the window bounds, then each
/// storyline's word pairs and its distinct documents.
pub fn render_timeline(timeline: &Timeline) -> String {
    let mut out = String::new();
    for entry in timeline {
        render_entry(&mut out, entry);
    }
    out
}

fn render_entry(out: &mut String, entry: &TimelineEntry) {
    let banner = "#".repeat(CONSOLE_WIDTH);
    let header = format!(
        "window from {} to {}",
        entry.window_start.format(TIMESTAMP_FORMAT),
        entry.window_end.format(TIMESTAMP_FORMAT)
    );
    let pad = CONSOLE_WIDTH.saturating_sub(header.len()) / 2;

    let _ = writeln!(out, "{banner}");
    let _ = writeln!(out, "{}{header}", " ".repeat(pad));
    let _ = writeln!(out, "{banner}");

    for group in &entry.groups {
        render_group(out, group);
    }
}

fn render_group(out: &mut String, group: &ConsolidatedGroup) {
    let pairs = group
        .members
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ");
    push_wrapped(out, &pairs);
    out.push('\n');

    for document in group.documents() {
        push_wrapped(out, document.content());
        out.push('\n');
    }
    let _ = writeln!(out, "{}", "-".repeat(CONSOLE_WIDTH));
}

fn push_wrapped(out: &mut String, text: &str) {
    for line in wrap(text, CONSOLE_WIDTH) {
        out.push_str(&line);
        out.push('\n');
    }
}

/// Greedy word wrap on whitespace. A word wider than `width` gets a line
/// of its own rather than being split.
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let needed = if current.is_empty() {
            word.chars().count()
        } else {
            current.chars().count() + 1 + word.chars().count()
        };
        if needed > width && !current.is_empty() {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}
