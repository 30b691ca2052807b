//! Shared utility functions for output formatting

use std::io::{self, Write};
use termcolor::{Color, ColorChoice, ColorSpec, WriteColor};

/// Folder names printed per line when no limit is set.
pub const FOLDERS_PER_LINE: usize = 10;

/// Map the use_color flag onto a termcolor choice.
pub fn color_choice(use_color: bool) -> ColorChoice {
    if use_color {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    }
}

/// Indentation for a directory block at `level`.
pub fn level_indent(level: usize) -> String {
    "│   ".repeat(level)
}

/// Write `text` in the given color, then reset.
pub fn write_colored<W: WriteColor + ?Sized>(
    out: &mut W,
    text: &str,
    color: Option<Color>,
    bold: bool,
) -> io::Result<()> {
    out.set_color(ColorSpec::new().set_fg(color).set_bold(bold))?;
    write!(out, "{}", text)?;
    out.reset()
}

/// Share of `count` in `total` as a percentage. Zero when `total` is zero.
pub fn percent(count: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        count as f64 / total as f64 * 100.0
    }
}

/// Format a number with thousand separators.
pub fn format_number(n: usize) -> String {
    let s = n.to_string();
    let mut result = String::with_capacity(s.len() + s.len() / 3);
    for (i, c) in s.chars().enumerate() {
        if i > 0 && (s.len() - i) % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    result
}

/// Lay out folder names for display.
///
/// With a limit, one line holding the first `limit` names plus a count of
/// the total when some were cut. Without one, every name in lines of
/// [`FOLDERS_PER_LINE`].
pub fn folder_lines(names: &[String], limit: Option<usize>) -> Vec<String> {
    match limit {
        Some(limit) => {
            let mut line = names
                .iter()
                .take(limit)
                .map(String::as_str)
                .collect::<Vec<_>>()
                .join(", ");
            if names.len() > limit {
                line.push_str(&format!(", ... {} folders", names.len()));
            }
            vec![line]
        }
        None => names
            .chunks(FOLDERS_PER_LINE)
            .map(|chunk| chunk.join(", "))
            .collect(),
    }
}
