//! Whole-tree summary formatting

use std::io::{self, Write};
use std::time::Duration;
use termcolor::{Color, ColorSpec, WriteColor};

use crate::stats::TraversalReport;

use super::config::OutputConfig;
use super::utils::{format_number, percent, write_colored};

/// Write the totals block: directories scanned, total files, and the most
/// common file types with their share, the rest folded into "other".
pub fn write_summary<W: WriteColor>(
    out: &mut W,
    report: &TraversalReport,
    config: &OutputConfig,
    elapsed: Option<Duration>,
) -> io::Result<()> {
    let total = report.total_files();

    writeln!(out, "{}", "=".repeat(60))?;
    out.set_color(ColorSpec::new().set_bold(true))?;
    write!(out, "Scanned {} directories", format_number(report.node_count))?;
    out.reset()?;
    if let Some(elapsed) = elapsed {
        // Sub-millisecond precision is noise for a human reader
        let rounded = Duration::from_millis(elapsed.as_millis() as u64);
        write!(out, " in {}", humantime::format_duration(rounded))?;
    }
    if report.unreadable_count > 0 {
        write!(out, " (")?;
        write_colored(
            out,
            &format!("{} unreadable", report.unreadable_count),
            Some(Color::Red),
            false,
        )?;
        write!(out, ")")?;
    }
    writeln!(out)?;
    writeln!(out, "├── total files: {}", format_number(total))?;

    if total == 0 {
        writeln!(out, "└── file types: none")?;
        return Ok(());
    }

    writeln!(out, "└── file types:")?;
    let top = report.top_file_types(config.top_types);
    let shown: usize = top.iter().map(|(_, count)| count).sum();
    let other = total - shown;

    for (i, (key, count)) in top.iter().enumerate() {
        let is_last = i + 1 == top.len() && other == 0;
        let branch = if is_last { "└──" } else { "├──" };
        write!(out, "    {} ", branch)?;
        write_colored(out, key, Some(Color::Cyan), false)?;
        writeln!(
            out,
            ": {} ({:.1}%)",
            format_number(*count),
            percent(*count, total)
        )?;
    }
    if other > 0 {
        writeln!(
            out,
            "    └── other: {} ({:.1}%)",
            format_number(other),
            percent(other, total)
        )?;
    }
    Ok(())
}
