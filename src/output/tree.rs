//! Detailed per-directory formatter
//!
//! This module provides `TreeFormatter`, which renders every visited
//! directory as an indented block in breadth-first order, followed by the
//! whole-tree summary.

use std::io::{self, Write};
use std::time::Duration;
use termcolor::{Color, NoColor, StandardStream, WriteColor};

use crate::stats::{QuickScan, TraversalNode, TraversalReport};

use super::config::{OutputConfig, Verbosity};
use super::summary::write_summary;
use super::utils::{color_choice, folder_lines, level_indent, write_colored};

/// Formatter for human-readable reports.
pub struct TreeFormatter {
    config: OutputConfig,
}

impl TreeFormatter {
    pub fn new(config: OutputConfig) -> Self {
        Self { config }
    }

    /// Render a report to a plain string.
    pub fn format(&self, report: &TraversalReport) -> String {
        let mut out = NoColor::new(Vec::new());
        // Writing into a Vec cannot fail
        let _ = self.write_report(&mut out, report, None);
        String::from_utf8_lossy(&out.into_inner()).into_owned()
    }

    /// Print a report to stdout according to the configured verbosity.
    pub fn print(&self, report: &TraversalReport, elapsed: Option<Duration>) -> io::Result<()> {
        let mut stdout = StandardStream::stdout(color_choice(self.config.use_color));
        self.write_report(&mut stdout, report, elapsed)
    }

    /// Write a full report: per-directory blocks (detailed only), then the summary.
    pub fn write_report<W: WriteColor>(
        &self,
        out: &mut W,
        report: &TraversalReport,
        elapsed: Option<Duration>,
    ) -> io::Result<()> {
        match self.config.verbosity {
            Verbosity::Quiet => return Ok(()),
            Verbosity::Detailed => {
                write_colored(out, "Walking ", None, false)?;
                write_colored(out, &report.root.display().to_string(), Some(Color::Blue), true)?;
                writeln!(out)?;
                writeln!(out, "{}", "=".repeat(60))?;
                self.write_nodes(out, &report.nodes)?;
            }
            Verbosity::Summary => {}
        }
        write_summary(out, report, &self.config, elapsed)
    }

    /// Write the blocks for a run of nodes, e.g. one level of a report.
    pub fn write_nodes<W: WriteColor>(&self, out: &mut W, nodes: &[TraversalNode]) -> io::Result<()> {
        for node in nodes {
            self.write_node(out, node)?;
        }
        Ok(())
    }

    fn write_node<W: WriteColor>(&self, out: &mut W, node: &TraversalNode) -> io::Result<()> {
        let indent = level_indent(node.level);

        write!(out, "{}├── ", indent)?;
        write_colored(out, &format!("[level {}]", node.level), Some(Color::Magenta), false)?;
        write!(out, " ")?;
        write_colored(out, &node.path.display().to_string(), Some(Color::Blue), true)?;
        writeln!(out)?;

        if let Some(error) = &node.error {
            write!(out, "{}│   ├── ", indent)?;
            write_colored(out, &format!("unreadable: {}", error), Some(Color::Red), false)?;
            writeln!(out)?;
        }

        writeln!(out, "{}│   ├── folders: {}", indent, node.folders.len())?;
        if self.config.show_folders && !node.folders.is_empty() {
            for line in folder_lines(&node.folders, self.config.folder_limit) {
                writeln!(out, "{}│   │   ├── {}", indent, line)?;
            }
        }

        if node.linked_folders > 0 {
            writeln!(out, "{}│   ├── linked folders (not followed): {}", indent, node.linked_folders)?;
        }

        writeln!(out, "{}│   ├── files: {}", indent, node.file_count)?;
        if node.file_count > 0 {
            writeln!(out, "{}│   ├── file types:", indent)?;
            for (key, count) in node.file_types.top(self.config.node_types) {
                write!(out, "{}│   │   ├── ", indent)?;
                write_colored(out, key, Some(Color::Cyan), false)?;
                writeln!(out, ": {}", count)?;
            }
            if node.file_types.len() > self.config.node_types {
                writeln!(out, "{}│   │   ├── ... {} types", indent, node.file_types.len())?;
            }
        } else {
            writeln!(out, "{}│   ├── file types: none", indent)?;
        }

        writeln!(out, "{}│", indent)?;
        if !node.folders.is_empty() {
            writeln!(out, "{}▼", indent)?;
        }
        Ok(())
    }
}

/// Render a quick scan to a writer.
pub fn write_quick_scan<W: WriteColor>(
    out: &mut W,
    root: &std::path::Path,
    scan: &QuickScan,
) -> io::Result<()> {
    write_colored(out, &root.display().to_string(), Some(Color::Blue), true)?;
    writeln!(out)?;
    writeln!(out, "├── folders: {}", scan.folder_count)?;
    writeln!(out, "├── files: {}", scan.file_count)?;
    if scan.file_types.is_empty() {
        writeln!(out, "└── file types: none")?;
        return Ok(());
    }
    writeln!(out, "└── file types:")?;
    let last = scan.file_types.len() - 1;
    for (i, (key, count)) in scan.file_types.iter().enumerate() {
        let branch = if i == last { "└──" } else { "├──" };
        write!(out, "    {} ", branch)?;
        write_colored(out, key, Some(Color::Cyan), false)?;
        writeln!(out, ": {}", count)?;
    }
    Ok(())
}
