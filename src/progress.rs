//! Progress output for user-facing status updates.
//!
//! In verbose mode output is suppressed since tracing handles everything.
//! In normal mode each rename is echoed with colors to give feedback while
//! the tree is walked.

use crate::name::EntryKind;
use colored::Colorize;
use std::io::{self, IsTerminal, Write};
use std::path::Path;

/// Progress reporter for user-facing output
pub struct Progress {
    writer: Box<dyn Write>,
    /// When true, all output is suppressed (verbose mode uses tracing instead)
    silent: bool,
    /// When true, output is colorized
    colors_enabled: bool,
}

/// Check if we should use colors in output
pub fn should_use_colors() -> bool {
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }
    if std::env::var("FORCE_COLOR").is_ok() {
        return true;
    }
    io::stderr().is_terminal()
}

impl Progress {
    /// Create a progress reporter writing to stderr.
    /// When verbose=true, output is suppressed (tracing handles it)
    pub fn new_with_ui(verbose: bool, colors_enabled: bool) -> Self {
        Self {
            writer: Box::new(io::stderr()),
            silent: verbose,
            colors_enabled,
        }
    }

    /// Create a progress reporter with a custom writer (for testing)
    #[cfg(test)]
    pub fn with_writer(writer: Box<dyn Write>) -> Self {
        Self {
            writer,
            silent: false,
            colors_enabled: false,
        }
    }

    pub fn silent() -> Self {
        Self {
            writer: Box::new(io::sink()),
            silent: true,
            colors_enabled: false,
        }
    }

    /// Report the start of a walk
    pub fn walk_start(&mut self, root: &Path) {
        if self.silent {
            return;
        }
        if self.colors_enabled {
            let _ = writeln!(
                self.writer,
                "{}",
                format!("Renaming in {}", root.display()).bold()
            );
        } else {
            let _ = writeln!(self.writer, "Renaming in {}", root.display());
        }
    }

    /// Report a single rename
    pub fn renamed(&mut self, kind: EntryKind, from: &str, to: &str) {
        if self.silent {
            return;
        }
        let tag = match kind {
            EntryKind::File => "[file]  ",
            EntryKind::Folder => "[folder]",
        };
        if self.colors_enabled {
            let _ = writeln!(
                self.writer,
                "{} {} {} {}",
                tag.cyan(),
                from.dimmed(),
                "→".cyan(),
                to
            );
        } else {
            let _ = writeln!(self.writer, "{} {} -> {}", tag, from, to);
        }
    }

    /// Report walk complete
    pub fn walk_complete(&mut self, count: usize) {
        if self.silent {
            return;
        }
        if self.colors_enabled {
            let _ = writeln!(
                self.writer,
                "{} {}",
                "✓".green().bold(),
                format!("{} entries renamed", count).green()
            );
        } else {
            let _ = writeln!(self.writer, "Done. {} entries renamed.", count);
        }
    }
}
