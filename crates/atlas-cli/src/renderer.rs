//! Terminal rendering for markdown output
//!
//! Rich mode styles headers and status lines with termimad; plain mode
//! prints the markdown unchanged.

use std::fmt;

use anyhow::Result;
use termimad::{crossterm::style::Color, MadSkin};

/// Terminal renderer that can switch between rich and plain text output
pub struct TerminalRenderer {
    rich_enabled: bool,
    skin: MadSkin,
}

impl TerminalRenderer {
    pub fn new(rich_enabled: bool) -> Self {
        let mut skin = MadSkin::default();
        skin.set_headers_fg(Color::Cyan);
        skin.bold.set_fg(Color::Yellow);
        skin.inline_code.set_bg(Color::AnsiValue(238));

        Self { rich_enabled, skin }
    }

    /// Prints any markdown-producing value to stdout.
    pub fn render(&self, content: impl fmt::Display) -> Result<()> {
        let markdown = content.to_string();
        if !self.rich_enabled {
            print!("{markdown}");
            return Ok(());
        }

        for line in markdown.lines() {
            if line.starts_with('#') {
                // Keep the hash so record headers stay greppable
                println!("\x1b[36m{line}\x1b[0m");
            } else if line.starts_with("Error:") {
                println!("\x1b[31m{line}\x1b[0m");
            } else {
                self.skin.print_inline(line);
                println!();
            }
        }
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new(true)
    }
}
