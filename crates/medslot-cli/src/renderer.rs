//! Terminal rendering module for markdown output
//!
//! Rich output goes through termimad; plain mode prints the markdown as is,
//! which keeps scripted use and tests free of escape codes.

use std::io::{self, Write};

use anyhow::Result;
use termimad::{crossterm::style::Color, MadSkin};

/// ANSI cyan, used for tab and card headings in rich mode.
const HEADING_START: &str = "\x1b[36m";
const HEADING_END: &str = "\x1b[0m";

/// Terminal renderer that can switch between rich and plain text output
pub struct TerminalRenderer {
    rich_enabled: bool,
    skin: MadSkin,
}

impl TerminalRenderer {
    /// Create a new terminal renderer
    pub fn new(rich_enabled: bool) -> Self {
        let mut skin = MadSkin::default();

        skin.set_headers_fg(Color::Cyan);
        skin.bold.set_fg(Color::Green);
        skin.italic.set_fg(Color::Magenta);
        skin.strikeout.set_fg(Color::DarkGrey);
        skin.inline_code.set_bg(Color::AnsiValue(238));

        Self { rich_enabled, skin }
    }

    /// Render markdown text to stdout
    pub fn render(&self, markdown: &str) -> Result<()> {
        let mut stdout = io::stdout().lock();
        self.write_to(&mut stdout, markdown)?;
        stdout.flush()?;
        Ok(())
    }

    /// Writes `markdown` to `out`, always ending with a newline.
    ///
    /// Rich mode keeps the hash marks of heading lines and colours them;
    /// other lines have their inline markup (bold, italics, code) styled.
    pub fn write_to(&self, out: &mut impl Write, markdown: &str) -> Result<()> {
        if !self.rich_enabled {
            write!(out, "{markdown}")?;
            if !markdown.ends_with('\n') {
                writeln!(out)?;
            }
            return Ok(());
        }

        for line in markdown.lines() {
            if line.starts_with('#') {
                writeln!(out, "{HEADING_START}{line}{HEADING_END}")?;
            } else {
                writeln!(out, "{}", self.skin.inline(line))?;
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
