//! Terminal console sink

use crate::core::ConsoleSink;
use colored::Color;
use std::io::{self, Write};

/// Writes lines to stdout and changes colour with ANSI escape sequences.
pub struct TerminalConsole {
    use_colors: bool,
}

impl TerminalConsole {
    /// Colour output follows `colored`'s detection (`NO_COLOR`,
    /// `CLICOLOR_FORCE`, whether stdout is a terminal).
    pub fn new() -> Self {
        Self {
            use_colors: colored::control::SHOULD_COLORIZE.should_colorize(),
        }
    }

    pub fn with_colors(use_colors: bool) -> Self {
        Self { use_colors }
    }

    pub fn uses_colors(&self) -> bool {
        self.use_colors
    }
}

impl Default for TerminalConsole {
    fn default() -> Self {
        Self::new()
    }
}

impl ConsoleSink for TerminalConsole {
    fn set_foreground(&mut self, color: Color) -> io::Result<()> {
        if !self.use_colors {
            return Ok(());
        }
        let mut out = io::stdout().lock();
        write!(out, "\x1b[{}m", color.to_fg_str())?;
        out.flush()
    }

    fn write_line(&mut self, line: &str) -> io::Result<()> {
        let mut out = io::stdout().lock();
        writeln!(out, "{}", line)?;
        out.flush()
    }
}
