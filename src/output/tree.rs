//! Tree formatter for console output
//!
//! This module provides `TreeFormatter` which writes a walked tree to a
//! terminal, colouring labels by entry kind or highlighting search matches.

use std::io::{self, Write};

use termcolor::{ColorChoice, ColorSpec, StandardStream, WriteColor};

use crate::tree::TreeNode;

use super::config::OutputConfig;
use super::highlight::write_highlighted;
use super::text::{TreeLine, render_lines, render_text};

/// Formatter for console tree output.
pub struct TreeFormatter {
    config: OutputConfig,
}

impl TreeFormatter {
    pub fn new(config: OutputConfig) -> Self {
        Self { config }
    }

    /// Uncoloured text, identical to the plain-text export.
    pub fn format(&self, node: &TreeNode) -> String {
        render_text(node, &self.config.symbols)
    }

    pub fn print(&self, node: &TreeNode) -> io::Result<()> {
        let choice = if self.config.use_color {
            ColorChoice::Always
        } else {
            ColorChoice::Never
        };
        let mut stdout = StandardStream::stdout(choice);
        self.write(&mut stdout, node)?;
        stdout.flush()
    }

    /// Write every line followed by a newline.
    pub fn write<W: WriteColor>(&self, out: &mut W, node: &TreeNode) -> io::Result<()> {
        for line in render_lines(node, &self.config.symbols) {
            match self.config.highlight_term() {
                Some(term) => write_highlighted(out, &line.text(), term)?,
                None => self.write_styled(out, &line)?,
            }
            writeln!(out)?;
        }
        Ok(())
    }

    fn write_styled<W: WriteColor>(&self, out: &mut W, line: &TreeLine) -> io::Result<()> {
        write!(out, "{}", line.prefix)?;
        match line.style.color() {
            Some(color) => {
                let mut spec = ColorSpec::new();
                spec.set_fg(Some(color)).set_bold(line.style.is_bold());
                out.set_color(&spec)?;
                write!(out, "{}", line.label)?;
                out.reset()
            }
            None => write!(out, "{}", line.label),
        }
    }
}
