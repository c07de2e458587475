//! Feeding key sequences into a calculator and printing frames.

use super::display::render_panel;
use crate::calculator::{Calculator, DisplayFrame};
use crate::input::parse_events;
use anyhow::{Context, Result};
use std::io::{BufRead, Write};
use tracing::debug;

/// Lines that end an interactive session.
const QUIT_COMMANDS: &[&str] = &["q", "quit", "exit"];

/// How frames are written out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Just the display text.
    Plain,
    /// Boxed display, optionally with the keypad.
    Panel { width: usize, show_keypad: bool },
    /// One JSON object per frame.
    Json,
}

impl OutputFormat {
    pub fn render(self, frame: &DisplayFrame) -> Result<String> {
        Ok(match self {
            Self::Plain => frame.text.clone(),
            Self::Panel { width, show_keypad } => render_panel(frame, width, show_keypad),
            Self::Json => serde_json::to_string(frame).context("Failed to serialize frame")?,
        })
    }
}

/// Runs key sequences against a calculator and writes frames.
pub struct Runner<W: Write> {
    format: OutputFormat,
    /// Write a frame after every event, not just after every sequence.
    trace: bool,
    out: W,
}

impl<W: Write> Runner<W> {
    pub fn new(format: OutputFormat, trace: bool, out: W) -> Self {
        Self { format, trace, out }
    }

    /// Apply a key sequence and write the resulting frame(s).
    pub fn run_sequence(&mut self, calculator: &mut Calculator, keys: &str) -> Result<()> {
        let events = parse_events(keys);
        debug!(keys, count = events.len(), "running key sequence");

        for event in events {
            let frame = calculator.dispatch(event);
            if self.trace {
                self.write_frame(&frame)?;
            }
        }
        if !self.trace {
            self.write_frame(&calculator.frame())?;
        }
        Ok(())
    }

    /// Read key sequences line by line until EOF or a quit command.
    pub fn run_interactive<R: BufRead>(
        &mut self,
        calculator: &mut Calculator,
        input: R,
    ) -> Result<()> {
        self.write_frame(&calculator.frame())?;

        for line in input.lines() {
            let line = line.context("Failed to read input")?;
            let line = line.trim();
            if QUIT_COMMANDS.contains(&line) {
                break;
            }
            self.run_sequence(calculator, line)?;
        }
        Ok(())
    }

    fn write_frame(&mut self, frame: &DisplayFrame) -> Result<()> {
        let rendered = self.format.render(frame)?;
        writeln!(self.out, "{rendered}").context("Failed to write output")?;
        self.out.flush().context("Failed to flush output")
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}
