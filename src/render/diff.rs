//! Diff Renderer - line-level terminal output.
//!
//! Keeps the previously rendered frame and rewrites only the rows that
//! changed since. A reveal tick usually touches one row, a cursor flip two,
//! so most frames cost a handful of escape sequences instead of a repaint.
//!
//! A dimension change invalidates the comparison: the whole screen is
//! cleared and redrawn.

use std::io::{self, Stdout, Write, stdout};

use crossterm::cursor::{Hide, MoveTo, Show};
use crossterm::style::{Attribute, Print, ResetColor, SetAttribute, SetForegroundColor};
use crossterm::terminal::{Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::{execute, queue};

use crate::render::frame::{Frame, Line};
use crate::types::Attr;

pub struct DiffRenderer {
    out: Stdout,
    previous: Option<Frame>,
    entered: bool,
}

impl DiffRenderer {
    pub fn new() -> Self {
        Self {
            out: stdout(),
            previous: None,
            entered: false,
        }
    }

    /// Write the rows of `frame` that differ from the previous one.
    ///
    /// Returns whether anything was written.
    pub fn render(&mut self, frame: &Frame) -> io::Result<bool> {
        let resized = match &self.previous {
            Some(previous) => {
                previous.width != frame.width || previous.height() != frame.height()
            }
            None => true,
        };
        if resized && self.previous.is_some() {
            queue!(self.out, Clear(ClearType::All))?;
        }

        let mut changed = false;
        for (y, line) in frame.lines.iter().enumerate() {
            if !resized && self.previous.as_ref().and_then(|p| p.line(y as u16)) == Some(line) {
                continue;
            }
            self.queue_line(y as u16, line)?;
            changed = true;
        }

        if changed {
            queue!(self.out, ResetColor, SetAttribute(Attribute::Reset))?;
            self.out.flush()?;
        }
        self.previous = Some(frame.clone());
        Ok(changed)
    }

    /// Redraw every row regardless of the previous frame.
    pub fn render_full(&mut self, frame: &Frame) -> io::Result<bool> {
        self.invalidate();
        self.render(frame)
    }

    /// Drop the previous frame so the next render rewrites everything.
    pub fn invalidate(&mut self) {
        self.previous = None;
    }

    pub fn has_previous(&self) -> bool {
        self.previous.is_some()
    }

    pub fn enter_fullscreen(&mut self) -> io::Result<()> {
        execute!(self.out, EnterAlternateScreen, Hide, Clear(ClearType::All))?;
        self.entered = true;
        self.invalidate();
        Ok(())
    }

    pub fn exit_fullscreen(&mut self) -> io::Result<()> {
        execute!(
            self.out,
            ResetColor,
            SetAttribute(Attribute::Reset),
            Show,
            LeaveAlternateScreen
        )?;
        self.entered = false;
        Ok(())
    }

    fn queue_line(&mut self, y: u16, line: &Line) -> io::Result<()> {
        queue!(self.out, MoveTo(0, y), Clear(ClearType::CurrentLine))?;
        for span in &line.spans {
            queue!(
                self.out,
                SetAttribute(Attribute::Reset),
                SetForegroundColor(span.fg)
            )?;
            queue_attrs(&mut self.out, span.attrs)?;
            queue!(self.out, Print(&span.text))?;
        }
        Ok(())
    }
}

impl Default for DiffRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for DiffRenderer {
    fn drop(&mut self) {
        if self.entered {
            let _ = self.exit_fullscreen();
        }
    }
}

fn queue_attrs(out: &mut Stdout, attrs: Attr) -> io::Result<()> {
    if attrs.contains(Attr::BOLD) {
        queue!(out, SetAttribute(Attribute::Bold))?;
    }
    if attrs.contains(Attr::DIM) {
        queue!(out, SetAttribute(Attribute::Dim))?;
    }
    if attrs.contains(Attr::ITALIC) {
        queue!(out, SetAttribute(Attribute::Italic))?;
    }
    if attrs.contains(Attr::UNDERLINE) {
        queue!(out, SetAttribute(Attribute::Underlined))?;
    }
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================
