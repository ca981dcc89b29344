//! Frame - styled line composition for the page.
//!
//! A frame is plain data: a fixed-size stack of lines, each a run of styled
//! spans. `compose_page` is the single reactive read point of the crate: it
//! reads every reveal signal, the gate view, and the blink phase, and turns
//! them into a frame. Everything it reads becomes a dependency of the render
//! effect that calls it, so any reveal tick, panel switch, or cursor flip
//! recomposes exactly one frame.
//!
//! Layout: columns side by side separated by a divider, each clipped and
//! padded to its cell width. The first column additionally carries the
//! action menu and whatever panel the gate has mounted. An incomplete
//! reveal shows the tip cursor while the shared blink phase is visible.

use crossterm::style::Color;

use crate::compose::CascadeHandle;
use crate::engine::RevealHandle;
use crate::page::{ColumnHandle, ContactHandle, PageHandle, PanelView, PrivacyHandle};
use crate::render::measure::{display_width, truncate_to_width, wrap};
use crate::types::Attr;

/// Block cursor drawn at the tip of an incomplete reveal.
pub const CURSOR_GLYPH: &str = "▋";
/// Divider between adjacent columns.
pub const DIVIDER: &str = " │ ";

const HEADER_FG: Color = Color::DarkGrey;
const BODY_FG: Color = Color::White;
const MENU_FG: Color = Color::White;
const CHROME_FG: Color = Color::DarkGrey;
const CURSOR_FG: Color = Color::White;
const DIVIDER_FG: Color = Color::DarkGrey;

/// Column the contact input boxes align to, past the longest label.
const LABEL_COL: usize = 10;

// =============================================================================
// Value Types
// =============================================================================

/// One styled run of text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub text: String,
    pub fg: Color,
    pub attrs: Attr,
}

impl Span {
    pub fn new(text: impl Into<String>, fg: Color) -> Self {
        Self {
            text: text.into(),
            fg,
            attrs: Attr::NONE,
        }
    }

    pub fn styled(text: impl Into<String>, fg: Color, attrs: Attr) -> Self {
        Self {
            text: text.into(),
            fg,
            attrs,
        }
    }

    /// Terminal cells this span occupies.
    pub fn width(&self) -> usize {
        display_width(&self.text)
    }
}

/// One row of spans.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Line {
    pub spans: Vec<Span>,
}

impl Line {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, span: Span) {
        self.spans.push(span);
    }

    pub fn width(&self) -> usize {
        self.spans.iter().map(Span::width).sum()
    }
}

/// A full screen's worth of lines. `PartialEq` drives the line diff.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub width: u16,
    pub lines: Vec<Line>,
}

impl Frame {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            lines: vec![Line::new(); height as usize],
        }
    }

    pub fn height(&self) -> u16 {
        self.lines.len() as u16
    }

    pub fn line(&self, y: u16) -> Option<&Line> {
        self.lines.get(y as usize)
    }

    /// Replace one row; rows outside the frame are ignored.
    pub fn set_line(&mut self, y: u16, line: Line) {
        if let Some(slot) = self.lines.get_mut(y as usize) {
            *slot = line;
        }
    }
}

// =============================================================================
// Page Composition
// =============================================================================

/// Compose the whole page into a frame of `width` x `height` cells.
pub fn compose_page(page: &PageHandle, width: u16, height: u16) -> Frame {
    let mut frame = Frame::new(width, height);
    let columns = page.columns();
    if columns.is_empty() || width == 0 || height == 0 {
        return frame;
    }

    let cursor_on = page.cursor_visible();
    let count = columns.len();
    let divider_width = display_width(DIVIDER);
    let column_width = ((width as usize).saturating_sub(divider_width * (count - 1)) / count).max(1);

    let mut stacks: Vec<Vec<Line>> = columns
        .iter()
        .map(|column| column_lines(column, column_width, cursor_on))
        .collect();

    // The first column carries the action menu and the active panel.
    if let Some(first) = stacks.first_mut() {
        first.push(Line::new());
        menu_lines(page.menu(), column_width, cursor_on, first);
        match page.gate().view() {
            Some(PanelView::Contact(contact)) => {
                first.push(Line::new());
                contact_lines(&contact, column_width, cursor_on, first);
            }
            Some(PanelView::Privacy(privacy)) => {
                first.push(Line::new());
                privacy_lines(&privacy, column_width, cursor_on, first);
            }
            None => {}
        }
    }

    let rows = stacks.iter().map(Vec::len).max().unwrap_or(0);
    let rows = rows.min(height as usize);
    for y in 0..rows {
        let mut line = Line::new();
        for (i, stack) in stacks.iter().enumerate() {
            if i > 0 {
                line.push(Span::new(DIVIDER, DIVIDER_FG));
            }
            let cell = match stack.get(y) {
                Some(row) => fit_line(row, column_width),
                None => Line::new(),
            };
            let pad = column_width.saturating_sub(cell.width());
            for span in cell.spans {
                line.push(span);
            }
            if pad > 0 {
                line.push(Span::new(" ".repeat(pad), BODY_FG));
            }
        }
        frame.set_line(y as u16, line);
    }
    frame
}

// =============================================================================
// Section Renderers
// =============================================================================

/// Wrapped rows of one reveal, tip cursor on the last row while incomplete.
fn reveal_lines(
    reveal: &RevealHandle,
    width: usize,
    fg: Color,
    attrs: Attr,
    cursor_on: bool,
    out: &mut Vec<Line>,
) {
    let text = reveal.revealed();
    let done = reveal.done();
    let wrapped = wrap(&text, width);
    let last = wrapped.len() - 1;

    for (i, row) in wrapped.iter().enumerate() {
        let mut line = Line::new();
        if !row.is_empty() {
            line.push(Span::styled(row.as_str(), fg, attrs));
        }
        if i == last && !done && cursor_on {
            // a full row pushes the cursor onto the next one
            if width > 0 && display_width(row) >= width {
                out.push(line);
                line = Line::new();
            }
            line.push(Span::new(CURSOR_GLYPH, CURSOR_FG));
        }
        out.push(line);
    }
}

fn column_lines(column: &ColumnHandle, width: usize, cursor_on: bool) -> Vec<Line> {
    let mut lines = Vec::new();
    reveal_lines(column.header(), width, HEADER_FG, Attr::NONE, cursor_on, &mut lines);
    reveal_lines(column.body(), width, BODY_FG, Attr::NONE, cursor_on, &mut lines);
    reveal_lines(column.close_quote(), width, HEADER_FG, Attr::NONE, cursor_on, &mut lines);
    lines
}

fn menu_lines(menu: &CascadeHandle, width: usize, cursor_on: bool, out: &mut Vec<Line>) {
    for reveal in menu.reveals() {
        reveal_lines(reveal, width, MENU_FG, Attr::BOLD, cursor_on, out);
    }
}

fn contact_lines(contact: &ContactHandle, width: usize, cursor_on: bool, out: &mut Vec<Line>) {
    reveal_lines(contact.header(), width, HEADER_FG, Attr::NONE, cursor_on, out);

    let chrome = contact.chrome_visible();
    let labels = [
        contact.name_label(),
        contact.email_label(),
        contact.message_label(),
    ];
    for label in labels {
        let mut line = Line::new();
        line.push(Span::new("  ", BODY_FG));
        let text = label.revealed();
        if !text.is_empty() {
            line.push(Span::styled(text.as_str(), BODY_FG, Attr::NONE));
        }
        if !label.done() && cursor_on {
            line.push(Span::new(CURSOR_GLYPH, CURSOR_FG));
        }
        if chrome {
            let pad = LABEL_COL.saturating_sub(line.width()) + 1;
            line.push(Span::new(" ".repeat(pad), BODY_FG));
            line.push(Span::new("[          ]", CHROME_FG));
        }
        out.push(line);
    }

    if chrome {
        let mut send = Line::new();
        send.push(Span::new("  ", BODY_FG));
        send.push(Span::styled("[ SEND ]", MENU_FG, Attr::BOLD));
        out.push(send);
    }

    reveal_lines(contact.close_brace(), width, HEADER_FG, Attr::NONE, cursor_on, out);
}

fn privacy_lines(privacy: &PrivacyHandle, width: usize, cursor_on: bool, out: &mut Vec<Line>) {
    reveal_lines(privacy.text(), width, BODY_FG, Attr::NONE, cursor_on, out);
}

/// Clip a row to `width` cells, truncating the span that crosses the edge.
fn fit_line(line: &Line, width: usize) -> Line {
    if line.width() <= width {
        return line.clone();
    }
    let mut out = Line::new();
    let mut used = 0;
    for span in &line.spans {
        let span_width = span.width();
        if used + span_width <= width {
            out.push(span.clone());
            used += span_width;
            continue;
        }
        let cut = truncate_to_width(&span.text, width - used);
        if !cut.is_empty() {
            out.push(Span::styled(cut, span.fg, span.attrs));
        }
        break;
    }
    out
}

// =============================================================================
// Tests
// =============================================================================
