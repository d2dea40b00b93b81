//! # TextField Component
//!
//! A controlled input: the displayed value is a prop synced from `App.form`
//! every frame, and edits come back out as `FieldEvent::Changed` carrying the
//! whole new value. The field never keeps text of its own.
//!
//! The cursor always sits at the end of the value. Multi-line fields (the
//! message body) wrap with textwrap and keep the last lines in view.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

/// Top + bottom borders consumed vertically
pub const VERTICAL_OVERHEAD: u16 = 2;
/// Left + right borders consumed horizontally
const HORIZONTAL_OVERHEAD: u16 = 2;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldEvent {
    /// The value changed; carries the full new value.
    Changed(String),
    /// Enter in a single-line field.
    Submit,
}

pub struct TextField {
    pub label: &'static str,
    pub placeholder: &'static str,
    /// Visible content rows (1 for single-line fields)
    pub rows: u16,
    /// Current value (Prop)
    pub value: String,
    /// Whether the field has keyboard focus (Prop)
    pub focused: bool,
    /// Field-level hint, such as a validation message (Prop)
    pub hint: Option<String>,
}

fn wrap_options(width: u16) -> textwrap::Options<'static> {
    textwrap::Options::new(width as usize)
        .break_words(true)
        .word_separator(textwrap::WordSeparator::AsciiSpace)
}

impl TextField {
    pub fn single_line(label: &'static str, placeholder: &'static str) -> Self {
        Self {
            label,
            placeholder,
            rows: 1,
            value: String::new(),
            focused: false,
            hint: None,
        }
    }

    pub fn multi_line(label: &'static str, placeholder: &'static str, rows: u16) -> Self {
        Self {
            rows: rows.max(1),
            ..Self::single_line(label, placeholder)
        }
    }

    pub fn is_multiline(&self) -> bool {
        self.rows > 1
    }

    pub fn height(&self) -> u16 {
        self.rows + VERTICAL_OVERHEAD
    }

    /// The lines to display, scrolled so the end of the value stays visible.
    pub fn visible_lines(&self, inner_width: u16) -> Vec<String> {
        if inner_width == 0 {
            return Vec::new();
        }

        if !self.is_multiline() {
            return vec![tail_fitting(&self.value, inner_width as usize).to_string()];
        }

        let mut lines: Vec<String> = textwrap::wrap(&self.value, wrap_options(inner_width))
            .into_iter()
            .map(|l| l.into_owned())
            .collect();
        // textwrap doesn't always produce an empty trailing line for a trailing newline
        if self.value.ends_with('\n') && !lines.last().is_some_and(|l| l.is_empty()) {
            lines.push(String::new());
        }

        let start = lines.len().saturating_sub(self.rows as usize);
        lines.split_off(start)
    }

    /// Cursor position relative to the inner area: (column, row).
    fn cursor_offset(&self, lines: &[String], inner_width: u16) -> (u16, u16) {
        let row = lines.len().saturating_sub(1) as u16;
        let last = lines.last().map(String::as_str).unwrap_or("");
        // Wrapping trims trailing spaces; the cursor still goes after them.
        let trailing = if self.value.ends_with('\n') {
            0
        } else {
            self.value.len() - self.value.trim_end_matches(' ').len()
        };
        let trailing = if last.ends_with(' ') { 0 } else { trailing };
        let column = (last.width() + trailing).min(inner_width.saturating_sub(1) as usize);
        (column as u16, row)
    }
}

/// Longest suffix of `text` no wider than `width` columns.
fn tail_fitting(text: &str, width: usize) -> &str {
    if text.width() < width {
        return text;
    }
    // Leave a column for the cursor.
    let mut start = text.len();
    let mut used = 0;
    for (i, c) in text.char_indices().rev() {
        let w = unicode_width::UnicodeWidthChar::width(c).unwrap_or(0);
        if used + w >= width {
            break;
        }
        used += w;
        start = i;
    }
    &text[start..]
}

impl Component for TextField {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let border_style = if self.focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().add_modifier(Modifier::DIM)
        };

        let mut block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(border_style)
            .title(self.label);
        if let Some(hint) = &self.hint {
            block = block.title_bottom(
                ratatui::text::Line::from(format!(" {hint} ")).style(Style::default().fg(Color::Yellow)),
            );
        }

        let inner_width = area.width.saturating_sub(HORIZONTAL_OVERHEAD);

        if self.value.is_empty() {
            let placeholder = Paragraph::new(self.placeholder)
                .block(block)
                .style(Style::default().fg(Color::DarkGray).add_modifier(Modifier::ITALIC));
            frame.render_widget(placeholder, area);
            if self.focused {
                frame.set_cursor_position((area.x + 1, area.y + 1));
            }
            return;
        }

        let lines = self.visible_lines(inner_width);
        let (cursor_x, cursor_y) = self.cursor_offset(&lines, inner_width);
        let paragraph = Paragraph::new(lines.join("\n")).block(block);
        frame.render_widget(paragraph, area);

        if self.focused {
            frame.set_cursor_position((area.x + 1 + cursor_x, area.y + 1 + cursor_y));
        }
    }
}

impl EventHandler for TextField {
    type Event = FieldEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        let mut value = self.value.clone();
        match event {
            TuiEvent::InputChar('\n') | TuiEvent::Enter if self.is_multiline() => value.push('\n'),
            TuiEvent::Enter => return Some(FieldEvent::Submit),
            // Single-line inputs drop line breaks.
            TuiEvent::InputChar('\n') => return None,
            TuiEvent::InputChar(c) => value.push(*c),
            TuiEvent::Paste(text) if self.is_multiline() => value.push_str(text),
            TuiEvent::Paste(text) => value.extend(text.chars().filter(|c| !matches!(c, '\n' | '\r'))),
            TuiEvent::Backspace => {
                value.pop()?;
            }
            _ => return None,
        }
        Some(FieldEvent::Changed(value))
    }
}
