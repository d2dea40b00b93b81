//! # ButtonRow Component
//!
//! The form's two actions. The primary button submits, the secondary one
//! transfers the browser session. Only the highlight depends on state.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Paragraph};

use crate::tui::component::Component;

pub const SEND_LABEL: &str = "Send Message";
pub const TRANSFER_LABEL: &str = "Transfer Browser Session";

/// Rows taken by the bordered buttons.
pub const HEIGHT: u16 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    Send,
    Transfer,
}

pub struct ButtonRow {
    /// Which button has focus, if any (Prop)
    pub focused: Option<Button>,
}

impl ButtonRow {
    fn button<'a>(label: &'a str, base: Color, focused: bool) -> Paragraph<'a> {
        let style = if focused {
            Style::default().fg(Color::Black).bg(base).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(base)
        };
        Paragraph::new(label)
            .alignment(Alignment::Center)
            .style(style)
            .block(
                Block::bordered()
                    .border_type(BorderType::Rounded)
                    .border_style(Style::default().fg(base)),
            )
    }
}

impl Component for ButtonRow {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let send_width = SEND_LABEL.len() as u16 + 4;
        let transfer_width = TRANSFER_LABEL.len() as u16 + 4;
        let [send_area, _, transfer_area, _] = Layout::horizontal([
            Constraint::Length(send_width),
            Constraint::Length(1),
            Constraint::Length(transfer_width),
            Constraint::Min(0),
        ])
        .areas(area);

        frame.render_widget(
            Self::button(SEND_LABEL, Color::Blue, self.focused == Some(Button::Send)),
            send_area,
        );
        frame.render_widget(
            Self::button(TRANSFER_LABEL, Color::Gray, self.focused == Some(Button::Transfer)),
            transfer_area,
        );
    }
}
