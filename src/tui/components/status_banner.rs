//! # StatusBanner Component
//!
//! Shows the outcome of the last action. Stateless: `kind` and `text` are
//! props copied from `App.status`.
//!
//! The banner takes no space at all when the text is empty. Otherwise the
//! kind picks one of three variants. The variant name is the border title:
//!
//! | kind            | variant   | color |
//! |-----------------|-----------|-------|
//! | Error           | danger    | red   |
//! | Success         | success   | green |
//! | anything else   | info      | cyan  |

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, BorderType, Paragraph, Wrap};

use crate::core::state::{Status, StatusKind};
use crate::tui::component::Component;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BannerVariant {
    Danger,
    Success,
    Info,
}

impl BannerVariant {
    pub fn for_kind(kind: StatusKind) -> Self {
        match kind {
            StatusKind::Error => BannerVariant::Danger,
            StatusKind::Success => BannerVariant::Success,
            _ => BannerVariant::Info,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            BannerVariant::Danger => "danger",
            BannerVariant::Success => "success",
            BannerVariant::Info => "info",
        }
    }

    pub fn color(self) -> Color {
        match self {
            BannerVariant::Danger => Color::Red,
            BannerVariant::Success => Color::Green,
            BannerVariant::Info => Color::Cyan,
        }
    }
}

pub struct StatusBanner {
    pub kind: StatusKind,
    pub text: String,
}

impl StatusBanner {
    pub fn new(status: &Status) -> Self {
        Self {
            kind: status.kind,
            text: status.text.clone(),
        }
    }

    /// `None` when there is nothing to show.
    pub fn variant(&self) -> Option<BannerVariant> {
        if self.text.is_empty() {
            None
        } else {
            Some(BannerVariant::for_kind(self.kind))
        }
    }

    /// Rows needed at the given width, 0 when hidden.
    pub fn height(&self, width: u16) -> u16 {
        if self.variant().is_none() {
            return 0;
        }
        let inner = width.saturating_sub(2).max(1) as usize;
        let lines = textwrap::wrap(&self.text, inner).len().max(1) as u16;
        lines + 2
    }
}

impl Component for StatusBanner {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let Some(variant) = self.variant() else {
            return;
        };
        if area.height == 0 {
            return;
        }

        let style = Style::default().fg(variant.color());
        let banner = Paragraph::new(self.text.as_str())
            .block(
                Block::bordered()
                    .title(format!(" {} ", variant.name()))
                    .border_type(BorderType::Rounded)
                    .border_style(style),
            )
            .style(style)
            .wrap(Wrap { trim: true });
        frame.render_widget(banner, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn test_variant_mapping() {
        assert_eq!(BannerVariant::for_kind(StatusKind::Error), BannerVariant::Danger);
        assert_eq!(BannerVariant::for_kind(StatusKind::Success), BannerVariant::Success);
        assert_eq!(BannerVariant::for_kind(StatusKind::Info), BannerVariant::Info);
        assert_eq!(BannerVariant::for_kind(StatusKind::None), BannerVariant::Info);
    }

    #[test]
    fn test_hidden_when_text_empty() {
        let banner = StatusBanner::new(&Status::error(""));
        assert_eq!(banner.variant(), None);
        assert_eq!(banner.height(80), 0);
    }

    #[test]
    fn test_height_grows_with_wrapping() {
        let banner = StatusBanner::new(&Status::info("Sending message..."));
        assert_eq!(banner.height(80), 3);
        assert!(banner.height(12) > 3);
    }

    #[test]
    fn test_renders_text_in_variant_color() {
        let backend = TestBackend::new(40, 3);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut banner = StatusBanner::new(&Status::error("Boom"));
        terminal.draw(|f| banner.render(f, f.area())).unwrap();

        let buffer = terminal.backend().buffer();
        let row: String = (0..40).map(|x| buffer[(x, 1)].symbol()).collect();
        assert!(row.contains("Boom"));
        assert_eq!(buffer[(1, 1)].fg, Color::Red);
    }

    #[test]
    fn test_border_title_names_variant() {
        let backend = TestBackend::new(40, 3);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut banner = StatusBanner::new(&Status::success("Done"));
        terminal.draw(|f| banner.render(f, f.area())).unwrap();

        let buffer = terminal.backend().buffer();
        let top: String = (0..40).map(|x| buffer[(x, 0)].symbol()).collect();
        assert!(top.contains(" success "));
        assert!(!top.contains("danger"));
    }
}
