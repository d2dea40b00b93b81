use crate::core::state::App;
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{ButtonRow, StatusBanner, button_row};

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

pub const TITLE: &str = "Wellfound Messenger";
const HELP: &str = "Tab: next · Shift+Tab: previous · Ctrl+S: send · Ctrl+T: transfer session · Esc: quit";

/// Screen regions, top to bottom. The banner area has zero height when hidden.
pub struct FormLayout {
    pub title: Rect,
    pub banner: Rect,
    pub url: Rect,
    pub message: Rect,
    pub buttons: Rect,
    pub help: Rect,
}

pub fn form_layout(area: Rect, banner_height: u16, tui: &TuiState) -> FormLayout {
    use Constraint::{Length, Min};
    let layout = Layout::vertical([
        Length(1),
        Length(banner_height),
        Length(tui.url_field.height()),
        Length(tui.message_field.height()),
        Length(button_row::HEIGHT),
        Length(1),
        Min(0),
    ]);
    let [title, banner, url, message, buttons, help, _rest] = layout.areas(area);
    FormLayout { title, banner, url, message, buttons, help }
}

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState) {
    tui.sync_props(app);

    let mut banner = StatusBanner::new(&app.status);
    let layout = form_layout(frame.area(), banner.height(frame.area().width), tui);

    let title = Line::from(vec![
        Span::styled(TITLE, Style::default().add_modifier(Modifier::BOLD)),
        Span::styled(
            format!("  (backend: {})", tui.backend_url),
            Style::default().fg(Color::DarkGray),
        ),
    ]);
    frame.render_widget(title, layout.title);

    banner.render(frame, layout.banner);
    tui.url_field.render(frame, layout.url);
    tui.message_field.render(frame, layout.message);

    let mut buttons = ButtonRow {
        focused: tui.focus.button(),
    };
    buttons.render(frame, layout.buttons);

    frame.render_widget(
        Span::styled(HELP, Style::default().fg(Color::DarkGray)),
        layout.help,
    );
}
