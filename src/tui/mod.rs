//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the form,
//! translates keyboard events into core `Action`s, and carries out the
//! `Effect`s that `update()` asks for.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Background Work
//!
//! Each send or transfer runs as its own tokio task and reports back with an
//! `Action` over an `mpsc` channel, drained by the event loop between frames.
//! Nothing is cancelled or de-duplicated: two quick submits make two
//! requests, and whichever answers last owns the banner.

mod component;
pub mod components;
pub mod event;
pub mod ui;

use log::{debug, info, warn};
use std::io::stdout;
use std::sync::{Arc, mpsc};
use std::time::Duration;

use crossterm::cursor::{SetCursorStyle, Show};
use crossterm::event::{DisableBracketedPaste, EnableBracketedPaste};
use crossterm::execute;

use crate::api::{Backend, HttpBackend, MessageForm};
use crate::core::action::{Action, Effect, update};
use crate::core::config::{CookieSource, ResolvedConfig};
use crate::core::cookies::{self, CookieScope, CookieStore, EnvCookieStore, FileCookieStore};
use crate::core::state::App;
use crate::core::validation::Field;
use crate::tui::component::EventHandler;
use crate::tui::components::{Button, FieldEvent, TextField};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

const MESSAGE_ROWS: u16 = 5;

/// Which control receives keyboard input. Tab order follows the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    MessageUrl,
    Message,
    Send,
    Transfer,
}

impl Focus {
    pub fn next(self) -> Self {
        match self {
            Focus::MessageUrl => Focus::Message,
            Focus::Message => Focus::Send,
            Focus::Send => Focus::Transfer,
            Focus::Transfer => Focus::MessageUrl,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Focus::MessageUrl => Focus::Transfer,
            Focus::Message => Focus::MessageUrl,
            Focus::Send => Focus::Message,
            Focus::Transfer => Focus::Send,
        }
    }

    pub fn button(self) -> Option<Button> {
        match self {
            Focus::Send => Some(Button::Send),
            Focus::Transfer => Some(Button::Transfer),
            _ => None,
        }
    }
}

impl From<Field> for Focus {
    fn from(field: Field) -> Self {
        match field {
            Field::MessageUrl => Focus::MessageUrl,
            Field::Message => Focus::Message,
        }
    }
}

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    pub focus: Focus,
    pub url_field: TextField,
    pub message_field: TextField,
    pub backend_url: String,
}

impl TuiState {
    pub fn new(backend_url: impl Into<String>) -> Self {
        Self {
            focus: Focus::MessageUrl, // User expects to type immediately
            url_field: TextField::single_line("Message URL", "https://wellfound.com/u/username"),
            message_field: TextField::multi_line("Message", "Enter your message here...", MESSAGE_ROWS),
            backend_url: backend_url.into(),
        }
    }

    /// Copies the controlled values and focus flags into the fields.
    pub fn sync_props(&mut self, app: &App) {
        self.url_field.value = app.form.message_url.clone();
        self.message_field.value = app.form.message.clone();
        self.url_field.focused = self.focus == Focus::MessageUrl;
        self.message_field.focused = self.focus == Focus::Message;

        let hint = |field: Field| {
            app.validation
                .filter(|v| v.field() == field)
                .map(|v| v.to_string())
        };
        self.url_field.hint = hint(Field::MessageUrl);
        self.message_field.hint = hint(Field::Message);
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(
            stdout(),
            EnableBracketedPaste,
            Show,                        // Show cursor for input editing
            SetCursorStyle::SteadyBlock, // Non-blinking: avoids blink timer reset from continuous redraws
        )?;
        info!("Terminal modes enabled (bracketed paste, steady block cursor)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableBracketedPaste, SetCursorStyle::DefaultUserShape);
    }
}

/// Calls the restore hook on drop, so every exit from `run` (including `?`)
/// hands the terminal back.
struct RestoreGuard(fn());

impl Drop for RestoreGuard {
    fn drop(&mut self) {
        (self.0)();
    }
}

/// Build the cookie store described by the resolved config.
pub fn build_cookie_store(config: &ResolvedConfig) -> Arc<dyn CookieStore> {
    match &config.cookie_source {
        CookieSource::File(path) => {
            info!("Reading cookies from file {}", path.display());
            Arc::new(FileCookieStore { path: path.clone() })
        }
        CookieSource::Env(var) => {
            info!("Reading cookies from ${}", var);
            Arc::new(EnvCookieStore { var: var.clone() })
        }
    }
}

/// Route one terminal event to the focused control and apply the result.
pub fn dispatch(app: &mut App, tui: &mut TuiState, event: &TuiEvent) -> Effect {
    tui.sync_props(app);

    match event {
        TuiEvent::Quit | TuiEvent::ForceQuit => return update(app, Action::Quit),
        TuiEvent::Submit => return submit(app, tui),
        TuiEvent::Transfer => return update(app, Action::TransferSession),
        TuiEvent::FocusNext => {
            tui.focus = tui.focus.next();
            return Effect::None;
        }
        TuiEvent::FocusPrev => {
            tui.focus = tui.focus.prev();
            return Effect::None;
        }
        TuiEvent::Resize => return Effect::None,
        _ => {}
    }

    let focus = tui.focus;
    match focus {
        Focus::MessageUrl => match tui.url_field.handle_event(event) {
            Some(FieldEvent::Changed(value)) => update(app, Action::SetMessageUrl(value)),
            Some(FieldEvent::Submit) => submit(app, tui),
            None => Effect::None,
        },
        Focus::Message => match tui.message_field.handle_event(event) {
            Some(FieldEvent::Changed(value)) => update(app, Action::SetMessage(value)),
            Some(FieldEvent::Submit) => submit(app, tui),
            None => Effect::None,
        },
        Focus::Send if is_press(event) => submit(app, tui),
        Focus::Transfer if is_press(event) => update(app, Action::TransferSession),
        _ => Effect::None,
    }
}

/// Enter or Space on a button.
fn is_press(event: &TuiEvent) -> bool {
    matches!(event, TuiEvent::Enter | TuiEvent::InputChar(' '))
}

/// Submit, moving focus to the offending field when validation blocks it.
fn submit(app: &mut App, tui: &mut TuiState) -> Effect {
    let effect = update(app, Action::Submit);
    if let Some(invalid) = app.validation {
        tui.focus = invalid.field().into();
    }
    effect
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let backend: Arc<dyn Backend> = Arc::new(HttpBackend::new(config.backend_url.clone()));
    let cookie_store = build_cookie_store(&config);
    let scope = config.cookie_scope.clone();

    let mut app = App::new();
    let mut tui = TuiState::new(config.backend_url.clone());

    let mut terminal = ratatui::init();
    let _restore_guard = RestoreGuard(ratatui::restore);
    let _terminal_mode_guard = TerminalModeGuard::new();

    // Channel for actions from background tasks
    let (tx, rx) = mpsc::channel();

    let mut needs_redraw = true; // Force first frame

    'outer: loop {
        if needs_redraw {
            terminal.draw(|f| ui::draw_ui(f, &app, &mut tui))?;
            needs_redraw = false;
        }

        // Short poll so background results show up promptly
        let first_event = poll_event_timeout(Duration::from_millis(100));
        if first_event.is_some() {
            needs_redraw = true;
        }

        // Process first event + drain ALL pending events before next draw
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            match dispatch(&mut app, &mut tui, &event) {
                Effect::Quit => break 'outer,
                Effect::SpawnSend(form) => spawn_send(backend.clone(), form, tx.clone()),
                Effect::SpawnTransfer => spawn_transfer(
                    backend.clone(),
                    cookie_store.clone(),
                    scope.clone(),
                    tx.clone(),
                ),
                Effect::None => {}
            }
        }

        // Handle background task results
        while let Ok(action) = rx.try_recv() {
            needs_redraw = true;
            debug!("Event loop received: {:?}", action);
            if update(&mut app, action) == Effect::Quit {
                break 'outer;
            }
        }
    }

    Ok(())
}

/// POST the form and turn the outcome into an action.
pub async fn perform_send(backend: &dyn Backend, form: MessageForm) -> Action {
    Action::SendFinished(backend.send_message(&form).await)
}

/// Harvest cookies, POST them, and turn the outcome into an action.
pub async fn perform_transfer(
    backend: &dyn Backend,
    store: &dyn CookieStore,
    scope: &CookieScope,
) -> Action {
    let cookies = match cookies::harvest(store, scope) {
        Ok(cookies) => cookies,
        Err(e) => return Action::TransferFinished(Err(e.to_string())),
    };
    let result = backend
        .set_cookies(&cookies)
        .await
        .map_err(|e| e.to_string());
    Action::TransferFinished(result)
}

fn spawn_send(backend: Arc<dyn Backend>, form: MessageForm, tx: mpsc::Sender<Action>) {
    info!("Spawning send request");
    tokio::spawn(async move {
        let action = perform_send(backend.as_ref(), form).await;
        if tx.send(action).is_err() {
            warn!("Failed to deliver send result: receiver dropped");
        }
    });
}

fn spawn_transfer(
    backend: Arc<dyn Backend>,
    store: Arc<dyn CookieStore>,
    scope: CookieScope,
    tx: mpsc::Sender<Action>,
) {
    info!("Spawning session transfer");
    tokio::spawn(async move {
        let action = perform_transfer(backend.as_ref(), store.as_ref(), &scope).await;
        if tx.send(action).is_err() {
            warn!("Failed to deliver transfer result: receiver dropped");
        }
    });
}
