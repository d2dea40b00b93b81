//! # TUI Components
//!
//! The pieces the message form is built from.
//!
//! ## Component Architecture
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! - `StatusBanner`: outcome of the last action, hidden when empty
//! - `ButtonRow`: the Send and Transfer buttons
//!
//! ### Controlled Components (Event-Driven)
//!
//! - `TextField`: renders the value it is given and emits the edited value
//!   back as an event; the app state stays the single source of truth
//!
//! ## Props-Based Data Flow
//!
//! Components receive external data as props (struct fields synced from
//! `App` before each frame), never by reaching into global state.
//!
//! ```rust,ignore
//! tui.url_field.value = app.form.message_url.clone();
//! tui.url_field.render(frame, url_area);
//! ```

pub mod button_row;
pub mod status_banner;
pub mod text_field;

pub use button_row::{Button, ButtonRow};
pub use status_banner::{BannerVariant, StatusBanner};
pub use text_field::{FieldEvent, TextField};
