//! # Core Application Logic
//!
//! The message form's business logic.
//! It knows nothing about any specific UI technology or HTTP client.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • State (form, status) │
//!                    │  • Action (events)      │
//!                    │  • update() (reducer)   │
//!                    │  • cookie parsing       │
//!                    └───────────┬─────────────┘
//!                                │
//!                ┌───────────────┴───────────────┐
//!                ▼                               ▼
//!         ┌────────────┐                  ┌────────────┐
//!         │    TUI     │                  │    API     │
//!         │  Adapter   │ ── effects ───▶  │  (reqwest) │
//!         │ (ratatui)  │                  │            │
//!         └────────────┘                  └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`state`]: The `App` struct, form fields and status banner
//! - [`action`]: The `Action` enum and `update()`
//! - [`validation`]: Checks that gate a submit
//! - [`cookies`]: Cookie stores and descriptor parsing
//! - [`config`]: Config file, env and CLI resolution

pub mod action;
pub mod config;
pub mod cookies;
pub mod state;
pub mod validation;
