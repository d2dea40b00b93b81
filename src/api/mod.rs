pub mod client;
pub mod types;

pub use client::{Backend, DEFAULT_BACKEND_URL, HttpBackend};
pub use types::{ApiError, MessageForm};
