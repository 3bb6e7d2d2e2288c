//! HTTP surface: the chat, button, refresh and health endpoints.

mod app;
pub mod routes;

pub use app::{AppState, build_app};
