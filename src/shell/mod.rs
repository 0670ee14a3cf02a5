//! Interactive shell module
//!
//! The single-page UI as an explicit state machine.
//!
//! # Overview
//!
//! A page shows one [`ShellState`]. Each button press is a [`ShellAction`];
//! [`Shell::handle`] turns the current state and an action into the next
//! state, and [`render_page`] turns a state into HTML. Nothing is kept
//! between requests, so the HTTP layer always starts from
//! [`ShellState::Idle`].

mod render;
mod state;

pub use render::{escape_html, render_page, FormValues};
pub use state::{Shell, ShellAction, ShellState};
