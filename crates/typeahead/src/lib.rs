//! Typeahead picker core for Lazer.
//!
//! The host screen hands a [`TypeaheadSelector`] its items and current
//! selection, forwards text and checkbox input to it, and listens for the
//! one terminal [`SelectionEvent`] fired by confirm or cancel.
//!
//! This crate provides:
//! - The [`SelectionSession`] single-select state
//! - Callback and channel listeners for picker events
//! - Stale-result protection for searches run off the event path
//! - WASM bindings for the web front-end

mod error;
mod events;
mod selector;
mod session;

#[cfg(feature = "wasm")]
mod wasm;

pub use error::{Result, TypeaheadError};
pub use events::{Listeners, SelectionEvent};
pub use selector::{QueryTicket, SelectorOptions, TypeaheadSelector, DEFAULT_TITLE};
pub use session::SelectionSession;

pub use lazer_search::Item;
