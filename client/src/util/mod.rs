//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser concerns (selection, file reading) from
//! component logic; their pure parts are unit tested without a browser.

pub mod editor_dom;
pub mod file_input;
pub mod toolbar;
