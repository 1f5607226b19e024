//! Client-side state for the admin portal.
//!
//! DESIGN
//! ======
//! Each model is a plain value with synchronous transitions; async work goes
//! through the collaborator traits (`ContentSaver`, `SessionProvider`) so the
//! components only wrap these models in signals.

pub mod attachment;
pub mod categories;
pub mod content_form;
pub mod draft;
pub mod session;
pub mod user_menu;
