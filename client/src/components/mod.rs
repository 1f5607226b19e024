//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the content modal and the header menu. They hold state
//! models from `state` in signals passed down as props and forward every user
//! event to them.

pub mod admin_modal;
pub mod category_selector;
pub mod form_dialog;
pub mod rich_text_editor;
pub mod tag_editor;
pub mod user_menu;
