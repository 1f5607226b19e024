//! Rich-text document model for the portal's news editor.
//!
//! This crate is compiled both natively (SSR, tests) and to WebAssembly. It
//! owns the body of a news article as an explicit value: a list of blocks, each
//! holding styled text runs. Every editing and formatting operation is a pure
//! function that takes a document plus a selection and returns a new
//! [`doc::Edit`]; the UI layer only renders documents and reports structured
//! edit events.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`doc`] | Blocks, runs, positions, ranges, and text edits |
//! | [`style`] | Inline styles: font size, colour, link target |
//! | [`format`] | Toolbar commands and the formatting transforms behind them |
//! | [`html`] | HTML rendering for storage and for the editing surface |
//! | [`parse`] | Lenient HTML import for stored bodies |
//! | [`consts`] | Shared constants (font-size range, blocked link schemes) |

pub mod consts;
pub mod doc;
pub mod format;
pub mod html;
pub mod parse;
pub mod style;

pub use doc::{Block, BlockKind, Document, Edit, Position, Range, Run};
pub use format::Command;
pub use style::{Color, FontSize, LinkTarget, Style, StyleError};
