//! Networking modules for the portal REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` implements the save and session collaborators over HTTP, `error`
//! is their failure type, and `types` defines the wire schema.

pub mod api;
pub mod error;
pub mod types;
