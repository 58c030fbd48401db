//! Hearth desktop library
//!
//! This crate contains the desktop client's library surfaces used by the
//! executable in `src/main.rs`. Modules here are primarily application
//! glue, UI domains, and infrastructure helpers that are still evolving.
//!
//! Notes
//! - Public items are subject to change while the UI and domains stabilize.
//! - Most consumers should use the `hearth-desktop` binary; the library is
//!   exposed mainly to enable testing and internal reuse.

pub mod app;
pub mod common;
pub mod domains;
pub mod infra;
pub mod state;
pub mod subscriptions;
pub mod update;
pub mod view;
