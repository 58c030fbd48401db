//! Cross-domain shared types.

pub mod messages;
