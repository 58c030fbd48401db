//! Credential-handling primitives for the auth domain.

pub mod passphrase;

pub use passphrase::Passphrase;
