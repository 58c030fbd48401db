//! Local form validation performed before any network dispatch.

use std::sync::LazyLock;

use regex::Regex;

/// Address shape the form accepts: a local part, an `@`, and a domain
/// containing at least one dot, with no embedded whitespace anywhere.
/// Anything stricter is the service's call, not ours.
static EMAIL_SHAPE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$")
        .expect("email shape pattern is valid")
});

/// Check whether `email` looks like a deliverable address.
pub fn email_is_valid(email: &str) -> bool {
    EMAIL_SHAPE.is_match(email)
}
