use std::fmt;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// A password wrapper that automatically zeros memory on drop
///
/// Holds the form's password field (and nothing else sensitive) so the
/// plaintext does not linger in memory once the form state is replaced or
/// the app navigates away.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct Passphrase {
    data: String,
}

impl Passphrase {
    /// Create a new Passphrase from a string
    pub fn new(data: String) -> Self {
        Self { data }
    }

    /// Get a reference to the password as a string slice
    ///
    /// # Security Note
    /// The returned reference points to the same memory that will be
    /// zeroed on drop. Avoid storing it beyond the lifetime of the
    /// Passphrase.
    pub fn as_str(&self) -> &str {
        &self.data
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

impl Default for Passphrase {
    fn default() -> Self {
        Self::new(String::new())
    }
}

impl Clone for Passphrase {
    /// Both the original and the clone are zeroed on drop.
    fn clone(&self) -> Self {
        Self {
            data: self.data.clone(),
        }
    }
}

impl From<String> for Passphrase {
    fn from(data: String) -> Self {
        Self::new(data)
    }
}

impl From<&str> for Passphrase {
    fn from(data: &str) -> Self {
        Self::new(data.to_string())
    }
}

impl fmt::Debug for Passphrase {
    /// Debug implementation that doesn't expose the password
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Passphrase")
            .field("len", &self.len())
            .field("data", &"[REDACTED]")
            .finish()
    }
}

impl fmt::Display for Passphrase {
    /// Display implementation that doesn't expose the password
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[Passphrase: {} bytes]", self.len())
    }
}

impl PartialEq for Passphrase {
    fn eq(&self, other: &Self) -> bool {
        if self.len() != other.len() {
            return false;
        }
        // Byte-by-byte rather than string comparison; not truly
        // constant-time but avoids the obvious short-circuits.
        self.data.as_bytes() == other.data.as_bytes()
    }
}

impl Eq for Passphrase {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_and_basic_operations() {
        let passphrase = Passphrase::new("hunter2hunter".to_string());
        assert_eq!(passphrase.as_str(), "hunter2hunter");
        assert_eq!(passphrase.len(), 13);
        assert!(!passphrase.is_empty());
    }

    #[test]
    fn empty_passphrase() {
        let passphrase = Passphrase::default();
        assert!(passphrase.is_empty());
        assert_eq!(passphrase.len(), 0);
    }

    #[test]
    fn clone_preserves_contents() {
        let original = Passphrase::new("hunter2".to_string());
        let cloned = original.clone();
        assert_eq!(original, cloned);
    }

    #[test]
    fn debug_format_redacts() {
        let passphrase = Passphrase::from("secret");
        let debug_str = format!("{:?}", passphrase);
        assert!(!debug_str.contains("secret"));
        assert!(debug_str.contains("REDACTED"));
    }

    #[test]
    fn display_format_redacts() {
        let passphrase = Passphrase::from("secret");
        let display_str = format!("{}", passphrase);
        assert!(!display_str.contains("secret"));
        assert!(display_str.contains("6 bytes"));
    }
}
