//! Provider identifier type.

use std::fmt;

/// Error returned when parsing an invalid provider identifier.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid provider ID: {reason}")]
pub struct InvalidProviderId {
    reason: &'static str,
}

/// A 24-character provider object identifier (spot or subregion).
///
/// The provider issues identifiers as 12-byte object IDs rendered in
/// lowercase hex. This type guarantees that any `ProviderId` value is
/// well-formed by construction.
///
/// # Examples
///
/// ```
/// use surf_server::catalog::ProviderId;
///
/// let id = ProviderId::parse("5842041f4e65fad6a7708890").unwrap();
/// assert_eq!(id.as_str(), "5842041f4e65fad6a7708890");
///
/// // Uppercase hex is rejected
/// assert!(ProviderId::parse("5842041F4E65FAD6A7708890").is_err());
///
/// // Wrong length is rejected
/// assert!(ProviderId::parse("5842041f").is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct ProviderId([u8; 24]);

impl ProviderId {
    /// Parse a provider ID from a string.
    ///
    /// The input must be exactly 24 lowercase hex digits.
    pub fn parse(s: &str) -> Result<Self, InvalidProviderId> {
        let bytes: [u8; 24] = s.as_bytes().try_into().map_err(|_| InvalidProviderId {
            reason: "must be exactly 24 characters",
        })?;

        if !bytes
            .iter()
            .all(|b| b.is_ascii_digit() || (b'a'..=b'f').contains(b))
        {
            return Err(InvalidProviderId {
                reason: "must be lowercase hex digits",
            });
        }

        Ok(ProviderId(bytes))
    }

    /// Returns the ID as a string slice.
    pub fn as_str(&self) -> &str {
        // SAFETY: We only store ASCII hex digits
        std::str::from_utf8(&self.0).unwrap()
    }
}

impl fmt::Debug for ProviderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ProviderId({})", self.as_str())
    }
}

impl fmt::Display for ProviderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Roundtrip: parse then as_str returns the original
        #[test]
        fn roundtrip(s in "[0-9a-f]{24}") {
            let id = ProviderId::parse(&s).unwrap();
            prop_assert_eq!(id.as_str(), s.as_str());
        }

        /// Wrong-length strings are always rejected
        #[test]
        fn wrong_length_rejected(s in "[0-9a-f]{0,23}|[0-9a-f]{25,40}") {
            prop_assert!(ProviderId::parse(&s).is_err());
        }
    }
}
