//!
//! Authorization header wire format
//!
//! `<scheme> <access id>:<signature>` — the access id may itself contain
//! spaces, and the Base64 signature never contains a colon, so the value
//! splits on the first space and the last colon.
//!

use crate::{Error, Result};
use std::fmt::Write;

/// Parsed representation of the authorization header value
#[derive(Debug, Eq, PartialEq)]
pub struct AuthorizationHeader<'a> {
    /// Scheme token in front of the credentials
    pub scheme: &'a str,

    /// Access ID the signature claims to originate from
    pub access_id: &'a str,

    /// Base64 text of the signature
    pub signature: &'a str,
}

impl<'a> AuthorizationHeader<'a> {
    /// Parse a raw header value
    ///
    /// A missing scheme or colon, or an empty field, is a malformed-header
    /// error, never a panic.
    pub fn parse(raw: &'a str) -> Result<Self> {
        let (scheme, credentials) = raw
            .split_once(' ')
            .ok_or(Error::MalformedAuthorizationHeader)?;
        let (access_id, signature) = credentials
            .rsplit_once(':')
            .ok_or(Error::MalformedAuthorizationHeader)?;

        if scheme.is_empty() || access_id.is_empty() || signature.is_empty() {
            return Err(Error::MalformedAuthorizationHeader);
        }

        Ok(Self {
            scheme,
            access_id,
            signature,
        })
    }

    /// Serialise into the wire representation
    #[must_use]
    pub fn serialise(&self) -> String {
        let mut buffer = String::new();
        let _ = write!(
            buffer,
            "{} {}:{}",
            self.scheme, self.access_id, self.signature
        );

        buffer
    }
}

#[cfg(test)]
mod test {
    use super::AuthorizationHeader;
    use crate::Error;
    use proptest::proptest;

    #[test]
    fn round_trip() {
        let header = AuthorizationHeader {
            scheme: "HMAC",
            access_id: "some access id",
            signature: "c29tZSBzaWduYXR1cmU=",
        };

        let raw = header.serialise();
        assert_eq!(raw, "HMAC some access id:c29tZSBzaWduYXR1cmU=");
        assert_eq!(AuthorizationHeader::parse(&raw).unwrap(), header);
    }

    #[test]
    fn access_id_may_contain_spaces() {
        let header = AuthorizationHeader::parse("HMAC some access id:c2ln").unwrap();

        assert_eq!(header.scheme, "HMAC");
        assert_eq!(header.access_id, "some access id");
        assert_eq!(header.signature, "c2ln");
    }

    #[test]
    fn missing_pieces_are_malformed() {
        for raw in ["", "HMAC", "HMAC id-without-signature", "id:c2ln"] {
            let error = AuthorizationHeader::parse(raw).unwrap_err();
            assert!(matches!(error, Error::MalformedAuthorizationHeader), "{raw:?}");
        }
    }

    #[test]
    fn empty_fields_are_malformed() {
        for raw in ["HMAC :c2ln", "HMAC id:", " id:c2ln"] {
            let error = AuthorizationHeader::parse(raw).unwrap_err();
            assert!(matches!(error, Error::MalformedAuthorizationHeader), "{raw:?}");
        }
    }

    proptest! {
        #[test]
        fn parse_never_panics(input: String) {
            let _ = AuthorizationHeader::parse(&input);
        }
    }
}
