//!
//! Uniform capability set over heterogeneous HTTP request representations
//!
//! Every supported request shape is normalized into [`SignableRequest`];
//! the signing and verification code only ever talks to that trait.
//!

use crate::Result;

mod env;
mod http;

pub use self::env::EnvRequest;

/// Header the signature is written to
pub const AUTHORIZATION: &str = "Authorization";

/// Header the body checksum is written to
pub const CONTENT_CHECKSUM: &str = "Content-Checksum";

/// Header the signing timestamp is written to
pub const DATE: &str = "Date";

// Accepted spellings per logical header, one per naming convention used by
// the supported representations. Ordered; the first present value wins.
const AUTHORIZATION_CANDIDATES: &[&str] =
    &["Authorization", "AUTHORIZATION", "HTTP_AUTHORIZATION"];
const CONTENT_CHECKSUM_CANDIDATES: &[&str] = &[
    "Content-Checksum",
    "CONTENT-CHECKSUM",
    "CONTENT_CHECKSUM",
    "HTTP_CONTENT_CHECKSUM",
];
const CONTENT_TYPE_CANDIDATES: &[&str] = &[
    "Content-Type",
    "CONTENT-TYPE",
    "CONTENT_TYPE",
    "HTTP_CONTENT_TYPE",
];
const DATE_CANDIDATES: &[&str] = &["Date", "DATE", "HTTP_DATE"];

const WRITE_METHODS: &[&str] = &["POST", "PUT"];

/// View over a caller-owned request object
///
/// Borrowed for the duration of a single sign or verify call; header writes
/// are the only mutation. Nothing is cached between calls.
pub trait SignableRequest {
    /// Read a header under exactly the given name
    ///
    /// Absence (and a value the representation cannot expose as a string)
    /// is `None`, never an error.
    fn read_header(&self, name: &str) -> Option<&str>;

    /// Write a header using the representation's own naming convention
    ///
    /// For the authorization and date headers the write is observable
    /// through [`read_header`](Self::read_header) afterwards.
    fn set_header(&mut self, name: &str, value: &str) -> Result<()>;

    /// Uppercase HTTP verb
    fn method(&self) -> &str;

    /// Request body, if the representation can expose one
    ///
    /// `None` opts the request out of checksumming entirely; an empty slice
    /// is a present-but-empty body. The body is read at most once per
    /// operation.
    fn body(&self) -> Option<&[u8]>;

    /// Path plus query string, formatted exactly as the underlying object
    /// exposes it
    fn request_uri(&self) -> &str;

    /// Try an ordered list of header spellings, returning the first present
    /// value
    fn find_header(&self, candidates: &[&str]) -> Option<&str> {
        candidates.iter().find_map(|name| self.read_header(name))
    }

    /// Whether the method carries a body worth checksumming (POST or PUT)
    fn is_write_method(&self) -> bool {
        WRITE_METHODS.contains(&self.method())
    }

    /// Value of the content type header
    fn content_type(&self) -> Option<&str> {
        self.find_header(CONTENT_TYPE_CANDIDATES)
    }

    /// Value of the body checksum header
    fn content_checksum(&self) -> Option<&str> {
        self.find_header(CONTENT_CHECKSUM_CANDIDATES)
    }

    /// Value of the date header
    fn date(&self) -> Option<&str> {
        self.find_header(DATE_CANDIDATES)
    }

    /// Value of the authorization header
    fn authorization(&self) -> Option<&str> {
        self.find_header(AUTHORIZATION_CANDIDATES)
    }
}
