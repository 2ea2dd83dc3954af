//!
//! Canonical signature string construction
//!

use crate::request::SignableRequest;

/// Delimiter between the canonical string fields
///
/// Field values must not contain it; two different requests could otherwise
/// canonicalize identically. This is a caller contract, not validated here.
const DELIMITER: char = ',';

/// Join the four protected fields in fixed order
///
/// Pure and total. Missing fields are passed as empty strings rather than
/// omitted, so the four-field, three-delimiter shape never varies.
#[must_use]
pub fn construct(
    content_type: &str,
    content_checksum: &str,
    request_uri: &str,
    date: &str,
) -> String {
    let mut signature_string = String::with_capacity(
        content_type.len() + content_checksum.len() + request_uri.len() + date.len() + 3,
    );

    signature_string.push_str(content_type);
    signature_string.push(DELIMITER);
    signature_string.push_str(content_checksum);
    signature_string.push(DELIMITER);
    signature_string.push_str(request_uri);
    signature_string.push(DELIMITER);
    signature_string.push_str(date);

    signature_string
}

/// Derive the canonical string from the request's current state
///
/// Reads headers only; in particular this never writes a date header.
pub fn from_request<R>(request: &R) -> String
where
    R: SignableRequest,
{
    construct(
        request.content_type().unwrap_or_default(),
        request.content_checksum().unwrap_or_default(),
        request.request_uri(),
        request.date().unwrap_or_default(),
    )
}
