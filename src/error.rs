#![allow(missing_docs)]

use http::header::{InvalidHeaderName, InvalidHeaderValue};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Body checksum mismatch")]
    ChecksumMismatch,

    #[error("Date header outside the accepted clock skew window")]
    ClockSkewExceeded,

    #[error(transparent)]
    InvalidDateHeader(#[from] httpdate::Error),

    #[error(transparent)]
    InvalidHeaderName(#[from] InvalidHeaderName),

    #[error(transparent)]
    InvalidHeaderValue(#[from] InvalidHeaderValue),

    #[error("Malformed authorization header")]
    MalformedAuthorizationHeader,

    #[error("Authorization header missing")]
    MissingAuthorizationHeader,

    #[error("Signature mismatch")]
    SignatureMismatch,

    #[error("Unknown access ID")]
    UnknownAccessId,

    #[error("Request representation is missing required attributes")]
    UnsupportedRequest,
}
