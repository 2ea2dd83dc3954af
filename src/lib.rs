//!
//! Shared-secret HMAC authentication for HTTP requests
//!
//! Signs requests with an `Authorization: HMAC <access id>:<signature>`
//! header and verifies them on the receiving side, independently of which
//! HTTP library produced the request object. Only symmetric signing is
//! supported (aka. no RSA and such).
//!

#![forbid(rust_2018_idioms, unsafe_code)]
#![deny(missing_docs)]

use derive_builder::Builder;
use std::{
    fmt,
    time::{Duration, SystemTime},
};
use tracing::{debug, instrument};

pub use crate::error::Error;
pub use crate::header::AuthorizationHeader;
pub use crate::request::{EnvRequest, SignableRequest};

mod error;

pub mod crypto;
pub mod digest;
pub mod header;
pub mod request;
pub mod signature_string;

type Result<T, E = Error> = std::result::Result<T, E>;

/// Scheme token in front of the credentials in the authorization header
pub const SCHEME: &str = "HMAC";

/// Shared-secret credentials identifying a client
///
/// Supplied per call by the caller's credential store; the engine never
/// persists them anywhere.
#[derive(Clone, Copy)]
pub struct Credentials<'a> {
    access_id: &'a str,
    secret_key: &'a [u8],
}

impl<'a> Credentials<'a> {
    /// Bundle an access ID with its secret key
    #[must_use]
    pub fn new(access_id: &'a str, secret_key: &'a [u8]) -> Self {
        Self {
            access_id,
            secret_key,
        }
    }

    /// Access ID half of the credentials
    #[must_use]
    pub fn access_id(&self) -> &str {
        self.access_id
    }
}

impl fmt::Debug for Credentials<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("access_id", &self.access_id)
            .field("secret_key", &"[redacted]")
            .finish()
    }
}

/// Sign a request in place
///
/// Sets the date header if one isn't already present, populates the body
/// checksum for write-method requests, and writes the authorization header.
/// The request object stays caller-owned; header writes are the only
/// side effect.
#[instrument(skip_all)]
pub fn sign<R>(request: &mut R, credentials: &Credentials<'_>) -> Result<()>
where
    R: SignableRequest,
{
    if request.date().is_none() {
        let now = httpdate::fmt_http_date(SystemTime::now());
        request.set_header(request::DATE, &now)?;
    }

    digest::populate(request)?;

    let signature_string = signature_string::from_request(request);
    let signature = crypto::sign(signature_string.as_bytes(), credentials.secret_key);

    let header = AuthorizationHeader {
        scheme: SCHEME,
        access_id: credentials.access_id,
        signature: &signature,
    };

    request.set_header(request::AUTHORIZATION, &header.serialise())
}

/// Verifier for already-signed requests
///
/// Stateless across calls; one instance may verify any number of requests
/// concurrently.
#[derive(Builder, Clone, Default)]
#[builder(pattern = "owned")]
pub struct Verifier {
    /// Maximum accepted difference between the date header and the
    /// verifier's clock, in either direction
    ///
    /// Skew checking is disabled when unset.
    #[builder(default, setter(strip_option))]
    clock_skew: Option<Duration>,
}

impl Verifier {
    /// Return a builder for the verifier
    #[must_use]
    pub fn builder() -> VerifierBuilder {
        VerifierBuilder::default()
    }

    /// Check a signed request against the caller's credentials
    ///
    /// Every failure is reported as an [`Error`] value; the request is
    /// never mutated. When several checks would fail, the strongest one is
    /// reported: a signature mismatch wins over a checksum mismatch, which
    /// wins over clock skew.
    #[instrument(skip_all)]
    pub fn verify<R>(&self, request: &R, credentials: &Credentials<'_>) -> Result<()>
    where
        R: SignableRequest,
    {
        let Some(raw_header) = request.authorization() else {
            debug!("authorization header missing");
            return Err(Error::MissingAuthorizationHeader);
        };
        let header = AuthorizationHeader::parse(raw_header)?;

        if header.scheme != SCHEME {
            debug!(scheme = header.scheme, "foreign authorization scheme");
            return Err(Error::MalformedAuthorizationHeader);
        }

        if header.access_id != credentials.access_id {
            debug!("access ID does not match the supplied credentials");
            return Err(Error::UnknownAccessId);
        }

        let signature_string = signature_string::from_request(request);
        crypto::verify(
            signature_string.as_bytes(),
            header.signature,
            credentials.secret_key,
        )?;

        if digest::mismatch(request) {
            debug!("body checksum mismatch");
            return Err(Error::ChecksumMismatch);
        }

        if let Some(tolerance) = self.clock_skew {
            check_clock_skew(request, tolerance)?;
        }

        Ok(())
    }
}

fn check_clock_skew<R>(request: &R, tolerance: Duration) -> Result<()>
where
    R: SignableRequest,
{
    let timestamp = httpdate::parse_http_date(request.date().unwrap_or_default())?;

    let skew = match SystemTime::now().duration_since(timestamp) {
        Ok(elapsed) => elapsed,
        // The date header lies in the future
        Err(error) => error.duration(),
    };

    if skew > tolerance {
        debug!("date header outside the accepted skew window");
        return Err(Error::ClockSkewExceeded);
    }

    Ok(())
}
