//!
//! Keyed digest operations over the canonical string
//!

use crate::{Error, Result};
use ring::hmac;

/// Sign the payload with the shared secret and encode the tag in Base64
///
/// The encoding carries no trailing line separator.
#[must_use]
pub fn sign(payload: &[u8], secret_key: &[u8]) -> String {
    let key = hmac::Key::new(hmac::HMAC_SHA256, secret_key);
    let tag = hmac::sign(&key, payload);

    base64_simd::STANDARD.encode_to_string(tag)
}

/// Verify that the payload corresponds with the claimed signature
///
/// Recomputes the tag under the secret key and compares through
/// [`hmac::verify`], which does not shortcut on the first differing byte.
pub fn verify(payload: &[u8], encoded_signature: &str, secret_key: &[u8]) -> Result<()> {
    let signature = base64_simd::STANDARD
        .decode_to_vec(encoded_signature)
        .map_err(|_| Error::MalformedAuthorizationHeader)?;

    let key = hmac::Key::new(hmac::HMAC_SHA256, secret_key);
    hmac::verify(&key, payload, &signature).map_err(|_| Error::SignatureMismatch)
}
