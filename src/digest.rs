//!
//! Body checksum computation and tamper detection
//!

use crate::{
    request::{self, SignableRequest},
    Result,
};
use sha2::{Digest, Sha256};
use subtle::ConstantTimeEq;

/// Base64 text of the SHA-256 digest of the payload
///
/// The empty payload digests like any other; it is not skipped.
#[must_use]
pub fn digest(payload: &[u8]) -> String {
    let hash = Sha256::digest(payload);
    base64_simd::STANDARD.encode_to_string(hash)
}

/// Write the checksum header for requests that carry a checksummable body
///
/// No-op for non-write methods and for representations that cannot expose
/// their body.
pub fn populate<R>(request: &mut R) -> Result<()>
where
    R: SignableRequest,
{
    if !request.is_write_method() {
        return Ok(());
    }

    let checksum = match request.body() {
        Some(body) => digest(body),
        None => return Ok(()),
    };

    request.set_header(request::CONTENT_CHECKSUM, &checksum)
}

/// Whether the checksum header disagrees with the current body
///
/// Non-write methods never mismatch; neither do representations without a
/// readable body. An absent header only mismatches when the body is
/// non-empty. The comparison runs in constant time.
#[must_use]
pub fn mismatch<R>(request: &R) -> bool
where
    R: SignableRequest,
{
    if !request.is_write_method() {
        return false;
    }

    let Some(body) = request.body() else {
        return false;
    };

    let Some(claimed) = request.content_checksum() else {
        return !body.is_empty();
    };

    let computed = digest(body);
    computed.as_bytes().ct_eq(claimed.as_bytes()).unwrap_u8() == 0
}

#[cfg(test)]
mod test {
    use crate::request::SignableRequest;
    use http::{Method, Request, Uri};

    // base64(sha256(""))
    const EMPTY_CHECKSUM: &str = "47DEQpj8HBSa+/TImW+5JCeuQeRkm5NMpJWZG3hSuFU=";

    fn request(method: Method, body: Vec<u8>) -> Request<Vec<u8>> {
        Request::builder()
            .method(method)
            .uri(Uri::from_static("/resource.xml"))
            .body(body)
            .unwrap()
    }

    #[test]
    fn empty_payload_still_digests() {
        assert_eq!(super::digest(b""), EMPTY_CHECKSUM);
    }

    #[test]
    fn populate_writes_the_checksum_header() {
        let mut request = request(Method::PUT, b"1234".to_vec());
        super::populate(&mut request).unwrap();

        assert_eq!(request.content_checksum(), Some(&*super::digest(b"1234")));
        assert!(!super::mismatch(&request));
    }

    #[test]
    fn populate_skips_read_methods() {
        let mut request = request(Method::GET, b"1234".to_vec());
        super::populate(&mut request).unwrap();

        assert_eq!(request.content_checksum(), None);
    }

    #[test]
    fn altered_body_mismatches() {
        let mut request = request(Method::PUT, b"1234".to_vec());
        super::populate(&mut request).unwrap();

        request.body_mut()[0] ^= 1;
        assert!(super::mismatch(&request));
    }

    #[test]
    fn read_methods_never_mismatch() {
        let request = request(Method::GET, b"anything at all".to_vec());
        assert!(!super::mismatch(&request));
    }

    #[test]
    fn absent_header_with_empty_body_is_fine() {
        let request = request(Method::PUT, Vec::new());
        assert!(!super::mismatch(&request));
    }

    #[test]
    fn absent_header_with_body_mismatches() {
        let request = request(Method::PUT, b"1234".to_vec());
        assert!(super::mismatch(&request));
    }

    #[test]
    fn unreadable_body_never_mismatches() {
        let (mut parts, _body) = request(Method::PUT, b"1234".to_vec()).into_parts();
        assert!(!super::mismatch(&parts));

        // And populating is a no-op rather than an error
        super::populate(&mut parts).unwrap();
        assert_eq!(parts.content_checksum(), None);
    }
}
