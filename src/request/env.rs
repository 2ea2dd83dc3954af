//!
//! Adapter for CGI/Rack-style environment maps
//!

use super::SignableRequest;
use crate::{Error, Result};
use std::collections::HashMap;

const REQUEST_METHOD: &str = "REQUEST_METHOD";
const REQUEST_URI: &str = "REQUEST_URI";

/// Server-side request reconstructed from an environment map
///
/// Headers live under `HTTP_`-prefixed upper-snake keys next to the
/// `REQUEST_METHOD`/`REQUEST_URI`/`CONTENT_TYPE` entries, the way CGI-style
/// servers hand them to applications.
#[derive(Debug)]
pub struct EnvRequest {
    env: HashMap<String, String>,
    body: Option<Vec<u8>>,
}

impl EnvRequest {
    /// Wrap an environment map and the request body that arrived with it
    ///
    /// `body` is `None` for servers that hand the body over as a stream the
    /// application has already consumed; such requests are exempt from
    /// checksumming. A map without `REQUEST_METHOD` and `REQUEST_URI`
    /// entries isn't a request we can make sense of and is rejected here,
    /// never from the accessors.
    pub fn new(mut env: HashMap<String, String>, body: Option<Vec<u8>>) -> Result<Self> {
        if !env.contains_key(REQUEST_URI) {
            return Err(Error::UnsupportedRequest);
        }

        match env.get_mut(REQUEST_METHOD) {
            Some(method) => method.make_ascii_uppercase(),
            None => return Err(Error::UnsupportedRequest),
        }

        Ok(Self { env, body })
    }

    /// The environment map, including any headers written during signing
    #[must_use]
    pub fn into_env(self) -> HashMap<String, String> {
        self.env
    }
}

impl SignableRequest for EnvRequest {
    fn read_header(&self, name: &str) -> Option<&str> {
        self.env.get(name).map(String::as_str)
    }

    fn set_header(&mut self, name: &str, value: &str) -> Result<()> {
        self.env.insert(env_key(name), value.to_string());
        Ok(())
    }

    fn method(&self) -> &str {
        // Presence checked in `new`
        self.env[REQUEST_METHOD].as_str()
    }

    fn body(&self) -> Option<&[u8]> {
        self.body.as_deref()
    }

    fn request_uri(&self) -> &str {
        // Presence checked in `new`
        self.env[REQUEST_URI].as_str()
    }
}

/// `Content-Checksum` -> `HTTP_CONTENT_CHECKSUM`
fn env_key(name: &str) -> String {
    let mut key = String::with_capacity(name.len() + 5);
    key.push_str("HTTP_");
    for c in name.chars() {
        key.push(match c {
            '-' => '_',
            c => c.to_ascii_uppercase(),
        });
    }
    key
}

#[cfg(test)]
mod test {
    use super::EnvRequest;
    use crate::{request::SignableRequest, Error};
    use std::collections::HashMap;

    fn env() -> HashMap<String, String> {
        let mut env = HashMap::new();
        env.insert("REQUEST_METHOD".to_string(), "put".to_string());
        env.insert("REQUEST_URI".to_string(), "/resource.xml?foo=bar".to_string());
        env.insert("CONTENT_TYPE".to_string(), "text/plain".to_string());
        env.insert(
            "HTTP_DATE".to_string(),
            "Mon, 23 Jan 1984 03:29:56 GMT".to_string(),
        );
        env
    }

    #[test]
    fn rejects_maps_without_request_attributes() {
        let error = EnvRequest::new(HashMap::new(), None).unwrap_err();
        assert!(matches!(error, Error::UnsupportedRequest));
    }

    #[test]
    fn method_is_uppercased() {
        let request = EnvRequest::new(env(), None).unwrap();
        assert_eq!(request.method(), "PUT");
        assert!(request.is_write_method());
    }

    #[test]
    fn headers_resolve_through_env_spellings() {
        let request = EnvRequest::new(env(), None).unwrap();
        assert_eq!(request.content_type(), Some("text/plain"));
        assert_eq!(request.date(), Some("Mon, 23 Jan 1984 03:29:56 GMT"));
        assert_eq!(request.content_checksum(), None);
    }

    #[test]
    fn set_header_uses_the_env_convention() {
        let mut request = EnvRequest::new(env(), None).unwrap();
        request.set_header("Content-Checksum", "abc").unwrap();

        assert_eq!(request.read_header("HTTP_CONTENT_CHECKSUM"), Some("abc"));
        assert_eq!(request.content_checksum(), Some("abc"));
    }

    #[test]
    fn missing_body_is_reported_as_unreadable() {
        let request = EnvRequest::new(env(), None).unwrap();
        assert!(request.body().is_none());

        let request = EnvRequest::new(env(), Some(Vec::new())).unwrap();
        assert_eq!(request.body(), Some(&[] as &[u8]));
    }
}
