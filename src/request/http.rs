//!
//! Adapters for the [`http`] crate's request types
//!

use super::SignableRequest;
use crate::Result;
use http::{
    header::{HeaderName, HeaderValue},
    request::Parts,
    uri::{PathAndQuery, Uri},
    HeaderMap, Request,
};

fn read<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers.get(name).and_then(|value| value.to_str().ok())
}

fn write(headers: &mut HeaderMap, name: &str, value: &str) -> Result<()> {
    let name = HeaderName::from_bytes(name.as_bytes())?;
    headers.insert(name, HeaderValue::from_str(value)?);
    Ok(())
}

fn request_uri(uri: &Uri) -> &str {
    uri.path_and_query()
        .map_or_else(|| uri.path(), PathAndQuery::as_str)
}

impl<B> SignableRequest for Request<B>
where
    B: AsRef<[u8]>,
{
    fn read_header(&self, name: &str) -> Option<&str> {
        read(self.headers(), name)
    }

    fn set_header(&mut self, name: &str, value: &str) -> Result<()> {
        write(self.headers_mut(), name, value)
    }

    fn method(&self) -> &str {
        Request::method(self).as_str()
    }

    fn body(&self) -> Option<&[u8]> {
        Some(Request::body(self).as_ref())
    }

    fn request_uri(&self) -> &str {
        request_uri(self.uri())
    }
}

/// Headers-only view of a request
///
/// The body has usually already been handed off to whatever consumes it, so
/// it cannot be introspected here; such requests are exempt from
/// checksumming.
impl SignableRequest for Parts {
    fn read_header(&self, name: &str) -> Option<&str> {
        read(&self.headers, name)
    }

    fn set_header(&mut self, name: &str, value: &str) -> Result<()> {
        write(&mut self.headers, name, value)
    }

    fn method(&self) -> &str {
        self.method.as_str()
    }

    fn body(&self) -> Option<&[u8]> {
        None
    }

    fn request_uri(&self) -> &str {
        request_uri(&self.uri)
    }
}
