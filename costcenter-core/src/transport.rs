use std::sync::Arc;

use async_trait::async_trait;
use core::fmt;

use crate::CostCenterError;

/// HTTP method of a [`Request`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Method {
    /// `GET`
    #[default]
    Get,
    /// `POST`
    Post,
    /// `PUT`
    Put,
    /// `PATCH`
    Patch,
    /// `DELETE`
    Delete,
}

impl Method {
    /// Upper-case method token.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Patch => "PATCH",
            Self::Delete => "DELETE",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single HTTP request as seen by a [`Transport`].
///
/// `query` pairs are unencoded; the transport applies URL encoding.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Request {
    /// Method to issue.
    pub method: Method,
    /// Absolute target URL without the query string.
    pub url: String,
    /// Query parameters in order.
    pub query: Vec<(String, String)>,
    /// Optional request body.
    pub body: Option<Vec<u8>>,
}

impl Request {
    /// `GET` request against `url` with no query.
    pub fn get(url: impl Into<String>) -> Self {
        Self {
            method: Method::Get,
            url: url.into(),
            query: Vec::new(),
            body: None,
        }
    }

    /// Append a query parameter.
    #[must_use]
    pub fn query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }

    /// Value of the first query parameter named `key`.
    #[must_use]
    pub fn query_value(&self, key: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

/// Fully read HTTP response.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Response {
    /// Status code. Not interpreted by the fetch path.
    pub status: u16,
    /// Entire response body.
    pub body: Vec<u8>,
}

impl Response {
    /// `200` response with the given body.
    pub fn ok(body: impl Into<Vec<u8>>) -> Self {
        Self {
            status: 200,
            body: body.into(),
        }
    }

    /// Whether the status is in the 2xx range.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.status >= 200 && self.status < 300
    }
}

/// Integration point for issuing HTTP requests.
///
/// Implementations own credential handling: an API-key transport sets its
/// header, a signing client builds whatever auth it needs. Any body the
/// server returns, whatever its status, is a successful `Response`; only
/// connection and I/O failures are errors.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Perform `req` and read the full response body.
    async fn perform_request(&self, req: Request) -> Result<Response, CostCenterError>;
}

#[async_trait]
impl<T: Transport + ?Sized> Transport for Arc<T> {
    async fn perform_request(&self, req: Request) -> Result<Response, CostCenterError> {
        (**self).perform_request(req).await
    }
}

impl dyn Transport {
    /// Build a `Transport` from a closure (tests and custom integrations).
    pub fn from_fn<F>(f: F) -> Arc<dyn Transport>
    where
        F: Send + Sync + 'static + Fn(Request) -> Result<Response, CostCenterError>,
    {
        struct FnTransport<F>(F);
        #[async_trait]
        impl<F> Transport for FnTransport<F>
        where
            F: Send + Sync + 'static + Fn(Request) -> Result<Response, CostCenterError>,
        {
            async fn perform_request(&self, req: Request) -> Result<Response, CostCenterError> {
                (self.0)(req)
            }
        }
        Arc::new(FnTransport(f))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn from_fn_forwards_request() {
        let t = <dyn Transport>::from_fn(|req| {
            assert_eq!(req.method, Method::Get);
            assert_eq!(req.query_value("$filter"), Some("A eq 'b'"));
            Ok(Response::ok(req.url.into_bytes()))
        });
        let resp = t
            .perform_request(Request::get("https://x/y").query("$filter", "A eq 'b'"))
            .await
            .unwrap();
        assert!(resp.is_success());
        assert_eq!(resp.body, b"https://x/y");
    }
}
