use std::error::Error as _;
use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use costcenter_core::{CostCenterError, Method, Request, Response, Transport};
use reqwest::header::ACCEPT;

/// Header carrying the API Business Hub key.
pub const API_KEY_HEADER: &str = "APIKey";

/// Delegated request signing.
///
/// A signer receives the request after the method, URL, query and `Accept`
/// header are set and owns every authentication header.
pub trait RequestSigner: Send + Sync {
    /// Add authentication to `req`.
    ///
    /// # Errors
    /// Returns an error if credentials cannot be produced; the request is
    /// then not sent.
    fn sign(
        &self,
        req: reqwest::RequestBuilder,
    ) -> Result<reqwest::RequestBuilder, CostCenterError>;
}

impl dyn RequestSigner {
    /// Build a signer from a closure.
    pub fn from_fn<F>(f: F) -> Arc<dyn RequestSigner>
    where
        F: Send
            + Sync
            + 'static
            + Fn(reqwest::RequestBuilder) -> Result<reqwest::RequestBuilder, CostCenterError>,
    {
        struct FnSigner<F>(F);
        impl<F> RequestSigner for FnSigner<F>
        where
            F: Send
                + Sync
                + 'static
                + Fn(reqwest::RequestBuilder) -> Result<reqwest::RequestBuilder, CostCenterError>,
        {
            fn sign(
                &self,
                req: reqwest::RequestBuilder,
            ) -> Result<reqwest::RequestBuilder, CostCenterError> {
                (self.0)(req)
            }
        }
        Arc::new(FnSigner(f))
    }
}

/// How requests are authenticated; chosen once when the transport is built.
#[derive(Clone)]
pub enum Credential {
    /// Opaque API key sent in the `APIKey` header.
    ApiKey(String),
    /// A signing collaborator that builds all auth headers itself.
    Signer(Arc<dyn RequestSigner>),
}

impl Credential {
    /// API-key credential.
    pub fn api_key(key: impl Into<String>) -> Self {
        Self::ApiKey(key.into())
    }

    /// Read an API key from the environment variable `var`.
    ///
    /// # Errors
    /// Returns `Config` if the variable is unset, not unicode, or empty.
    pub fn api_key_from_env(var: &str) -> Result<Self, CostCenterError> {
        match std::env::var(var) {
            Ok(v) if !v.trim().is_empty() => Ok(Self::ApiKey(v.trim().to_string())),
            Ok(_) => Err(CostCenterError::Config(format!("{var} is empty"))),
            Err(e) => Err(CostCenterError::Config(format!("{var}: {e}"))),
        }
    }

    fn apply(
        &self,
        req: reqwest::RequestBuilder,
    ) -> Result<reqwest::RequestBuilder, CostCenterError> {
        match self {
            Self::ApiKey(key) => Ok(req.header(API_KEY_HEADER, key)),
            Self::Signer(signer) => signer.sign(req),
        }
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ApiKey(_) => f.write_str("Credential::ApiKey(<redacted>)"),
            Self::Signer(_) => f.write_str("Credential::Signer(..)"),
        }
    }
}

/// `reqwest`-backed [`Transport`].
///
/// `reqwest::Client` pools connections and is cheap to clone, so one
/// transport can serve every branch concurrently.
#[derive(Clone, Debug)]
pub struct ReqwestTransport {
    http: reqwest::Client,
    credential: Credential,
}

impl ReqwestTransport {
    /// Transport with a default `reqwest::Client`.
    #[must_use]
    pub fn new(credential: Credential) -> Self {
        Self::with_client(reqwest::Client::new(), credential)
    }

    /// Transport reusing an existing `reqwest::Client`.
    #[must_use]
    pub const fn with_client(http: reqwest::Client, credential: Credential) -> Self {
        Self { http, credential }
    }
}

const fn to_reqwest(method: Method) -> reqwest::Method {
    match method {
        Method::Get => reqwest::Method::GET,
        Method::Post => reqwest::Method::POST,
        Method::Put => reqwest::Method::PUT,
        Method::Patch => reqwest::Method::PATCH,
        Method::Delete => reqwest::Method::DELETE,
    }
}

/// `reqwest::Error` with its source chain, e.g. the underlying connect error.
fn describe(err: &reqwest::Error) -> String {
    let mut out = err.to_string();
    let mut source = err.source();
    while let Some(inner) = source {
        out.push_str(": ");
        out.push_str(&inner.to_string());
        source = inner.source();
    }
    out
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn perform_request(&self, req: Request) -> Result<Response, CostCenterError> {
        let mut builder = self
            .http
            .request(to_reqwest(req.method), req.url.as_str())
            .header(ACCEPT, "application/json");
        if !req.query.is_empty() {
            builder = builder.query(&req.query);
        }
        if let Some(body) = req.body {
            builder = builder.body(body);
        }
        let builder = self.credential.apply(builder)?;

        let resp = builder
            .send()
            .await
            .map_err(|e| CostCenterError::Transport(describe(&e)))?;
        let status = resp.status().as_u16();
        // The body is read in full here; the connection is released when
        // `resp` is consumed or dropped on the error path.
        let body = resp
            .bytes()
            .await
            .map_err(|e| CostCenterError::Transport(describe(&e)))?;
        Ok(Response {
            status,
            body: body.to_vec(),
        })
    }
}
