//! costcenter-sap
//!
//! Connector for the SAP S/4HANA Cloud `API_COSTCENTER_SRV` OData service.
//! Implements `CostCenterConnector` on top of a [`ResourceFetcher`] and the
//! record decoder from `costcenter-core`.
//!
//! Credentials are a construction-time choice: an API key sent in the
//! `APIKey` header, a [`RequestSigner`] that owns all auth headers, or a
//! fully custom [`Transport`].
#![warn(missing_docs)]

/// Request building and issuing against the cost center service.
pub mod fetcher;
/// `reqwest`-backed transport and credentials.
pub mod transport;

use std::sync::Arc;

use async_trait::async_trait;
use costcenter_core::{
    ClientConfig, ConnectorKey, CostCenterConnector, CostCenterError, Filter, Header, Text, ToText,
    Transport, decode_headers, decode_texts, decode_to_texts,
};

pub use fetcher::ResourceFetcher;
pub use transport::{Credential, ReqwestTransport, RequestSigner};

/// Entity set holding cost center master records.
pub const HEADER_RESOURCE: &str = "A_CostCenter";
/// Entity set holding cost center texts.
pub const TEXT_RESOURCE: &str = "A_CostCenterText";

/// Public connector type.
#[derive(Clone)]
pub struct SapConnector {
    fetcher: ResourceFetcher,
}

impl SapConnector {
    /// Static connector key.
    pub const KEY: ConnectorKey = ConnectorKey::new("costcenter-sap");

    /// Start building a connector.
    #[must_use]
    pub fn builder() -> SapConnectorBuilder {
        SapConnectorBuilder::new()
    }

    /// Sandbox connector authenticated with `api_key`.
    ///
    /// # Errors
    /// Never fails for the built-in sandbox URL; kept fallible for symmetry
    /// with [`SapConnectorBuilder::build`].
    pub fn sandbox(api_key: impl Into<String>) -> Result<Self, CostCenterError> {
        Self::builder().api_key(api_key).build()
    }

    /// The fetcher requests go through.
    #[must_use]
    pub const fn fetcher(&self) -> &ResourceFetcher {
        &self.fetcher
    }
}

#[async_trait]
impl CostCenterConnector for SapConnector {
    fn name(&self) -> &'static str {
        Self::KEY.as_str()
    }

    async fn headers(
        &self,
        controlling_area: &str,
        cost_center: &str,
    ) -> Result<Vec<Header>, CostCenterError> {
        let filter = Filter::cost_center(controlling_area, cost_center);
        let body = self.fetcher.fetch(HEADER_RESOURCE, &filter).await?;
        decode_headers(&body)
    }

    async fn to_texts(&self, link: &str) -> Result<Vec<ToText>, CostCenterError> {
        let body = self.fetcher.fetch_link(link).await?;
        decode_to_texts(&body)
    }

    async fn texts(
        &self,
        language: &str,
        cost_center_name: &str,
    ) -> Result<Vec<Text>, CostCenterError> {
        let filter = Filter::cost_center_name(language, cost_center_name);
        let body = self.fetcher.fetch(TEXT_RESOURCE, &filter).await?;
        decode_texts(&body)
    }
}

/// Builder for [`SapConnector`].
///
/// A custom [`transport`](Self::transport) takes precedence over any
/// credential; otherwise a [`ReqwestTransport`] is built from the
/// credential and the optional `reqwest::Client`.
#[derive(Default)]
pub struct SapConnectorBuilder {
    config: ClientConfig,
    credential: Option<Credential>,
    http: Option<reqwest::Client>,
    transport: Option<Arc<dyn Transport>>,
}

impl SapConnectorBuilder {
    /// Builder with the sandbox configuration and no credential.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole client configuration.
    #[must_use]
    pub fn config(mut self, config: ClientConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the API root.
    #[must_use]
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.config.base_url = base_url.into();
        self
    }

    /// Set the service segment (defaults to `API_COSTCENTER_SRV`).
    #[must_use]
    pub fn service(mut self, service: impl Into<String>) -> Self {
        self.config.service = service.into();
        self
    }

    /// Authenticate with an API key.
    #[must_use]
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.credential = Some(Credential::api_key(key));
        self
    }

    /// Delegate authentication to a signer.
    #[must_use]
    pub fn signer(mut self, signer: Arc<dyn RequestSigner>) -> Self {
        self.credential = Some(Credential::Signer(signer));
        self
    }

    /// Set the credential directly.
    #[must_use]
    pub fn credential(mut self, credential: Credential) -> Self {
        self.credential = Some(credential);
        self
    }

    /// Reuse an existing `reqwest::Client` for the built-in transport.
    #[must_use]
    pub fn http_client(mut self, http: reqwest::Client) -> Self {
        self.http = Some(http);
        self
    }

    /// Use a fully custom transport.
    #[must_use]
    pub fn transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Build the connector.
    ///
    /// # Errors
    /// Returns `InvalidArg` for an invalid base URL and `Config` when
    /// neither a transport nor a credential was provided.
    pub fn build(self) -> Result<SapConnector, CostCenterError> {
        let transport: Arc<dyn Transport> = match (self.transport, self.credential) {
            (Some(t), _) => t,
            (None, Some(credential)) => match self.http {
                Some(http) => Arc::new(ReqwestTransport::with_client(http, credential)),
                None => Arc::new(ReqwestTransport::new(credential)),
            },
            (None, None) => {
                return Err(CostCenterError::Config(
                    "no credential configured; set api_key(...), signer(...) or transport(...)"
                        .to_string(),
                ));
            }
        };
        let fetcher = ResourceFetcher::new(&self.config, transport)?;
        Ok(SapConnector { fetcher })
    }
}
