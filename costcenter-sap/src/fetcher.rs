use std::sync::Arc;

use costcenter_core::{ClientConfig, CostCenterError, Filter, Request, Transport};
use url::Url;

/// Query parameter carrying the OData filter expression.
pub const FILTER_PARAM: &str = "$filter";

/// Builds and issues the GET requests of the cost center service.
///
/// Returns raw bodies; decoding is the caller's job.
#[derive(Clone)]
pub struct ResourceFetcher {
    base_url: String,
    service: String,
    transport: Arc<dyn Transport>,
}

impl ResourceFetcher {
    /// Fetcher for `config` issuing requests through `transport`.
    ///
    /// # Errors
    /// Returns `InvalidArg` if the base URL is not an absolute URL.
    pub fn new(
        config: &ClientConfig,
        transport: Arc<dyn Transport>,
    ) -> Result<Self, CostCenterError> {
        Url::parse(&config.base_url).map_err(|e| {
            CostCenterError::InvalidArg(format!("base url {:?}: {e}", config.base_url))
        })?;
        Ok(Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            service: config.service.trim_matches('/').to_string(),
            transport,
        })
    }

    /// `<base>/<service>/<resource>` with single separators.
    #[must_use]
    pub fn service_url(&self, resource: &str) -> String {
        let resource = resource.trim_start_matches('/');
        if resource.is_empty() {
            format!("{}/{}/", self.base_url, self.service)
        } else {
            format!("{}/{}/{}", self.base_url, self.service, resource)
        }
    }

    /// Resolve a navigation link.
    ///
    /// Absolute links are returned unchanged. Relative links are resolved
    /// against the service root, the base OData v2 uses for them.
    ///
    /// # Errors
    /// Returns `InvalidArg` if the link cannot be resolved.
    pub fn resolve_link(&self, link: &str) -> Result<String, CostCenterError> {
        match Url::parse(link) {
            Ok(_) => Ok(link.to_string()),
            Err(url::ParseError::RelativeUrlWithoutBase) => {
                let root = Url::parse(&self.service_url("")).map_err(|e| {
                    CostCenterError::InvalidArg(format!("service root: {e}"))
                })?;
                root.join(link)
                    .map(String::from)
                    .map_err(|e| CostCenterError::InvalidArg(format!("link {link:?}: {e}")))
            }
            Err(e) => Err(CostCenterError::InvalidArg(format!("link {link:?}: {e}"))),
        }
    }

    /// GET `resource` with `filter` as the only query parameter.
    ///
    /// # Errors
    /// Returns `Transport` if the request could not be completed.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "costcenter_sap::fetch",
            skip_all,
            fields(resource = resource, filter = %filter),
        )
    )]
    pub async fn fetch(
        &self,
        resource: &str,
        filter: &Filter,
    ) -> Result<Vec<u8>, CostCenterError> {
        let req =
            Request::get(self.service_url(resource)).query(FILTER_PARAM, filter.to_string());
        self.send(req).await
    }

    /// GET a navigation link as-is: no service path, no query parameters.
    ///
    /// # Errors
    /// Returns `InvalidArg` for an unresolvable link and `Transport` if the
    /// request could not be completed.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "costcenter_sap::fetch_link", skip_all, fields(link = link))
    )]
    pub async fn fetch_link(&self, link: &str) -> Result<Vec<u8>, CostCenterError> {
        let url = self.resolve_link(link)?;
        self.send(Request::get(url)).await
    }

    async fn send(&self, req: Request) -> Result<Vec<u8>, CostCenterError> {
        let resp = self.transport.perform_request(req).await?;
        #[cfg(feature = "tracing")]
        tracing::debug!(
            status = resp.status,
            bytes = resp.body.len(),
            "cost center service responded"
        );
        Ok(resp.body)
    }
}
