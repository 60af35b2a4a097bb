//! Client configuration shared by connectors.

use serde::{Deserialize, Serialize};

/// SAP API Business Hub sandbox root for OData v2 services.
pub const DEFAULT_BASE_URL: &str = "https://sandbox.api.sap.com/s4hanacloud/sap/opu/odata/sap/";

/// OData service exposing the cost center entity sets.
pub const DEFAULT_SERVICE: &str = "API_COSTCENTER_SRV";

/// Where the cost center service lives.
///
/// Immutable for the lifetime of one orchestration call; the credential is
/// supplied separately when the connector is built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// API root, e.g. the sandbox URL. A trailing slash is optional.
    pub base_url: String,
    /// Service segment joined between the base URL and the entity set.
    pub service: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            service: DEFAULT_SERVICE.to_string(),
        }
    }
}

impl ClientConfig {
    /// Configuration for a custom base URL and the default service.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }
}
