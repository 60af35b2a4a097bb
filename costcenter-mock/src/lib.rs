//! costcenter-mock
//!
//! Connectors that never touch the network:
//! - [`MockConnector`] serves deterministic fixtures for examples and CI.
//! - [`DynamicMockConnector`] defers every call to a test-side controller.
use async_trait::async_trait;
use costcenter_core::{
    ConnectorKey, CostCenterConnector, CostCenterError, Header, Text, ToText,
};

mod dynamic;
mod fixtures;

pub use dynamic::{DynamicMockConnector, DynamicMockController, MockBehavior, MockCall};
pub use fixtures::headers::NO_LINK;
pub use fixtures::{CONTROLLING_AREA, COST_CENTERS, SERVICE_ROOT};

/// Forces a failure when passed as the controlling area or language, or
/// when it appears anywhere in a `to_Text` link.
pub const FAIL: &str = "FAIL";
/// Cost center for which no header exists.
pub const EMPTY: &str = "EMPTY";

/// Mock connector for CI-safe examples. Provides deterministic data from static fixtures.
pub struct MockConnector;

impl Default for MockConnector {
    fn default() -> Self {
        Self::new()
    }
}

impl MockConnector {
    /// Static connector key.
    pub const KEY: ConnectorKey = ConnectorKey::new("costcenter-mock");

    /// Create the mock connector.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    fn maybe_fail(triggered: bool, operation: &'static str) -> Result<(), CostCenterError> {
        if triggered {
            Err(CostCenterError::connector(
                Self::KEY.as_str(),
                format!("forced failure: {operation}"),
            ))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl CostCenterConnector for MockConnector {
    fn name(&self) -> &'static str {
        Self::KEY.as_str()
    }

    async fn headers(
        &self,
        controlling_area: &str,
        cost_center: &str,
    ) -> Result<Vec<Header>, CostCenterError> {
        Self::maybe_fail(controlling_area == FAIL, "headers")?;
        if cost_center == EMPTY {
            return Ok(Vec::new());
        }
        Ok(fixtures::headers::by_key(controlling_area, cost_center))
    }

    async fn to_texts(&self, link: &str) -> Result<Vec<ToText>, CostCenterError> {
        Self::maybe_fail(link.contains(FAIL), "to_texts")?;
        let cost_center = fixtures::cost_center_in_link(link).ok_or_else(|| {
            CostCenterError::connector(Self::KEY.as_str(), format!("unknown link: {link}"))
        })?;
        Ok(fixtures::texts::for_cost_center(cost_center))
    }

    async fn texts(
        &self,
        language: &str,
        cost_center_name: &str,
    ) -> Result<Vec<Text>, CostCenterError> {
        Self::maybe_fail(language == FAIL, "texts")?;
        Ok(fixtures::texts::matching(language, cost_center_name))
    }
}
