use async_trait::async_trait;

use crate::{CostCenterError, Header, Text, ToText};

/// Typed key naming a connector in logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ConnectorKey(pub &'static str);

impl ConnectorKey {
    /// Construct a new typed connector key from a static name.
    #[must_use]
    pub const fn new(name: &'static str) -> Self {
        Self(name)
    }

    /// Returns the inner static string.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        self.0
    }
}

/// Source of Cost Center records.
///
/// Each call is one fetch plus one decode. Implementations do not log
/// decoded content and do not retry.
#[async_trait]
pub trait CostCenterConnector: Send + Sync {
    /// Stable connector name used in logs and connector-tagged errors.
    fn name(&self) -> &'static str;

    /// Key derived from [`name`](Self::name).
    fn key(&self) -> ConnectorKey {
        ConnectorKey::new(self.name())
    }

    /// Fetch the header records of one cost center.
    async fn headers(
        &self,
        controlling_area: &str,
        cost_center: &str,
    ) -> Result<Vec<Header>, CostCenterError>;

    /// Follow a header's `to_Text` navigation link.
    async fn to_texts(&self, link: &str) -> Result<Vec<ToText>, CostCenterError>;

    /// Fetch texts in `language` whose name contains `cost_center_name`.
    async fn texts(
        &self,
        language: &str,
        cost_center_name: &str,
    ) -> Result<Vec<Text>, CostCenterError>;
}
