use std::sync::Arc;

use costcenter_core::{CostCenterConnector, CostCenterError, RecordSink};

use crate::sink::TracingSink;

/// Orchestrator that runs the selected branches against one connector.
pub struct CostCenterCaller {
    pub(crate) connector: Arc<dyn CostCenterConnector>,
    pub(crate) sink: Arc<dyn RecordSink>,
}

/// Builder for constructing a `CostCenterCaller`.
pub struct CostCenterCallerBuilder {
    connector: Option<Arc<dyn CostCenterConnector>>,
    sink: Option<Arc<dyn RecordSink>>,
}

impl Default for CostCenterCallerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl CostCenterCallerBuilder {
    /// Create a new builder with no connector and the tracing sink.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            connector: None,
            sink: None,
        }
    }

    /// Set the connector every branch fetches through.
    ///
    /// A single connector is shared by all branches; setting it twice keeps
    /// the last one.
    #[must_use]
    pub fn connector(mut self, c: Arc<dyn CostCenterConnector>) -> Self {
        self.connector = Some(c);
        self
    }

    /// Set where branch outcomes are reported. Defaults to [`TracingSink`].
    #[must_use]
    pub fn sink(mut self, sink: Arc<dyn RecordSink>) -> Self {
        self.sink = Some(sink);
        self
    }

    /// Build the caller.
    ///
    /// # Errors
    /// Returns `InvalidArg` if no connector was set via [`connector`](Self::connector).
    pub fn build(self) -> Result<CostCenterCaller, CostCenterError> {
        let Some(connector) = self.connector else {
            return Err(CostCenterError::InvalidArg(
                "no connector registered; set one via connector(...)".to_string(),
            ));
        };
        let sink = self
            .sink
            .unwrap_or_else(|| Arc::new(TracingSink::new()) as Arc<dyn RecordSink>);
        Ok(CostCenterCaller { connector, sink })
    }
}

impl CostCenterCaller {
    /// Start building a new `CostCenterCaller`.
    ///
    /// ```rust,ignore
    /// use std::sync::Arc;
    /// use costcenter::{CostCenterCaller, CostCenterQuery, SapConnector, Selection};
    ///
    /// let sap = SapConnector::sandbox(std::env::var("SAP_API_KEY")?)?;
    /// let caller = CostCenterCaller::builder().connector(Arc::new(sap)).build()?;
    /// let query = CostCenterQuery::new("A000", "10101101", "EN", "Corporate");
    /// caller.run(&query, &Selection::all()).await;
    /// ```
    #[must_use]
    pub const fn builder() -> CostCenterCallerBuilder {
        CostCenterCallerBuilder::new()
    }

    /// Name of the connector in use.
    #[must_use]
    pub fn connector_name(&self) -> &'static str {
        self.connector.name()
    }
}
