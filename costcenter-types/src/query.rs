use serde::{Deserialize, Serialize};

/// The four strings a Cost Center read is parameterised by.
///
/// Values are used verbatim; quoting for the OData filter happens when the
/// request is built.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CostCenterQuery {
    /// Controlling area, e.g. `"A000"`.
    pub controlling_area: String,
    /// Cost center code, e.g. `"0010101101"`.
    pub cost_center: String,
    /// Language code for the text branch, e.g. `"EN"`.
    pub language: String,
    /// Substring matched against `CostCenterName`.
    pub cost_center_name: String,
}

impl CostCenterQuery {
    /// Build a query from its four parts.
    pub fn new(
        controlling_area: impl Into<String>,
        cost_center: impl Into<String>,
        language: impl Into<String>,
        cost_center_name: impl Into<String>,
    ) -> Self {
        Self {
            controlling_area: controlling_area.into(),
            cost_center: cost_center.into(),
            language: language.into(),
            cost_center_name: cost_center_name.into(),
        }
    }
}
