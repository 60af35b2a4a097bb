//! The SDC input document that drives a Cost Center read.

use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{CostCenterError, CostCenterQuery, Selection};

/// Text filter block nested under `CostCenter`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct CostCenterTextInput {
    /// Language code.
    pub language: String,
    /// Substring matched against the cost center name.
    pub cost_center_name: String,
}

/// `CostCenter` block of the input document.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct CostCenterInput {
    /// Controlling area.
    pub controlling_area: String,
    /// Cost center code.
    pub cost_center: String,
    /// Text filter.
    pub cost_center_text: CostCenterTextInput,
}

/// Input document: query parameters plus the `Accepter` branch list.
///
/// Unknown fields are ignored so documents carrying connection metadata for
/// other tools load unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct SdcInput {
    /// Query parameters.
    pub cost_center: CostCenterInput,
    /// Requested branch names; empty or a leading `"All"` means every branch.
    pub accepter: Vec<String>,
}

impl SdcInput {
    /// Parse a document from a JSON string.
    ///
    /// # Errors
    /// Returns `Config` if the text is not a valid document.
    pub fn from_json_str(s: &str) -> Result<Self, CostCenterError> {
        serde_json::from_str(s).map_err(|e| CostCenterError::Config(format!("input document: {e}")))
    }

    /// Parse a document from a reader.
    ///
    /// # Errors
    /// Returns `Config` if reading fails or the content is not a valid document.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, CostCenterError> {
        serde_json::from_reader(reader)
            .map_err(|e| CostCenterError::Config(format!("input document: {e}")))
    }

    /// Load a document from a file.
    ///
    /// # Errors
    /// Returns `Config` if the file cannot be opened or parsed.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, CostCenterError> {
        let path = path.as_ref();
        let file = std::fs::File::open(path)
            .map_err(|e| CostCenterError::Config(format!("{}: {e}", path.display())))?;
        Self::from_reader(std::io::BufReader::new(file))
    }

    /// Query parameters carried by the document.
    #[must_use]
    pub fn query(&self) -> CostCenterQuery {
        CostCenterQuery::new(
            self.cost_center.controlling_area.clone(),
            self.cost_center.cost_center.clone(),
            self.cost_center.cost_center_text.language.clone(),
            self.cost_center.cost_center_text.cost_center_name.clone(),
        )
    }

    /// Resolved branch selection.
    #[must_use]
    pub fn selection(&self) -> Selection {
        Selection::from_names(&self.accepter)
    }
}
