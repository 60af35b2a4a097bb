//! Cost Center data transfer objects and configuration primitives shared by
//! every crate in the workspace.
#![warn(missing_docs)]

mod branch;
mod config;
mod error;
mod input;
mod query;
/// Decoded OData records and their wire helpers.
pub mod records;

pub use branch::{Branch, Selection, SelectionEntry};
pub use config::{ClientConfig, DEFAULT_BASE_URL, DEFAULT_SERVICE};
pub use error::{CostCenterError, RecordShape};
pub use input::{CostCenterInput, CostCenterTextInput, SdcInput};
pub use query::CostCenterQuery;
pub use records::{Header, Text, ToText};
