//! costcenter reads SAP S/4HANA Cost Center data through one connector.
//!
//! Overview
//! - A read is split into independent branches. The `Header` branch fetches
//!   the cost center master record and then follows the first record's
//!   `to_Text` link; the `CostCenterName` branch fetches texts filtered by
//!   language and a name fragment.
//! - [`CostCenterCaller::run`] starts every selected branch concurrently and
//!   returns once all of them are done. It has no return value: each branch
//!   reports its decoded records or its failure to a [`RecordSink`].
//! - A failure ends only its own branch; siblings are never cancelled.
//! - The default sink is [`TracingSink`], which turns outcomes into
//!   `tracing` events. Install a subscriber to see them.
//!
//! Reading one cost center with both branches:
//! ```rust,ignore
//! use std::sync::Arc;
//! use costcenter::{CostCenterCaller, SapConnector, SdcInput};
//!
//! let sap = SapConnector::sandbox(std::env::var("SAP_API_KEY")?)?;
//! let caller = CostCenterCaller::builder().connector(Arc::new(sap)).build()?;
//! let input = SdcInput::from_path("inputs/sdc_cost_center_sample.json")?;
//! caller.run_input(&input).await;
//! ```
//!
//! See `costcenter/examples/` for a runnable demonstration.
#![warn(missing_docs)]

pub(crate) mod core;
mod router;
mod sink;

pub use core::{CostCenterCaller, CostCenterCallerBuilder};
pub use router::header::first_link;
pub use sink::TracingSink;

pub use costcenter_sap::{Credential, RequestSigner, SapConnector, SapConnectorBuilder};

// Re-export core types for convenience
pub use costcenter_core::{
    Branch, ClientConfig, CostCenterConnector, CostCenterError, CostCenterQuery, Filter, Header,
    Outcome, RecordShape, RecordSink, SdcInput, Selection, SelectionEntry, Text, ToText,
    Transport,
};
