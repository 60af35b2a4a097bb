//! costcenter-core
//!
//! Contracts and pure logic shared across the costcenter workspace.
//!
//! - `transport`: the `Transport` trait every HTTP integration implements.
//! - `connector`: the `CostCenterConnector` trait the orchestrator consumes.
//! - `decode`: turns OData `d.results` payloads into typed records.
//! - `filter`: builds `$filter` expressions with proper literal quoting.
//! - `sink`: where branch outcomes are reported.
#![warn(missing_docs)]

/// Connector trait consumed by the orchestrator.
pub mod connector;
/// Record decoder for OData v2 JSON payloads.
pub mod decode;
/// OData `$filter` expression builder.
pub mod filter;
/// Outcome reporting.
pub mod sink;
/// Request/response transport abstraction.
pub mod transport;

pub use connector::{ConnectorKey, CostCenterConnector};
pub use decode::{decode_headers, decode_records, decode_texts, decode_to_texts};
pub use filter::Filter;
pub use sink::{Outcome, RecordSink};
pub use transport::{Method, Request, Response, Transport};

pub use costcenter_types::*;
