use core::fmt;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Target shape of a decode attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RecordShape {
    /// `A_CostCenter` entity set.
    Header,
    /// `A_CostCenterText` entity set.
    Text,
    /// Text collection reached through a header's `to_Text` link.
    ToText,
}

impl RecordShape {
    /// Stable label for logs and errors.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Header => "header",
            Self::Text => "text",
            Self::ToText => "to-text",
        }
    }
}

impl fmt::Display for RecordShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unified error type for the costcenter workspace.
///
/// Every failure a branch can hit is one of these; the orchestrator logs it
/// and ends only that branch.
#[derive(Debug, Error, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CostCenterError {
    /// Connection or I/O failure while performing an HTTP call.
    #[error("API request error: {0}")]
    Transport(String),

    /// The response body is malformed or does not have the expected shape.
    #[error("convert error: {shape}: {msg}")]
    Decode {
        /// Shape the body was decoded as.
        shape: RecordShape,
        /// Human-readable description of the failure.
        msg: String,
    },

    /// A step ran without the input it depends on (e.g. an empty header result).
    #[error("precondition violated: {0}")]
    Precondition(String),

    /// Invalid input argument, such as an unparsable URL.
    #[error("invalid argument: {0}")]
    InvalidArg(String),

    /// Input document or credential could not be loaded.
    #[error("configuration error: {0}")]
    Config(String),

    /// A connector-specific failure.
    #[error("{connector} failed: {msg}")]
    Connector {
        /// Connector name that failed.
        connector: String,
        /// Human-readable error message.
        msg: String,
    },
}

impl CostCenterError {
    /// Helper: wrap a transport failure.
    pub fn transport(err: impl fmt::Display) -> Self {
        Self::Transport(err.to_string())
    }

    /// Helper: build a `Decode` error for the given shape.
    pub fn decode(shape: RecordShape, msg: impl Into<String>) -> Self {
        Self::Decode {
            shape,
            msg: msg.into(),
        }
    }

    /// Helper: build a `Connector` error with the connector name and message.
    pub fn connector(connector: impl Into<String>, msg: impl Into<String>) -> Self {
        Self::Connector {
            connector: connector.into(),
            msg: msg.into(),
        }
    }

    /// Short machine-friendly kind label used as a log field.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Transport(_) => "transport",
            Self::Decode { .. } => "decode",
            Self::Precondition(_) => "precondition",
            Self::InvalidArg(_) => "invalid-arg",
            Self::Config(_) => "config",
            Self::Connector { .. } => "connector",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transport_display_carries_request_context() {
        let e = CostCenterError::transport("connection refused");
        assert_eq!(e.to_string(), "API request error: connection refused");
        assert_eq!(e.kind(), "transport");
    }

    #[test]
    fn decode_display_names_shape() {
        let e = CostCenterError::decode(RecordShape::ToText, "missing field `results`");
        assert_eq!(
            e.to_string(),
            "convert error: to-text: missing field `results`"
        );
    }
}
