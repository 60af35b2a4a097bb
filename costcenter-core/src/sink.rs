use crate::{Branch, CostCenterError, Header, RecordShape, Text, ToText};

/// One reportable result of a branch step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome<'a> {
    /// Decoded header records.
    Headers(&'a [Header]),
    /// Decoded records behind a header's `to_Text` link.
    ToTexts(&'a [ToText]),
    /// Decoded text records.
    Texts(&'a [Text]),
    /// The step failed; the branch ends here.
    Failed(&'a CostCenterError),
}

impl Outcome<'_> {
    /// Whether this outcome reports a failure.
    #[must_use]
    pub const fn is_failure(&self) -> bool {
        matches!(self, Self::Failed(_))
    }

    /// Shape of the records carried, if any.
    #[must_use]
    pub const fn shape(&self) -> Option<RecordShape> {
        match self {
            Self::Headers(_) => Some(RecordShape::Header),
            Self::ToTexts(_) => Some(RecordShape::ToText),
            Self::Texts(_) => Some(RecordShape::Text),
            Self::Failed(_) => None,
        }
    }

    /// Number of records carried (zero for failures).
    #[must_use]
    pub const fn len(&self) -> usize {
        match self {
            Self::Headers(r) => r.len(),
            Self::ToTexts(r) => r.len(),
            Self::Texts(r) => r.len(),
            Self::Failed(_) => 0,
        }
    }

    /// Whether no records are carried.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Destination for branch outcomes.
///
/// Called concurrently from every running branch; each call must be
/// recorded as one indivisible entry.
pub trait RecordSink: Send + Sync {
    /// Report `outcome` for `branch`.
    fn record(&self, branch: Branch, outcome: Outcome<'_>);
}

impl<S: RecordSink + ?Sized> RecordSink for std::sync::Arc<S> {
    fn record(&self, branch: Branch, outcome: Outcome<'_>) {
        (**self).record(branch, outcome);
    }
}
