use core::fmt;
use serde::{Deserialize, Serialize};

/// Independently schedulable unit of a Cost Center read.
///
/// The string forms match the names accepted in the `Accepter` list of the
/// input document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
pub enum Branch {
    /// Cost center header records, followed by their linked texts.
    Header,
    /// Cost center texts filtered by language and name.
    CostCenterName,
}

impl Branch {
    /// Every branch, in execution order used for the `All` expansion.
    pub const ALL: [Self; 2] = [Self::Header, Self::CostCenterName];

    /// Stable identifier used in selections and log fields.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Header => "Header",
            Self::CostCenterName => "CostCenterName",
        }
    }

    /// Exact, case-sensitive lookup of a branch by name.
    #[must_use]
    pub fn parse(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|b| b.as_str() == name)
    }
}

impl fmt::Display for Branch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One entry of a [`Selection`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SelectionEntry {
    /// A name that maps to a known branch.
    Branch(Branch),
    /// A name no branch answers to. It is scheduled as a no-op.
    Unrecognized(String),
}

impl SelectionEntry {
    /// The branch this entry runs, if any.
    #[must_use]
    pub const fn branch(&self) -> Option<Branch> {
        match self {
            Self::Branch(b) => Some(*b),
            Self::Unrecognized(_) => None,
        }
    }
}

/// Ordered list of branches requested for one orchestration call.
///
/// Duplicates are preserved and each runs independently.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Selection {
    entries: Vec<SelectionEntry>,
}

impl Selection {
    /// Sentinel that expands to every branch when it leads the list.
    pub const ALL_SENTINEL: &'static str = "All";

    /// Selection running every branch once.
    #[must_use]
    pub fn all() -> Self {
        Self {
            entries: Branch::ALL.into_iter().map(SelectionEntry::Branch).collect(),
        }
    }

    /// Resolve a list of branch names.
    ///
    /// An empty list, or one whose first name is `"All"`, expands to
    /// [`Selection::all`]. Otherwise each name becomes one entry in order and
    /// unknown names are kept as [`SelectionEntry::Unrecognized`].
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let names: Vec<S> = names.into_iter().collect();
        match names.first() {
            None => return Self::all(),
            Some(first) if first.as_ref() == Self::ALL_SENTINEL => return Self::all(),
            Some(_) => {}
        }
        let entries = names
            .iter()
            .map(|n| {
                let n = n.as_ref();
                Branch::parse(n).map_or_else(
                    || SelectionEntry::Unrecognized(n.to_string()),
                    SelectionEntry::Branch,
                )
            })
            .collect();
        Self { entries }
    }

    /// Selection from explicit branches.
    #[must_use]
    pub fn of(branches: &[Branch]) -> Self {
        Self {
            entries: branches.iter().copied().map(SelectionEntry::Branch).collect(),
        }
    }

    /// All entries, recognized or not, in request order.
    #[must_use]
    pub fn entries(&self) -> &[SelectionEntry] {
        &self.entries
    }

    /// Recognized branches in request order.
    pub fn branches(&self) -> impl Iterator<Item = Branch> + '_ {
        self.entries.iter().filter_map(SelectionEntry::branch)
    }

    /// Number of entries, including unrecognized ones.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the selection has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_and_sentinel_expand_to_every_branch() {
        let empty: [&str; 0] = [];
        assert_eq!(Selection::from_names(empty), Selection::all());
        assert_eq!(Selection::from_names(["All"]), Selection::all());
        assert_eq!(Selection::from_names(["All", "Nope"]), Selection::all());
    }

    #[test]
    fn sentinel_only_counts_in_first_position() {
        let sel = Selection::from_names(["Header", "All"]);
        assert_eq!(
            sel.entries(),
            &[
                SelectionEntry::Branch(Branch::Header),
                SelectionEntry::Unrecognized("All".into()),
            ]
        );
    }

    #[test]
    fn unknown_names_are_kept_and_duplicates_preserved() {
        let sel = Selection::from_names(["CostCenterName", "header", "CostCenterName"]);
        assert_eq!(sel.len(), 3);
        let branches: Vec<Branch> = sel.branches().collect();
        assert_eq!(branches, vec![Branch::CostCenterName, Branch::CostCenterName]);
        assert_eq!(
            sel.entries()[1],
            SelectionEntry::Unrecognized("header".into())
        );
    }

    #[test]
    fn display_matches_accepter_names() {
        assert_eq!(Branch::Header.to_string(), "Header");
        assert_eq!(Branch::parse("CostCenterName"), Some(Branch::CostCenterName));
        assert_eq!(Branch::parse("costcentername"), None);
    }
}
