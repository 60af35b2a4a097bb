use core::fmt;

/// An OData v2 `$filter` boolean expression.
///
/// Field values become string literals: they are wrapped in single quotes
/// and any embedded `'` is doubled, so a value can never terminate its
/// literal early. Values without quotes render exactly as written.
///
/// ```
/// use costcenter_core::Filter;
///
/// let f = Filter::eq("ControllingArea", "1010").and(Filter::eq("CostCenter", "CC01"));
/// assert_eq!(f.to_string(), "ControllingArea eq '1010' and CostCenter eq 'CC01'");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Filter {
    /// `<field> eq '<value>'`
    Eq {
        /// Property name.
        field: String,
        /// Literal value.
        value: String,
    },
    /// `substringof('<value>', <field>)`
    SubstringOf {
        /// Literal searched for.
        value: String,
        /// Property name.
        field: String,
    },
    /// `<lhs> and <rhs>`
    And(Box<Filter>, Box<Filter>),
}

impl Filter {
    /// Equality between a property and a string literal.
    pub fn eq(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self::Eq {
            field: field.into(),
            value: value.into(),
        }
    }

    /// Substring match of a literal within a property.
    pub fn substring_of(value: impl Into<String>, field: impl Into<String>) -> Self {
        Self::SubstringOf {
            value: value.into(),
            field: field.into(),
        }
    }

    /// Conjunction of `self` and `other`.
    #[must_use]
    pub fn and(self, other: Self) -> Self {
        Self::And(Box::new(self), Box::new(other))
    }

    /// Filter selecting one cost center within a controlling area.
    #[must_use]
    pub fn cost_center(controlling_area: &str, cost_center: &str) -> Self {
        Self::eq("ControllingArea", controlling_area).and(Self::eq("CostCenter", cost_center))
    }

    /// Filter selecting texts in `language` whose name contains `name`.
    #[must_use]
    pub fn cost_center_name(language: &str, name: &str) -> Self {
        Self::eq("Language", language).and(Self::substring_of(name, "CostCenterName"))
    }
}

/// Write `value` as a quoted OData string literal.
fn write_literal(f: &mut fmt::Formatter<'_>, value: &str) -> fmt::Result {
    f.write_str("'")?;
    let mut parts = value.split('\'');
    if let Some(first) = parts.next() {
        f.write_str(first)?;
    }
    for part in parts {
        f.write_str("''")?;
        f.write_str(part)?;
    }
    f.write_str("'")
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Eq { field, value } => {
                write!(f, "{field} eq ")?;
                write_literal(f, value)
            }
            Self::SubstringOf { value, field } => {
                f.write_str("substringof(")?;
                write_literal(f, value)?;
                write!(f, ", {field})")
            }
            Self::And(lhs, rhs) => write!(f, "{lhs} and {rhs}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_filter_matches_plain_interpolation() {
        assert_eq!(
            Filter::cost_center("1010", "CC01").to_string(),
            "ControllingArea eq '1010' and CostCenter eq 'CC01'"
        );
    }

    #[test]
    fn name_filter_matches_plain_interpolation() {
        assert_eq!(
            Filter::cost_center_name("EN", "Corporate").to_string(),
            "Language eq 'EN' and substringof('Corporate', CostCenterName)"
        );
    }

    #[test]
    fn embedded_quotes_are_doubled() {
        let f = Filter::eq("CostCenter", "x' or CostCenter ne '");
        assert_eq!(f.to_string(), "CostCenter eq 'x'' or CostCenter ne '''");
    }

    #[test]
    fn empty_values_render_empty_literals() {
        assert_eq!(
            Filter::cost_center_name("", "").to_string(),
            "Language eq '' and substringof('', CostCenterName)"
        );
    }
}
