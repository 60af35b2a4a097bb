use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One `A_CostCenter` entity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Header {
    /// Controlling area key.
    pub controlling_area: String,
    /// Cost center key.
    pub cost_center: String,
    /// End of the validity interval.
    #[serde(default, with = "odata_date")]
    pub validity_end_date: Option<DateTime<Utc>>,
    /// Start of the validity interval.
    #[serde(default, with = "odata_date")]
    pub validity_start_date: Option<DateTime<Utc>>,
    /// Company code the cost center is assigned to.
    #[serde(default)]
    pub company_code: Option<String>,
    /// Business area.
    #[serde(default)]
    pub business_area: Option<String>,
    /// Name of the person responsible.
    #[serde(default)]
    pub cost_ctr_responsible_person_name: Option<String>,
    /// User responsible.
    #[serde(default)]
    pub cost_ctr_responsible_user: Option<String>,
    /// Currency of the cost center.
    #[serde(default)]
    pub cost_center_currency: Option<String>,
    /// Profit center.
    #[serde(default)]
    pub profit_center: Option<String>,
    /// Department.
    #[serde(default)]
    pub department: Option<String>,
    /// Costing sheet.
    #[serde(default)]
    pub costing_sheet: Option<String>,
    /// Functional area.
    #[serde(default)]
    pub functional_area: Option<String>,
    /// Country key.
    #[serde(default)]
    pub country: Option<String>,
    /// Region.
    #[serde(default)]
    pub region: Option<String>,
    /// City.
    #[serde(default)]
    pub city_name: Option<String>,
    /// Standard hierarchy area.
    #[serde(default)]
    pub cost_center_standard_hier_area: Option<String>,
    /// Cost center category.
    #[serde(default)]
    pub cost_center_category: Option<String>,
    /// Blocked for primary cost postings.
    #[serde(default)]
    pub is_blkd_for_primary_costs_posting: Option<bool>,
    /// Blocked for secondary cost postings.
    #[serde(default)]
    pub is_blkd_for_secondary_costs_posting: Option<bool>,
    /// Blocked for revenue postings.
    #[serde(default)]
    pub is_blocked_for_revenue_posting: Option<bool>,
    /// Blocked for commitment postings.
    #[serde(default)]
    pub is_blocked_for_commitment_posting: Option<bool>,
    /// Blocked for planned primary costs.
    #[serde(default)]
    pub is_blocked_for_plan_primary_costs: Option<bool>,
    /// Blocked for planned secondary costs.
    #[serde(default)]
    pub is_blocked_for_plan_secondary_costs: Option<bool>,
    /// Blocked for planned revenues.
    #[serde(default)]
    pub is_blocked_for_plan_revenues: Option<bool>,
    /// Allocation method.
    #[serde(default)]
    pub cost_center_allocation_method: Option<String>,
    /// Whether consumption quantities are recorded.
    #[serde(default)]
    pub consumption_qty_is_recorded: Option<bool>,
    /// Language of the master record.
    #[serde(default)]
    pub language: Option<String>,
    /// User who created the record.
    #[serde(default)]
    pub cost_center_created_by_user: Option<String>,
    /// Creation date.
    #[serde(default, with = "odata_date")]
    pub cost_center_creation_date: Option<DateTime<Utc>>,
    /// Navigation link to this record's text collection (`to_Text.__deferred.uri`).
    #[serde(rename = "to_Text", default, with = "deferred")]
    pub to_text: Option<String>,
}

/// One `A_CostCenterText` entity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Text {
    /// Controlling area key.
    pub controlling_area: String,
    /// Cost center key.
    pub cost_center: String,
    /// End of the validity interval.
    #[serde(default, with = "odata_date")]
    pub validity_end_date: Option<DateTime<Utc>>,
    /// Language of the text.
    #[serde(default)]
    pub language: Option<String>,
    /// Start of the validity interval.
    #[serde(default, with = "odata_date")]
    pub validity_start_date: Option<DateTime<Utc>>,
    /// Short name.
    #[serde(default)]
    pub cost_center_name: Option<String>,
    /// Long description.
    #[serde(default)]
    pub cost_center_description: Option<String>,
}

/// Text entity reached through a header's `to_Text` link.
///
/// Same fields as [`Text`]; kept as its own type so the two fetch paths
/// cannot be confused downstream.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ToText {
    /// Controlling area key.
    pub controlling_area: String,
    /// Cost center key.
    pub cost_center: String,
    /// End of the validity interval.
    #[serde(default, with = "odata_date")]
    pub validity_end_date: Option<DateTime<Utc>>,
    /// Language of the text.
    #[serde(default)]
    pub language: Option<String>,
    /// Start of the validity interval.
    #[serde(default, with = "odata_date")]
    pub validity_start_date: Option<DateTime<Utc>>,
    /// Short name.
    #[serde(default)]
    pub cost_center_name: Option<String>,
    /// Long description.
    #[serde(default)]
    pub cost_center_description: Option<String>,
}

/// OData v2 JSON dates: `"/Date(<millis>)/"`, optionally with a `+hhmm`
/// or `-hhmm` offset that does not change the instant.
pub mod odata_date {
    use chrono::{DateTime, Utc};
    use serde::{Deserialize, Deserializer, Serializer, de::Error as _};

    /// Parse the wire form into a UTC instant.
    #[must_use]
    pub fn parse(s: &str) -> Option<DateTime<Utc>> {
        let inner = s.strip_prefix("/Date(")?.strip_suffix(")/")?;
        let millis_end = inner
            .char_indices()
            .skip(1)
            .find(|(_, c)| *c == '+' || *c == '-')
            .map_or(inner.len(), |(i, _)| i);
        let (millis, offset) = inner.split_at(millis_end);
        if !offset.is_empty()
            && (offset.len() != 5 || !offset[1..].bytes().all(|b| b.is_ascii_digit()))
        {
            return None;
        }
        let millis: i64 = millis.parse().ok()?;
        DateTime::from_timestamp_millis(millis)
    }

    /// Render an instant in the wire form.
    #[must_use]
    pub fn format(dt: &DateTime<Utc>) -> String {
        format!("/Date({})/", dt.timestamp_millis())
    }

    /// Serde adapter for `Option<DateTime<Utc>>` fields.
    ///
    /// # Errors
    /// Propagates serializer errors.
    #[allow(clippy::ref_option)]
    pub fn serialize<S: Serializer>(
        value: &Option<DateTime<Utc>>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match value {
            Some(dt) => serializer.serialize_str(&format(dt)),
            None => serializer.serialize_none(),
        }
    }

    /// Serde adapter for `Option<DateTime<Utc>>` fields.
    ///
    /// # Errors
    /// Fails on strings that are not in the `/Date(...)/` form.
    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<DateTime<Utc>>, D::Error> {
        let raw: Option<String> = Option::deserialize(deserializer)?;
        match raw.as_deref() {
            None => Ok(None),
            Some(s) => parse(s)
                .map(Some)
                .ok_or_else(|| D::Error::custom(format!("invalid OData date: {s:?}"))),
        }
    }
}

/// Deferred navigation properties: `{"__deferred": {"uri": "..."}}`.
///
/// Any other shape (e.g. an expanded collection) yields `None`.
mod deferred {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    #[derive(Serialize, Deserialize)]
    struct Uri {
        uri: String,
    }

    #[derive(Serialize, Deserialize)]
    struct Deferred {
        #[serde(rename = "__deferred")]
        deferred: Uri,
    }

    #[allow(clippy::ref_option)]
    pub fn serialize<S: Serializer>(
        value: &Option<String>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match value {
            Some(uri) => Deferred {
                deferred: Uri { uri: uri.clone() },
            }
            .serialize(serializer),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<String>, D::Error> {
        let raw: Option<serde_json::Value> = Option::deserialize(deserializer)?;
        Ok(raw
            .and_then(|v| serde_json::from_value::<Deferred>(v).ok())
            .map(|d| d.deferred.uri))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn odata_date_accepts_plain_and_offset_forms() {
        let want = Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap();
        assert_eq!(odata_date::parse("/Date(1577836800000)/"), Some(want));
        assert_eq!(odata_date::parse("/Date(1577836800000+0000)/"), Some(want));
        assert_eq!(odata_date::parse("/Date(1577836800000-0130)/"), Some(want));
        assert_eq!(odata_date::parse("2020-01-01"), None);
        assert_eq!(odata_date::parse("/Date(abc)/"), None);
        assert_eq!(odata_date::parse("/Date(1577836800000+00)/"), None);
    }

    #[test]
    fn odata_date_accepts_pre_epoch_values() {
        let want = Utc.with_ymd_and_hms(1969, 12, 31, 0, 0, 0).unwrap();
        assert_eq!(odata_date::parse("/Date(-86400000)/"), Some(want));
    }

    #[test]
    fn header_reads_deferred_link_and_defaults() {
        let h: Header = serde_json::from_str(
            r#"{
                "ControllingArea": "A000",
                "CostCenter": "0010101101",
                "ValidityEndDate": "/Date(253402214400000)/",
                "IsBlkdForPrimaryCostsPosting": false,
                "to_Text": {"__deferred": {"uri": "https://host/API_COSTCENTER_SRV/A_CostCenter(x)/to_Text"}}
            }"#,
        )
        .unwrap();
        assert_eq!(h.controlling_area, "A000");
        assert_eq!(
            h.to_text.as_deref(),
            Some("https://host/API_COSTCENTER_SRV/A_CostCenter(x)/to_Text")
        );
        assert_eq!(h.is_blkd_for_primary_costs_posting, Some(false));
        assert_eq!(h.company_code, None);
        assert!(h.validity_end_date.is_some());
    }

    #[test]
    fn header_without_link_has_none() {
        let h: Header =
            serde_json::from_str(r#"{"ControllingArea":"A000","CostCenter":"1"}"#).unwrap();
        assert_eq!(h.to_text, None);
    }

    #[test]
    fn text_rejects_malformed_date() {
        let r = serde_json::from_str::<Text>(
            r#"{"ControllingArea":"A000","CostCenter":"1","ValidityEndDate":"tomorrow"}"#,
        );
        assert!(r.is_err());
    }

    #[test]
    fn empty_date_string_is_rejected_and_null_is_absent() {
        let empty = serde_json::from_str::<Text>(
            r#"{"ControllingArea":"A000","CostCenter":"1","ValidityEndDate":""}"#,
        );
        assert!(empty.is_err());

        let null = serde_json::from_str::<Text>(
            r#"{"ControllingArea":"A000","CostCenter":"1","ValidityEndDate":null}"#,
        )
        .unwrap();
        assert_eq!(null.validity_end_date, None);
    }
}
