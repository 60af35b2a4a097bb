pub mod headers;
pub mod texts;

use chrono::{DateTime, TimeZone, Utc};

/// Controlling area every fixture belongs to.
pub const CONTROLLING_AREA: &str = "A000";

/// Root the fixture `to_Text` links point under.
pub const SERVICE_ROOT: &str = "mock://costcenter/API_COSTCENTER_SRV/";

/// Cost centers with fixture data: (cost center, company code, EN name, DE name).
pub const COST_CENTERS: &[(&str, &str, &str, &str)] = &[
    ("10101101", "1010", "Corporate Services", "Zentrale Dienste"),
    ("10101201", "1010", "Finance", "Finanzen"),
    ("10101301", "1010", "Marketing", "Marketing"),
    ("10102101", "1020", "Production Line 1", "Fertigungslinie 1"),
];

pub fn valid_from() -> Option<DateTime<Utc>> {
    Utc.with_ymd_and_hms(2000, 1, 1, 0, 0, 0).single()
}

pub fn valid_to() -> Option<DateTime<Utc>> {
    Utc.with_ymd_and_hms(9999, 12, 31, 0, 0, 0).single()
}

/// Navigation link of a fixture header.
pub fn to_text_link(cost_center: &str) -> String {
    format!(
        "{SERVICE_ROOT}A_CostCenter(ControllingArea='{CONTROLLING_AREA}',CostCenter='{cost_center}',ValidityEndDate=datetime'9999-12-31T00%3A00%3A00')/to_Text"
    )
}

/// Cost center key embedded in a navigation link.
pub fn cost_center_in_link(link: &str) -> Option<&str> {
    const KEY: &str = "CostCenter='";
    let start = link.find(KEY)? + KEY.len();
    let len = link[start..].find('\'')?;
    Some(&link[start..start + len])
}
