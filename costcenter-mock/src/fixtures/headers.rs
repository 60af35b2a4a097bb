use costcenter_core::Header;

use super::{COST_CENTERS, CONTROLLING_AREA, to_text_link, valid_from, valid_to};

/// Cost center whose header carries no `to_Text` link.
pub const NO_LINK: &str = "NOLINK";

pub fn by_key(controlling_area: &str, cost_center: &str) -> Vec<Header> {
    if controlling_area != CONTROLLING_AREA {
        return Vec::new();
    }
    if cost_center == NO_LINK {
        return vec![header(NO_LINK, "1010", None)];
    }
    COST_CENTERS
        .iter()
        .filter(|(cc, ..)| *cc == cost_center)
        .map(|(cc, company, ..)| header(cc, company, Some(to_text_link(cc))))
        .collect()
}

fn header(cost_center: &str, company_code: &str, to_text: Option<String>) -> Header {
    Header {
        controlling_area: CONTROLLING_AREA.to_string(),
        cost_center: cost_center.to_string(),
        validity_end_date: valid_to(),
        validity_start_date: valid_from(),
        company_code: Some(company_code.to_string()),
        business_area: None,
        cost_ctr_responsible_person_name: Some("Mock Owner".to_string()),
        cost_ctr_responsible_user: Some("MOCKUSER".to_string()),
        cost_center_currency: Some("EUR".to_string()),
        profit_center: Some("YB101".to_string()),
        department: None,
        costing_sheet: None,
        functional_area: None,
        country: Some("DE".to_string()),
        region: None,
        city_name: Some("Walldorf".to_string()),
        cost_center_standard_hier_area: Some("A000_1010".to_string()),
        cost_center_category: Some("E".to_string()),
        is_blkd_for_primary_costs_posting: Some(false),
        is_blkd_for_secondary_costs_posting: Some(false),
        is_blocked_for_revenue_posting: Some(false),
        is_blocked_for_commitment_posting: Some(false),
        is_blocked_for_plan_primary_costs: Some(false),
        is_blocked_for_plan_secondary_costs: Some(false),
        is_blocked_for_plan_revenues: Some(false),
        cost_center_allocation_method: None,
        consumption_qty_is_recorded: Some(false),
        language: Some("EN".to_string()),
        cost_center_created_by_user: Some("MOCKUSER".to_string()),
        cost_center_creation_date: valid_from(),
        to_text,
    }
}
