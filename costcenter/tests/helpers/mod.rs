// Shared fixtures for the orchestrator tests: `use helpers::*;`
#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use costcenter::{
    Branch, CostCenterCaller, CostCenterConnector, CostCenterError, CostCenterQuery, Header,
    Outcome, RecordSink, Text, ToText,
};

/// Owned copy of one reported outcome.
#[derive(Debug, Clone, PartialEq)]
pub enum Recorded {
    Headers(Vec<Header>),
    ToTexts(Vec<ToText>),
    Texts(Vec<Text>),
    Failed(CostCenterError),
}

/// Sink that keeps every outcome in arrival order.
#[derive(Default)]
pub struct RecordingSink {
    entries: Mutex<Vec<(Branch, Recorded)>>,
}

impl RecordingSink {
    pub fn entries(&self) -> Vec<(Branch, Recorded)> {
        self.entries.lock().unwrap().clone()
    }

    pub fn for_branch(&self, branch: Branch) -> Vec<Recorded> {
        self.entries()
            .into_iter()
            .filter(|(b, _)| *b == branch)
            .map(|(_, r)| r)
            .collect()
    }
}

impl RecordSink for RecordingSink {
    fn record(&self, branch: Branch, outcome: Outcome<'_>) {
        let owned = match outcome {
            Outcome::Headers(r) => Recorded::Headers(r.to_vec()),
            Outcome::ToTexts(r) => Recorded::ToTexts(r.to_vec()),
            Outcome::Texts(r) => Recorded::Texts(r.to_vec()),
            Outcome::Failed(e) => Recorded::Failed(e.clone()),
        };
        self.entries.lock().unwrap().push((branch, owned));
    }
}

pub const A000: &str = "A000";
pub const CC: &str = "10101101";
pub const LINK: &str = "https://example/Text";

pub fn query() -> CostCenterQuery {
    CostCenterQuery::new(A000, CC, "EN", "Corporate")
}

pub fn caller(connector: Arc<dyn CostCenterConnector>) -> (CostCenterCaller, Arc<RecordingSink>) {
    let sink = Arc::new(RecordingSink::default());
    let caller = CostCenterCaller::builder()
        .connector(connector)
        .sink(sink.clone())
        .build()
        .expect("caller");
    (caller, sink)
}

pub fn header(cost_center: &str, link: Option<&str>) -> Header {
    Header {
        controlling_area: A000.into(),
        cost_center: cost_center.into(),
        validity_end_date: None,
        validity_start_date: None,
        company_code: None,
        business_area: None,
        cost_ctr_responsible_person_name: None,
        cost_ctr_responsible_user: None,
        cost_center_currency: None,
        profit_center: None,
        department: None,
        costing_sheet: None,
        functional_area: None,
        country: None,
        region: None,
        city_name: None,
        cost_center_standard_hier_area: None,
        cost_center_category: None,
        is_blkd_for_primary_costs_posting: None,
        is_blkd_for_secondary_costs_posting: None,
        is_blocked_for_revenue_posting: None,
        is_blocked_for_commitment_posting: None,
        is_blocked_for_plan_primary_costs: None,
        is_blocked_for_plan_secondary_costs: None,
        is_blocked_for_plan_revenues: None,
        cost_center_allocation_method: None,
        consumption_qty_is_recorded: None,
        language: None,
        cost_center_created_by_user: None,
        cost_center_creation_date: None,
        to_text: link.map(str::to_string),
    }
}

pub fn text(name: &str) -> Text {
    Text {
        controlling_area: A000.into(),
        cost_center: CC.into(),
        validity_end_date: None,
        language: Some("EN".into()),
        validity_start_date: None,
        cost_center_name: Some(name.into()),
        cost_center_description: None,
    }
}

pub fn to_text(language: &str) -> ToText {
    ToText {
        controlling_area: A000.into(),
        cost_center: CC.into(),
        validity_end_date: None,
        language: Some(language.into()),
        validity_start_date: None,
        cost_center_name: Some("Corporate Services".into()),
        cost_center_description: None,
    }
}
