use std::sync::Arc;

use costcenter_core::{Branch, CostCenterConnector, CostCenterQuery, Outcome, RecordSink};

/// Text branch: one filtered fetch of cost center texts.
pub async fn run(
    connector: Arc<dyn CostCenterConnector>,
    sink: Arc<dyn RecordSink>,
    query: &CostCenterQuery,
) {
    match connector
        .texts(&query.language, &query.cost_center_name)
        .await
    {
        Ok(texts) => sink.record(Branch::CostCenterName, Outcome::Texts(&texts)),
        Err(e) => sink.record(Branch::CostCenterName, Outcome::Failed(&e)),
    }
}
