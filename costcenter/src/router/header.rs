use std::sync::Arc;

use costcenter_core::{
    Branch, CostCenterConnector, CostCenterError, CostCenterQuery, Header, Outcome, RecordSink,
};

/// Header branch: headers, then the texts behind the first header's link.
pub async fn run(
    connector: Arc<dyn CostCenterConnector>,
    sink: Arc<dyn RecordSink>,
    query: &CostCenterQuery,
) {
    let headers = match connector
        .headers(&query.controlling_area, &query.cost_center)
        .await
    {
        Ok(headers) => headers,
        Err(e) => return sink.record(Branch::Header, Outcome::Failed(&e)),
    };
    sink.record(Branch::Header, Outcome::Headers(&headers));

    let link = match first_link(&headers) {
        Ok(link) => link,
        Err(e) => return sink.record(Branch::Header, Outcome::Failed(&e)),
    };
    match connector.to_texts(link).await {
        Ok(texts) => sink.record(Branch::Header, Outcome::ToTexts(&texts)),
        Err(e) => sink.record(Branch::Header, Outcome::Failed(&e)),
    }
}

/// The `to_Text` link of the first header. A blank link counts as missing.
pub fn first_link(headers: &[Header]) -> Result<&str, CostCenterError> {
    let first = headers.first().ok_or_else(|| {
        CostCenterError::Precondition("header result is empty; no to_Text link to follow".into())
    })?;
    first
        .to_text
        .as_deref()
        .filter(|link| !link.trim().is_empty())
        .ok_or_else(|| {
            CostCenterError::Precondition(format!(
                "header {}/{} has no to_Text link",
                first.controlling_area, first.cost_center
            ))
        })
}
