pub mod header;
pub mod text;

use std::sync::Arc;

use futures::future::{self, BoxFuture, FutureExt};
use tracing::Instrument;

use costcenter_core::{Branch, CostCenterQuery, SdcInput, Selection, SelectionEntry};

use crate::CostCenterCaller;

impl CostCenterCaller {
    /// Run every branch named in `selection` and wait for all of them.
    ///
    /// One unit of work is started per selection entry, in order. Entries
    /// naming an unknown branch complete immediately without fetching.
    /// Duplicated names run their branch once per occurrence. Outcomes go
    /// to the configured sink; this call itself never fails and returns
    /// only after every unit has finished.
    #[tracing::instrument(
        name = "costcenter::run",
        skip_all,
        fields(
            connector = self.connector.key().as_str(),
            controlling_area = %query.controlling_area,
            cost_center = %query.cost_center,
            entries = selection.len(),
        )
    )]
    pub async fn run(&self, query: &CostCenterQuery, selection: &Selection) {
        let tasks: Vec<BoxFuture<'_, ()>> = selection
            .entries()
            .iter()
            .map(|entry| match entry {
                SelectionEntry::Branch(branch) => self.branch_task(*branch, query),
                SelectionEntry::Unrecognized(name) => {
                    tracing::debug!(name = %name, "skipping unrecognized branch");
                    future::ready(()).boxed()
                }
            })
            .collect();

        future::join_all(tasks).await;
    }

    /// Run the branches and query described by an input document.
    pub async fn run_input(&self, input: &SdcInput) {
        self.run(&input.query(), &input.selection()).await;
    }

    /// Run only the header branch.
    pub async fn header(&self, query: &CostCenterQuery) {
        self.branch_task(Branch::Header, query).await;
    }

    /// Run only the cost center name branch.
    pub async fn cost_center_name(&self, query: &CostCenterQuery) {
        self.branch_task(Branch::CostCenterName, query).await;
    }

    fn branch_task<'a>(&self, branch: Branch, query: &'a CostCenterQuery) -> BoxFuture<'a, ()> {
        let connector = Arc::clone(&self.connector);
        let sink = Arc::clone(&self.sink);
        let span = tracing::info_span!("costcenter::branch", branch = %branch);
        match branch {
            Branch::Header => header::run(connector, sink, query).instrument(span).boxed(),
            Branch::CostCenterName => text::run(connector, sink, query).instrument(span).boxed(),
            other => {
                tracing::warn!(branch = %other, "branch has no runner");
                future::ready(()).boxed()
            }
        }
    }
}
