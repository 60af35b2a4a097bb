mod common;
use costcenter::{CostCenterCaller, SdcInput};
use common::get_connector;
use tracing_subscriber::EnvFilter;

const DEFAULT_INPUT: &str = concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/examples/inputs/sdc_cost_center_sample.json"
);

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. Outcomes are tracing events; print them.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // 2. Load the input document (first argument, or the bundled sample).
    let path = std::env::args().nth(1).unwrap_or_else(|| DEFAULT_INPUT.to_string());
    let input = SdcInput::from_path(&path)?;

    // 3. Create connector (mock in CI when COSTCENTER_EXAMPLES_USE_MOCK is set).
    let connector = get_connector()?;

    // 4. Build the caller; the default sink logs through tracing.
    let caller = CostCenterCaller::builder().connector(connector).build()?;

    // 5. Run the selected branches and wait for all of them.
    println!(
        "Reading cost center {}/{} via {}...",
        input.cost_center.controlling_area,
        input.cost_center.cost_center,
        caller.connector_name()
    );
    caller.run_input(&input).await;

    Ok(())
}
