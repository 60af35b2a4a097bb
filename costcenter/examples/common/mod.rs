use std::sync::Arc;

use costcenter::{CostCenterConnector, CostCenterError, Credential, SapConnector};

/// Environment variable holding the API Business Hub key.
pub const API_KEY_VAR: &str = "SAP_API_KEY";

/// Mock connector when `COSTCENTER_EXAMPLES_USE_MOCK` is set, otherwise
/// the SAP sandbox authenticated with `SAP_API_KEY`.
pub fn get_connector() -> Result<Arc<dyn CostCenterConnector>, CostCenterError> {
    if std::env::var("COSTCENTER_EXAMPLES_USE_MOCK").is_ok() {
        println!("--- (Using Mock Connector for CI) ---");
        return Ok(Arc::new(costcenter_mock::MockConnector::new()));
    }
    let credential = Credential::api_key_from_env(API_KEY_VAR)?;
    let sap = SapConnector::builder().credential(credential).build()?;
    Ok(Arc::new(sap))
}
