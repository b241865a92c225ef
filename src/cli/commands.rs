use anyhow::{bail, Result};
use dashboard::{DashboardController, DashboardState};

use crate::client::ReqwestApi;

pub mod data;
pub mod export;
pub mod insights;
pub mod predict;
pub mod sectors;
pub mod serve;

pub use data::data;
pub use export::export;
pub use insights::insights;
pub use predict::{predict, predict_mw};
pub use sectors::sectors;
pub use serve::serve;

/// Dashboard controller backed by the native client.
pub fn controller(api_base: &str) -> Result<DashboardController<ReqwestApi>> {
    let api = ReqwestApi::new(api_base)?;
    tracing::debug!(base = api.base(), "Using employment API");
    Ok(DashboardController::new(api))
}

/// The state after a command, or the banner message it left as an error.
pub fn settled(controller: &DashboardController<ReqwestApi>) -> Result<DashboardState> {
    let state = controller.snapshot();
    if let Some(message) = &state.error {
        bail!("{}", message);
    }
    Ok(state)
}
