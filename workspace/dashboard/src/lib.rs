//! Platform-neutral core of the renewable-energy jobs dashboard: the API
//! contract, the state container and the derivations rendered by the views.

pub mod api;
pub mod charts;
pub mod controller;
pub mod display;
pub mod error;
pub mod export;
pub mod state;
pub mod status;

#[cfg(test)]
mod testing;

pub use api::EmploymentApi;
pub use controller::DashboardController;
pub use error::{ApiError, Result};
pub use state::{Action, DashboardState, Request, SectorData, Tab};
pub use status::{FetchStatus, OperationTracker};
