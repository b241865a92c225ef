pub mod chart;
pub mod mw_prediction;
pub mod prediction;
pub mod selectors;
pub mod stats;
pub mod tabs;
pub mod view;

pub use view::Dashboard;
