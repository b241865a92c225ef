use anyhow::{bail, Result};
use common::PREDICTION_YEARS;
use dashboard::display::{format_count, format_growth, format_optional_count};
use dashboard::Action;
use tracing::warn;

use super::{controller, settled};

pub async fn predict(api_base: &str, sector: &str, year: i32) -> Result<()> {
    if !PREDICTION_YEARS.contains(&year) {
        warn!(year, "Year is outside the dashboard's prediction range {:?}", PREDICTION_YEARS);
    }

    let controller = controller(api_base)?;
    controller.dispatch(Action::SelectSector(sector.to_string())).await;
    controller.dispatch(Action::SelectYear(Some(year))).await;
    controller.dispatch(Action::PredictYear).await;
    let state = settled(&controller)?;

    let Some(prediction) = state.prediction else {
        bail!("No prediction was produced");
    };
    println!("Prediction for {} ({} sector)", prediction.year, sector);
    println!("  {} jobs", format_count(prediction.predicted_jobs));
    println!("  Growth: {}", format_growth(Some(prediction.growth_rate)));
    println!("  Model:  {}", prediction.model_type);
    Ok(())
}

pub async fn predict_mw(api_base: &str, sector: &str, capacity: &str) -> Result<()> {
    let controller = controller(api_base)?;
    controller.dispatch(Action::SelectMwSector(sector.to_string())).await;
    controller.dispatch(Action::SetMwCapacity(capacity.to_string())).await;
    if !controller.with_state(|s| s.can_predict_mw()) {
        bail!("A sector and a capacity are required");
    }
    controller.dispatch(Action::PredictMw).await;
    let state = settled(&controller)?;

    let Some(prediction) = state.mw_prediction else {
        bail!("No prediction was produced");
    };
    println!("{} jobs", format_count(prediction.predicted_jobs));
    println!("  Sector:      {}", prediction.sector);
    println!("  MW Capacity: {} MW", format_optional_count(prediction.mw_capacity));
    println!("  Model:       {}", prediction.model_type);
    Ok(())
}
