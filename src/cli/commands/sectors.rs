use anyhow::Result;
use common::sector_color;
use dashboard::display::{format_growth, format_optional_count};
use dashboard::Action;
use tracing::info;

use super::{controller, settled};

/// Prints sectors in dashboard order, marking the default selection, then the
/// available years and the default sector's headline figures.
pub async fn sectors(api_base: &str) -> Result<()> {
    let controller = controller(api_base)?;
    controller.dispatch(Action::LoadInitial).await;
    let state = settled(&controller)?;

    info!(count = state.sectors.len(), "Loaded sectors");
    for sector in &state.sectors {
        let marker = if *sector == state.selected_sector { "*" } else { " " };
        println!("{} {:<24} {}", marker, sector, sector_color(sector));
    }

    let years: Vec<String> = state.years.iter().map(|y| y.to_string()).collect();
    println!();
    println!("Years: {}", years.join(", "));

    if let Some(insights) = state.insights() {
        println!(
            "{}: {} jobs, {} MW, growth {}",
            state.selected_sector,
            format_optional_count(insights.latest_jobs),
            format_optional_count(insights.latest_capacity),
            format_growth(insights.total_growth_percentage),
        );
    }
    Ok(())
}
