use anyhow::Result;
use dashboard::display::{
    format_growth, format_optional_count, format_percent, format_plain, MISSING,
};
use dashboard::Action;

use super::{controller, settled};

pub async fn insights(api_base: &str, sector: &str) -> Result<()> {
    let controller = controller(api_base)?;
    controller.dispatch(Action::SelectSector(sector.to_string())).await;
    let state = settled(&controller)?;

    if let Some(insights) = state.insights() {
        println!("Sector:               {}", sector);
        println!("Total growth:         {}", format_growth(insights.total_growth_percentage));
        println!("Latest jobs:          {}", format_optional_count(insights.latest_jobs));
        println!("Capacity (MW):        {}", format_optional_count(insights.latest_capacity));
        println!("Prediction accuracy:  {}", format_percent(insights.accuracy_percentage));
        println!("Data years:           {}", format_plain(insights.years_of_data));
        println!("Latest year:          {}", format_plain(insights.latest_year));
    }

    if let Some(trends) = state.trends() {
        println!();
        println!("{:>6} {:>16} {:>16} {:>16}", "Year", "Estimated", "Actual", "Capacity (MW)");
        for row in trends.rows() {
            println!(
                "{:>6} {:>16} {:>16} {:>16}",
                row.year.map(|y| y.to_string()).unwrap_or_else(|| MISSING.to_string()),
                format_optional_count(row.estimated_jobs),
                format_optional_count(row.actual_jobs),
                format_optional_count(row.installed_capacity),
            );
        }
    }
    Ok(())
}
