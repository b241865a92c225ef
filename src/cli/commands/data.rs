use anyhow::Result;
use common::DataQuery;
use dashboard::EmploymentApi;

use super::controller;

/// Prints raw records from `GET /data`, optionally filtered.
pub async fn data(api_base: &str, sector: Option<String>, year: Option<i32>) -> Result<()> {
    let controller = controller(api_base)?;
    let records = controller.api().fetch_data(&DataQuery { sector, year }).await?;
    println!("{}", serde_json::to_string_pretty(&records)?);
    Ok(())
}
