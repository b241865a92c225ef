use std::path::Path;

use anyhow::{Context, Result};
use dashboard::Action;
use tracing::info;

use super::{controller, settled};

/// Loads the sector and writes its trend series as CSV into `output_dir`.
pub async fn export(api_base: &str, sector: &str, output_dir: &Path) -> Result<()> {
    let controller = controller(api_base)?;
    controller.dispatch(Action::SelectSector(sector.to_string())).await;
    let state = settled(&controller)?;

    let export = state
        .csv_export()
        .context("No trend data was loaded for the sector")?;
    let path = output_dir.join(&export.file_name);
    tokio::fs::write(&path, &export.content)
        .await
        .with_context(|| format!("Failed to write {}", path.display()))?;

    info!(path = %path.display(), "Exported employment data");
    println!("{}", path.display());
    Ok(())
}
