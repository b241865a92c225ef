use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use common::DEFAULT_API_BASE;

pub mod commands;

use crate::config::{DEFAULT_BIND_ADDRESS, DEFAULT_DIST_DIR};

#[derive(Parser)]
#[command(name = "renewjobs")]
#[command(about = "India renewable-energy jobs dashboard: web host and terminal client")]
#[command(version)]
pub struct Cli {
    /// Base URL of the employment API
    #[arg(long, global = true, env = "RENEWJOBS_API_BASE", default_value = DEFAULT_API_BASE)]
    pub api_base: String,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Serve the built dashboard front-end
    Serve {
        /// Bind address for the web server
        ///
        /// Format: IP:PORT (e.g., 0.0.0.0:8080, 127.0.0.1:3000)
        #[arg(short, long, env = "BIND_ADDRESS", default_value = DEFAULT_BIND_ADDRESS)]
        bind: String,

        /// Directory holding the built front-end (index.html, wasm, js)
        #[arg(short, long, env = "RENEWJOBS_DIST_DIR", default_value = DEFAULT_DIST_DIR)]
        dist: PathBuf,
    },
    /// List sectors in dashboard order and the available years
    Sectors,
    /// Show insights and the trend table of a sector
    Insights {
        #[arg(short, long, value_parser = non_empty)]
        sector: String,
    },
    /// Predict jobs for a sector in a given year
    Predict {
        #[arg(short, long, value_parser = non_empty)]
        sector: String,

        #[arg(short, long)]
        year: i32,
    },
    /// Predict jobs for a sector from an installed MW capacity
    PredictMw {
        #[arg(short, long, value_parser = non_empty)]
        sector: String,

        /// Capacity in MW, sent as typed
        #[arg(short, long)]
        capacity: String,
    },
    /// Write the trend series of a sector as `<sector>_employment_data.csv`
    Export {
        #[arg(short, long, value_parser = non_empty)]
        sector: String,

        #[arg(short, long, default_value = ".")]
        output_dir: PathBuf,
    },
    /// Print raw employment records as JSON
    Data {
        #[arg(short, long)]
        sector: Option<String>,

        #[arg(short, long)]
        year: Option<i32>,
    },
}

fn non_empty(value: &str) -> Result<String, String> {
    if value.trim().is_empty() {
        Err("value must not be empty".to_string())
    } else {
        Ok(value.to_string())
    }
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        let api_base = self.api_base;
        match self.command {
            Commands::Serve { bind, dist } => commands::serve(&bind, dist).await,
            Commands::Sectors => commands::sectors(&api_base).await,
            Commands::Insights { sector } => commands::insights(&api_base, &sector).await,
            Commands::Predict { sector, year } => commands::predict(&api_base, &sector, year).await,
            Commands::PredictMw { sector, capacity } => {
                commands::predict_mw(&api_base, &sector, &capacity).await
            }
            Commands::Export { sector, output_dir } => {
                commands::export(&api_base, &sector, &output_dir).await
            }
            Commands::Data { sector, year } => commands::data(&api_base, sector, year).await,
        }
    }
}
