//! In-memory [`EmploymentApi`] for controller tests.

use std::cell::RefCell;
use std::collections::{HashMap, HashSet};
use std::time::Duration;

use async_trait::async_trait;
use common::{
    DataQuery, DataRecords, Endpoint, Insights, MwPrediction, PredictMwRequest, PredictRequest,
    SectorsResponse, TrendSeries, YearPrediction, YearsResponse,
};

use crate::api::EmploymentApi;
use crate::error::{ApiError, Result};

/// Answers from fixed data, records every call, and can fail or delay on demand.
#[derive(Default)]
pub struct ScriptedApi {
    sectors: Vec<String>,
    failing: HashSet<Endpoint>,
    sector_delays: HashMap<String, Duration>,
    calls: RefCell<Vec<(Endpoint, String)>>,
}

impl ScriptedApi {
    pub fn with_sectors(sectors: &[&str]) -> Self {
        Self {
            sectors: sectors.iter().map(|s| s.to_string()).collect(),
            ..Default::default()
        }
    }

    /// Makes `endpoint` answer with HTTP 500.
    pub fn failing(mut self, endpoint: Endpoint) -> Self {
        self.failing.insert(endpoint);
        self
    }

    /// Delays trend responses for `sector`.
    pub fn delay_sector(mut self, sector: &str, delay: Duration) -> Self {
        self.sector_delays.insert(sector.to_string(), delay);
        self
    }

    /// Arguments of the recorded calls to `endpoint`, in call order.
    pub fn calls_to(&self, endpoint: Endpoint) -> Vec<String> {
        self.calls
            .borrow()
            .iter()
            .filter(|(e, _)| *e == endpoint)
            .map(|(_, args)| args.clone())
            .collect()
    }

    fn record(&self, endpoint: Endpoint, args: String) -> Result<()> {
        self.calls.borrow_mut().push((endpoint, args));
        if self.failing.contains(&endpoint) {
            return Err(ApiError::status(endpoint, 500));
        }
        Ok(())
    }
}

#[async_trait(?Send)]
impl EmploymentApi for ScriptedApi {
    async fn fetch_sectors(&self) -> Result<SectorsResponse> {
        self.record(Endpoint::Sectors, String::new())?;
        Ok(SectorsResponse {
            sectors: self.sectors.clone(),
        })
    }

    async fn fetch_years(&self) -> Result<YearsResponse> {
        self.record(Endpoint::Years, String::new())?;
        Ok(YearsResponse {
            years: vec![2020, 2021, 2022],
        })
    }

    async fn fetch_trends(&self, sector: &str) -> Result<TrendSeries> {
        self.record(Endpoint::Trends, sector.to_string())?;
        if let Some(delay) = self.sector_delays.get(sector) {
            tokio::time::sleep(*delay).await;
        }
        Ok(TrendSeries {
            sector: sector.to_string(),
            years: vec![2020, 2021, 2022],
            estimated_jobs: vec![1000.0, 1200.0, 1500.0],
            actual_jobs: vec![950.0, 1250.0, 1480.0],
            installed_capacity: vec![40.0, 55.0, 70.0],
        })
    }

    async fn fetch_insights(&self, sector: &str) -> Result<Insights> {
        self.record(Endpoint::Insights, sector.to_string())?;
        Ok(Insights {
            sector: Some(sector.to_string()),
            total_growth_percentage: Some(55.79),
            latest_jobs: Some(1480.0),
            latest_capacity: Some(70.0),
            accuracy_percentage: Some(97.2),
            years_of_data: Some(3.0),
            latest_year: Some(2022.0),
            ..Default::default()
        })
    }

    async fn predict_jobs(&self, request: &PredictRequest) -> Result<YearPrediction> {
        self.record(
            Endpoint::Predict,
            format!("{}:{}:{}", request.sector, request.year, request.installed_capacity),
        )?;
        Ok(YearPrediction {
            sector: Some(request.sector.clone()),
            year: request.year,
            predicted_jobs: 1800.0,
            growth_rate: 18.4,
            model_type: "linear_extrapolation".to_string(),
        })
    }

    async fn predict_jobs_by_mw(&self, request: &PredictMwRequest) -> Result<MwPrediction> {
        self.record(
            Endpoint::PredictMw,
            format!("{}:{}", request.sector, request.mw_capacity),
        )?;
        Ok(MwPrediction {
            sector: request.sector.clone(),
            mw_capacity: Some(request.mw_capacity),
            predicted_jobs: request.mw_capacity * 24.0,
            model_type: "simple_linear_mw".to_string(),
        })
    }

    async fn fetch_data(&self, query: &DataQuery) -> Result<DataRecords> {
        self.record(Endpoint::Data, format!("{:?}", query.pairs()))?;
        Ok(Vec::new())
    }
}
