//! Contract of the employment API client.
//!
//! One request per call, no retries, no caching, no timeouts. Implementations
//! map a non-success status to [`crate::ApiError::Status`], a failed request
//! to [`crate::ApiError::Transport`] and a malformed body to
//! [`crate::ApiError::Decode`];
//! successful bodies are returned as parsed.
//!
//! The trait is `?Send` so the browser client (whose futures are tied to the
//! JS event loop) and the native client share it.

use async_trait::async_trait;
use common::{
    DataQuery, DataRecords, Insights, MwPrediction, PredictMwRequest, PredictRequest,
    SectorsResponse, TrendSeries, YearPrediction, YearsResponse,
};

use crate::error::Result;

#[async_trait(?Send)]
pub trait EmploymentApi {
    /// `GET /sectors`
    async fn fetch_sectors(&self) -> Result<SectorsResponse>;

    /// `GET /years`
    async fn fetch_years(&self) -> Result<YearsResponse>;

    /// `GET /trends?sector=..`
    async fn fetch_trends(&self, sector: &str) -> Result<TrendSeries>;

    /// `GET /insights?sector=..`
    async fn fetch_insights(&self, sector: &str) -> Result<Insights>;

    /// `POST /predict`
    async fn predict_jobs(&self, request: &PredictRequest) -> Result<YearPrediction>;

    /// `POST /predict-mw`
    async fn predict_jobs_by_mw(&self, request: &PredictMwRequest) -> Result<MwPrediction>;

    /// `GET /data` with optional filters
    async fn fetch_data(&self, query: &DataQuery) -> Result<DataRecords>;
}
