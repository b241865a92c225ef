//! Browser implementation of [`EmploymentApi`] on top of `gloo-net`.

use async_trait::async_trait;
use common::{
    DataQuery, DataRecords, Endpoint, Insights, MwPrediction, PredictMwRequest, PredictRequest,
    SectorsResponse, TrendSeries, YearPrediction, YearsResponse,
};
use dashboard::{ApiError, EmploymentApi, Result};
use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::settings;

/// Talks to the employment API through the browser's `fetch`.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpApi {
    base: String,
}

impl HttpApi {
    pub fn new(base: impl Into<String>) -> Self {
        Self { base: base.into() }
    }

    /// Client pointed at the configured API base.
    pub fn from_settings() -> Self {
        Self::new(settings::get_settings().api_base)
    }

    /// Common GET request handler
    async fn get<'a, T, V>(
        &self,
        endpoint: Endpoint,
        query: impl IntoIterator<Item = (&'a str, V)>,
    ) -> Result<T>
    where
        T: DeserializeOwned,
        V: AsRef<str>,
    {
        let url = endpoint.url(&self.base);
        log::debug!("GET request to: {}", url);

        let response = Request::get(&url)
            .query(query)
            .send()
            .await
            .map_err(|e| ApiError::transport(endpoint, e))?;

        parse(endpoint, response).await
    }

    /// Common POST request handler
    async fn post<T, B>(&self, endpoint: Endpoint, body: &B) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize,
    {
        let url = endpoint.url(&self.base);
        log::debug!("POST request to: {}", url);

        let response = Request::post(&url)
            .json(body)
            .map_err(|e| ApiError::transport(endpoint, e))?
            .send()
            .await
            .map_err(|e| ApiError::transport(endpoint, e))?;

        parse(endpoint, response).await
    }
}

async fn parse<T: DeserializeOwned>(endpoint: Endpoint, response: Response) -> Result<T> {
    if !response.ok() {
        return Err(ApiError::status(endpoint, response.status()));
    }

    log::trace!("{} - Response received, parsing JSON", endpoint);
    let body = response
        .json()
        .await
        .map_err(|e| ApiError::decode(endpoint, e))?;

    log::info!("{} - Success", endpoint);
    Ok(body)
}

const NO_QUERY: [(&str, &str); 0] = [];

#[async_trait(?Send)]
impl EmploymentApi for HttpApi {
    async fn fetch_sectors(&self) -> Result<SectorsResponse> {
        self.get(Endpoint::Sectors, NO_QUERY).await
    }

    async fn fetch_years(&self) -> Result<YearsResponse> {
        self.get(Endpoint::Years, NO_QUERY).await
    }

    async fn fetch_trends(&self, sector: &str) -> Result<TrendSeries> {
        self.get(Endpoint::Trends, [("sector", sector)]).await
    }

    async fn fetch_insights(&self, sector: &str) -> Result<Insights> {
        self.get(Endpoint::Insights, [("sector", sector)]).await
    }

    async fn predict_jobs(&self, request: &PredictRequest) -> Result<YearPrediction> {
        self.post(Endpoint::Predict, request).await
    }

    async fn predict_jobs_by_mw(&self, request: &PredictMwRequest) -> Result<MwPrediction> {
        self.post(Endpoint::PredictMw, request).await
    }

    async fn fetch_data(&self, query: &DataQuery) -> Result<DataRecords> {
        self.get(Endpoint::Data, query.pairs()).await
    }
}
