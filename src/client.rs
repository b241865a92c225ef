//! Native implementation of the employment API client.

use async_trait::async_trait;
use common::{
    DataQuery, DataRecords, Endpoint, Insights, MwPrediction, PredictMwRequest, PredictRequest,
    SectorsResponse, TrendSeries, YearPrediction, YearsResponse,
};
use dashboard::{ApiError, EmploymentApi, Result};
use serde::{de::DeserializeOwned, Serialize};
use tracing::{debug, instrument, trace};

/// `EmploymentApi` over `reqwest`.
#[derive(Debug, Clone)]
pub struct ReqwestApi {
    http: reqwest::Client,
    base: String,
}

impl ReqwestApi {
    pub fn new(base: impl Into<String>) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("renewjobs/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self {
            http,
            base: base.into(),
        })
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    async fn get<T, Q>(&self, endpoint: Endpoint, query: &Q) -> Result<T>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        let url = endpoint.url(&self.base);
        debug!(%url, "GET");
        let response = self
            .http
            .get(&url)
            .query(query)
            .send()
            .await
            .map_err(|e| ApiError::transport(endpoint, e))?;
        parse(endpoint, response).await
    }

    async fn post<T, B>(&self, endpoint: Endpoint, body: &B) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let url = endpoint.url(&self.base);
        debug!(%url, "POST");
        let response = self
            .http
            .post(&url)
            .json(body)
            .send()
            .await
            .map_err(|e| ApiError::transport(endpoint, e))?;
        parse(endpoint, response).await
    }
}

async fn parse<T: DeserializeOwned>(endpoint: Endpoint, response: reqwest::Response) -> Result<T> {
    let status = response.status();
    if !status.is_success() {
        return Err(ApiError::status(endpoint, status.as_u16()));
    }
    trace!(%endpoint, "Parsing response body");
    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::decode(endpoint, e))
}

const NO_QUERY: [(&str, &str); 0] = [];

#[async_trait(?Send)]
impl EmploymentApi for ReqwestApi {
    #[instrument(skip(self))]
    async fn fetch_sectors(&self) -> Result<SectorsResponse> {
        self.get(Endpoint::Sectors, &NO_QUERY).await
    }

    #[instrument(skip(self))]
    async fn fetch_years(&self) -> Result<YearsResponse> {
        self.get(Endpoint::Years, &NO_QUERY).await
    }

    #[instrument(skip(self))]
    async fn fetch_trends(&self, sector: &str) -> Result<TrendSeries> {
        self.get(Endpoint::Trends, &[("sector", sector)]).await
    }

    #[instrument(skip(self))]
    async fn fetch_insights(&self, sector: &str) -> Result<Insights> {
        self.get(Endpoint::Insights, &[("sector", sector)]).await
    }

    #[instrument(skip(self))]
    async fn predict_jobs(&self, request: &PredictRequest) -> Result<YearPrediction> {
        self.post(Endpoint::Predict, request).await
    }

    #[instrument(skip(self))]
    async fn predict_jobs_by_mw(&self, request: &PredictMwRequest) -> Result<MwPrediction> {
        self.post(Endpoint::PredictMw, request).await
    }

    #[instrument(skip(self))]
    async fn fetch_data(&self, query: &DataQuery) -> Result<DataRecords> {
        self.get(Endpoint::Data, &query.pairs()).await
    }
}
