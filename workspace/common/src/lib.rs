//! Common transport-layer types shared between the browser and native clients.
//! These structs mirror the employment API's request/response payloads so every
//! client deserializes responses without duplicating shapes.

mod endpoints;
mod sectors;

pub use endpoints::{DEFAULT_API_BASE, Endpoint};
pub use sectors::{
    DEFAULT_SECTOR, DEFAULT_SECTOR_COLOR, PRIORITY_SECTORS, SECTOR_COLORS, default_sector,
    order_sectors, sector_color,
};

use serde::{Deserialize, Serialize};

/// Years offered by the year-based predictor.
pub const PREDICTION_YEARS: [i32; 5] = [2026, 2027, 2028, 2029, 2030];

// ===================== Lists =====================

/// Response of `GET /sectors`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct SectorsResponse {
    pub sectors: Vec<String>,
}

/// Response of `GET /years`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct YearsResponse {
    pub years: Vec<i32>,
}

// ===================== Trends & insights =====================

/// Year-indexed employment history for one sector.
///
/// The four sequences are parallel: index `i` describes `years[i]`. The API is
/// trusted to keep them aligned; readers use [`TrendSeries::rows`] which stops
/// at the longest sequence and leaves missing cells empty.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct TrendSeries {
    #[serde(default)]
    pub sector: String,
    pub years: Vec<i32>,
    pub estimated_jobs: Vec<f64>,
    pub actual_jobs: Vec<f64>,
    pub installed_capacity: Vec<f64>,
}

/// One aligned row of a [`TrendSeries`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrendRow {
    pub year: Option<i32>,
    pub estimated_jobs: Option<f64>,
    pub actual_jobs: Option<f64>,
    pub installed_capacity: Option<f64>,
}

impl TrendSeries {
    /// Number of data points (length of the longest sequence).
    pub fn len(&self) -> usize {
        self.years
            .len()
            .max(self.estimated_jobs.len())
            .max(self.actual_jobs.len())
            .max(self.installed_capacity.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn rows(&self) -> impl Iterator<Item = TrendRow> + '_ {
        (0..self.len()).map(move |i| TrendRow {
            year: self.years.get(i).copied(),
            estimated_jobs: self.estimated_jobs.get(i).copied(),
            actual_jobs: self.actual_jobs.get(i).copied(),
            installed_capacity: self.installed_capacity.get(i).copied(),
        })
    }
}

/// Derived analytics for one sector, displayed as-is.
///
/// Every field is optional: the analytics backend computes them and different
/// deployments report different subsets.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Insights {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sector: Option<String>,
    #[serde(default)]
    pub total_growth_percentage: Option<f64>,
    #[serde(default)]
    pub latest_jobs: Option<f64>,
    #[serde(default)]
    pub latest_capacity: Option<f64>,
    #[serde(default)]
    pub accuracy_percentage: Option<f64>,
    #[serde(default)]
    pub years_of_data: Option<f64>,
    #[serde(default)]
    pub latest_year: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub average_estimation_deviation: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub capacity_job_correlation: Option<f64>,
}

// ===================== Predictions =====================

/// Request body for `POST /predict`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PredictRequest {
    pub sector: String,
    pub year: i32,
    pub installed_capacity: f64,
}

impl PredictRequest {
    /// Prediction request with no installed capacity hint.
    pub fn new(sector: impl Into<String>, year: i32) -> Self {
        Self {
            sector: sector.into(),
            year,
            installed_capacity: 0.0,
        }
    }
}

/// Result of a year-based prediction.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct YearPrediction {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sector: Option<String>,
    pub year: i32,
    pub predicted_jobs: f64,
    #[serde(default)]
    pub growth_rate: f64,
    #[serde(default)]
    pub model_type: String,
}

/// Request body for `POST /predict-mw`.
///
/// A non-finite capacity serializes as JSON `null`; the backend decides what
/// to do with it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PredictMwRequest {
    pub sector: String,
    pub mw_capacity: f64,
}

/// Result of a capacity-based prediction.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MwPrediction {
    pub sector: String,
    #[serde(default)]
    pub mw_capacity: Option<f64>,
    pub predicted_jobs: f64,
    #[serde(default)]
    pub model_type: String,
}

// ===================== Raw records =====================

/// Optional filters for `GET /data`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct DataQuery {
    pub sector: Option<String>,
    pub year: Option<i32>,
}

impl DataQuery {
    /// Query pairs for the filters that are set, in `sector`, `year` order.
    pub fn pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(sector) = self.sector.as_deref().filter(|s| !s.is_empty()) {
            pairs.push(("sector", sector.to_string()));
        }
        if let Some(year) = self.year {
            pairs.push(("year", year.to_string()));
        }
        pairs
    }
}

/// Raw employment records; the schema is owned by the backend.
pub type DataRecords = Vec<serde_json::Value>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trend_series_deserializes_without_sector() {
        let body = r#"{"years":[2020],"estimated_jobs":[1.0],"actual_jobs":[2.0],"installed_capacity":[3.0]}"#;
        let series: TrendSeries = serde_json::from_str(body).unwrap();
        assert_eq!(series.sector, "");
        assert_eq!(series.len(), 1);
    }

    #[test]
    fn test_trend_rows_pad_short_sequences() {
        let series = TrendSeries {
            sector: "Wind".to_string(),
            years: vec![2020, 2021],
            estimated_jobs: vec![10.0, 11.0],
            actual_jobs: vec![9.0],
            installed_capacity: vec![5.0, 6.0],
        };

        let rows: Vec<TrendRow> = series.rows().collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1].year, Some(2021));
        assert_eq!(rows[1].actual_jobs, None);
    }

    #[test]
    fn test_insights_tolerate_missing_fields() {
        let body = r#"{"total_growth_percentage":12.5,"latest_jobs":1000,"average_estimation_deviation":3.2}"#;
        let insights: Insights = serde_json::from_str(body).unwrap();
        assert_eq!(insights.total_growth_percentage, Some(12.5));
        assert_eq!(insights.latest_jobs, Some(1000.0));
        assert_eq!(insights.accuracy_percentage, None);
        assert_eq!(insights.average_estimation_deviation, Some(3.2));
    }

    #[test]
    fn test_predict_request_defaults_installed_capacity() {
        let request = PredictRequest::new("Solar", 2027);
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"sector": "Solar", "year": 2027, "installed_capacity": 0.0})
        );
    }

    #[test]
    fn test_mw_request_with_unparsable_capacity_sends_null() {
        let request = PredictMwRequest {
            sector: "Wind".to_string(),
            mw_capacity: f64::NAN,
        };
        let json = serde_json::to_value(&request).unwrap();
        assert!(json["mw_capacity"].is_null());
    }

    #[test]
    fn test_data_query_pairs() {
        assert!(DataQuery::default().pairs().is_empty());

        let query = DataQuery {
            sector: Some("Small Hydro".to_string()),
            year: Some(2022),
        };
        assert_eq!(
            query.pairs(),
            vec![
                ("sector", "Small Hydro".to_string()),
                ("year", "2022".to_string())
            ]
        );
    }
}
