use std::fmt;

/// Base URL of the hosted employment API.
pub const DEFAULT_API_BASE: &str = "https://renewable-jobs-backend.onrender.com/api/jobs";

/// Endpoints of the employment API, relative to the base URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    Sectors,
    Years,
    Trends,
    Insights,
    Predict,
    PredictMw,
    Data,
}

impl Endpoint {
    pub fn path(self) -> &'static str {
        match self {
            Endpoint::Sectors => "/sectors",
            Endpoint::Years => "/years",
            Endpoint::Trends => "/trends",
            Endpoint::Insights => "/insights",
            Endpoint::Predict => "/predict",
            Endpoint::PredictMw => "/predict-mw",
            Endpoint::Data => "/data",
        }
    }

    /// Operation name used in the generic failure message ("Failed to ...").
    pub fn operation(self) -> &'static str {
        match self {
            Endpoint::Sectors => "fetch sectors",
            Endpoint::Years => "fetch years",
            Endpoint::Trends => "fetch trends",
            Endpoint::Insights => "fetch insights",
            Endpoint::Predict => "predict jobs",
            Endpoint::PredictMw => "predict jobs by MW",
            Endpoint::Data => "fetch data",
        }
    }

    /// Full URL of this endpoint under `base`. A trailing slash on the base is ignored.
    pub fn url(self, base: &str) -> String {
        format!("{}{}", base.trim_end_matches('/'), self.path())
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_url_joins_base() {
        assert_eq!(
            Endpoint::PredictMw.url("http://localhost:5000/api/jobs/"),
            "http://localhost:5000/api/jobs/predict-mw"
        );
        assert_eq!(
            Endpoint::Sectors.url(DEFAULT_API_BASE),
            "https://renewable-jobs-backend.onrender.com/api/jobs/sectors"
        );
    }
}
