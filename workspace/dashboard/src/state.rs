//! Dashboard state container.
//!
//! All view state lives in [`DashboardState`] and changes only through
//! [`DashboardState::apply`]. Applying an [`Action`] may yield a [`Request`]:
//! the I/O the caller has to perform, whose outcome comes back as another
//! action stamped with the request's generation.

use common::{
    Insights, MwPrediction, PredictMwRequest, PredictRequest, TrendSeries, YearPrediction,
    default_sector, order_sectors,
};
use tracing::{debug, info, trace, warn};

use crate::charts::{self, ChartData, DistributionSlice};
use crate::error::ApiError;
use crate::export::{self, CsvExport};
use crate::status::OperationTracker;

pub const INITIAL_LOAD_FAILED: &str = "Failed to load initial data";
pub const SECTOR_LOAD_FAILED: &str = "Failed to load sector data";
pub const YEAR_PREDICTION_FAILED: &str = "Failed to generate prediction";
pub const MW_PREDICTION_FAILED: &str = "Failed to generate MW-based prediction";

/// Display tabs of the main panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Overview,
    Trends,
    Comparison,
    Distribution,
    MwPrediction,
}

impl Tab {
    pub const ALL: [Tab; 5] = [
        Tab::Overview,
        Tab::Trends,
        Tab::Comparison,
        Tab::Distribution,
        Tab::MwPrediction,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Tab::Overview => "Overview",
            Tab::Trends => "Trends",
            Tab::Comparison => "Comparison",
            Tab::Distribution => "Distribution",
            Tab::MwPrediction => "MW Prediction",
        }
    }
}

/// Trend series and insights fetched together for one sector.
#[derive(Debug, Clone, PartialEq)]
pub struct SectorData {
    /// Sector the request was issued for.
    pub sector: String,
    pub trends: TrendSeries,
    pub insights: Insights,
}

/// I/O requested by the state container.
#[derive(Debug, Clone, PartialEq)]
pub enum Request {
    /// Fetch sectors and years together.
    LoadInitial { generation: u64 },
    /// Fetch trends and insights together.
    LoadSector { sector: String, generation: u64 },
    PredictYear { request: PredictRequest, generation: u64 },
    PredictMw { request: PredictMwRequest, generation: u64 },
}

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    ToggleDarkMode,
    SelectTab(Tab),

    LoadInitial,
    InitialLoaded {
        generation: u64,
        sectors: Vec<String>,
        years: Vec<i32>,
    },
    InitialLoadFailed {
        generation: u64,
        error: ApiError,
    },

    SelectSector(String),
    SectorLoaded {
        generation: u64,
        data: SectorData,
    },
    SectorLoadFailed {
        generation: u64,
        error: ApiError,
    },

    SelectYear(Option<i32>),
    PredictYear,
    YearPredicted {
        generation: u64,
        prediction: YearPrediction,
    },
    YearPredictionFailed {
        generation: u64,
        error: ApiError,
    },

    SelectMwSector(String),
    SetMwCapacity(String),
    PredictMw,
    MwPredicted {
        generation: u64,
        prediction: MwPrediction,
    },
    MwPredictionFailed {
        generation: u64,
        error: ApiError,
    },
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct DashboardState {
    pub dark_mode: bool,
    pub active_tab: Tab,

    /// Sectors in display order.
    pub sectors: Vec<String>,
    pub years: Vec<i32>,

    /// Sector of the trend and insights view. Empty until the first load.
    pub selected_sector: String,
    /// Year of the year-based predictor.
    pub selected_year: Option<i32>,
    pub sector_data: Option<SectorData>,
    /// Last year-based prediction. Not cleared when the selectors change.
    pub prediction: Option<YearPrediction>,

    /// Sector of the capacity-based predictor, independent of `selected_sector`.
    pub mw_sector: String,
    /// Capacity input exactly as typed.
    pub mw_capacity: String,
    /// Last capacity-based prediction. Not cleared when the inputs change.
    pub mw_prediction: Option<MwPrediction>,

    /// Banner message of the latest failed operation.
    pub error: Option<String>,

    pub initial_load: OperationTracker,
    pub sector_load: OperationTracker,
    pub year_predict: OperationTracker,
    pub mw_predict: OperationTracker,
}

/// Capacity as submitted.
///
/// Reads the longest numeric prefix after leading whitespace, so `"250MW"` is
/// 250. Input without a numeric prefix is sent as NaN.
pub fn parse_capacity(input: &str) -> f64 {
    let input = input.trim_start();
    let bytes = input.as_bytes();
    let mut end = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }
    if input[end..].starts_with("Infinity") {
        return input[..end + "Infinity".len()].parse().unwrap_or(f64::NAN);
    }

    let digits = |from: usize| {
        bytes[from..]
            .iter()
            .take_while(|b| b.is_ascii_digit())
            .count()
    };
    let integer = digits(end);
    end += integer;
    let mut fraction = 0;
    if bytes.get(end) == Some(&b'.') {
        fraction = digits(end + 1);
        if integer > 0 || fraction > 0 {
            end += 1 + fraction;
        }
    }
    if integer == 0 && fraction == 0 {
        return f64::NAN;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exponent = end + 1;
        if matches!(bytes.get(exponent), Some(b'+' | b'-')) {
            exponent += 1;
        }
        let exponent_digits = digits(exponent);
        if exponent_digits > 0 {
            end = exponent + exponent_digits;
        }
    }

    input[..end].parse().unwrap_or(f64::NAN)
}

impl DashboardState {
    /// Applies one action and returns the request it triggers, if any.
    pub fn apply(&mut self, action: Action) -> Option<Request> {
        trace!(?action, "Applying dashboard action");
        match action {
            Action::ToggleDarkMode => {
                self.dark_mode = !self.dark_mode;
                None
            }
            Action::SelectTab(tab) => {
                self.active_tab = tab;
                None
            }

            Action::LoadInitial => self.load_initial(),
            Action::InitialLoaded {
                generation,
                sectors,
                years,
            } => self.initial_loaded(generation, sectors, years),
            Action::InitialLoadFailed { generation, error } => {
                self.record_failure(generation, error, Operation::Initial);
                None
            }

            Action::SelectSector(sector) => self.select_sector(sector),
            Action::SectorLoaded { generation, data } => {
                if self.sector_load.succeed(generation) {
                    debug!(sector = %data.sector, points = data.trends.len(), "Sector data loaded");
                    self.sector_data = Some(data);
                    self.error = None;
                } else {
                    debug!(generation, "Discarding superseded sector data");
                }
                None
            }
            Action::SectorLoadFailed { generation, error } => {
                self.record_failure(generation, error, Operation::Sector);
                None
            }

            Action::SelectYear(year) => {
                self.selected_year = year;
                None
            }
            Action::PredictYear => self.predict_year(),
            Action::YearPredicted {
                generation,
                prediction,
            } => {
                if self.year_predict.succeed(generation) {
                    info!(year = prediction.year, jobs = prediction.predicted_jobs, "Year prediction received");
                    self.prediction = Some(prediction);
                    self.error = None;
                }
                None
            }
            Action::YearPredictionFailed { generation, error } => {
                self.record_failure(generation, error, Operation::YearPrediction);
                None
            }

            Action::SelectMwSector(sector) => {
                self.mw_sector = sector;
                None
            }
            Action::SetMwCapacity(capacity) => {
                self.mw_capacity = capacity;
                None
            }
            Action::PredictMw => self.predict_mw(),
            Action::MwPredicted {
                generation,
                prediction,
            } => {
                if self.mw_predict.succeed(generation) {
                    info!(sector = %prediction.sector, jobs = prediction.predicted_jobs, "MW prediction received");
                    self.mw_prediction = Some(prediction);
                    self.error = None;
                }
                None
            }
            Action::MwPredictionFailed { generation, error } => {
                self.record_failure(generation, error, Operation::MwPrediction);
                None
            }
        }
    }

    fn load_initial(&mut self) -> Option<Request> {
        let status = self.initial_load.status();
        if status.is_loading() || status.is_success() {
            debug!("Initial data already requested");
            return None;
        }
        let generation = self.initial_load.begin();
        Some(Request::LoadInitial { generation })
    }

    fn initial_loaded(
        &mut self,
        generation: u64,
        sectors: Vec<String>,
        years: Vec<i32>,
    ) -> Option<Request> {
        if !self.initial_load.succeed(generation) {
            return None;
        }
        self.sectors = order_sectors(sectors);
        self.years = years;
        self.error = None;
        info!(sectors = self.sectors.len(), years = self.years.len(), "Initial data loaded");

        let default = default_sector(&self.sectors).map(str::to_owned)?;
        self.select_sector(default)
    }

    fn select_sector(&mut self, sector: String) -> Option<Request> {
        if sector == self.selected_sector {
            trace!(%sector, "Sector unchanged");
            return None;
        }
        self.selected_sector = sector;
        if self.selected_sector.is_empty() {
            return None;
        }
        let generation = self.sector_load.begin();
        debug!(sector = %self.selected_sector, generation, "Requesting sector data");
        Some(Request::LoadSector {
            sector: self.selected_sector.clone(),
            generation,
        })
    }

    fn predict_year(&mut self) -> Option<Request> {
        let Some(year) = self.selected_year.filter(|_| !self.selected_sector.is_empty()) else {
            debug!("Year prediction needs both a sector and a year");
            return None;
        };
        let generation = self.year_predict.begin();
        Some(Request::PredictYear {
            request: PredictRequest::new(self.selected_sector.clone(), year),
            generation,
        })
    }

    fn predict_mw(&mut self) -> Option<Request> {
        if self.mw_sector.is_empty() || self.mw_capacity.is_empty() {
            debug!("MW prediction needs both a sector and a capacity");
            return None;
        }
        let generation = self.mw_predict.begin();
        Some(Request::PredictMw {
            request: PredictMwRequest {
                sector: self.mw_sector.clone(),
                mw_capacity: parse_capacity(&self.mw_capacity),
            },
            generation,
        })
    }

    fn record_failure(&mut self, generation: u64, error: ApiError, operation: Operation) {
        let message = operation.failure_message();
        let tracker = match operation {
            Operation::Initial => &mut self.initial_load,
            Operation::Sector => &mut self.sector_load,
            Operation::YearPrediction => &mut self.year_predict,
            Operation::MwPrediction => &mut self.mw_predict,
        };
        if tracker.fail(generation, message) {
            warn!(%error, banner = message, "Dashboard operation failed");
            self.error = Some(message.to_string());
        } else {
            debug!(generation, %error, "Ignoring failure of superseded request");
        }
    }

    /// Whether any operation is in flight.
    pub fn is_busy(&self) -> bool {
        self.initial_load.is_loading()
            || self.sector_load.is_loading()
            || self.year_predict.is_loading()
            || self.mw_predict.is_loading()
    }

    pub fn can_predict_year(&self) -> bool {
        !self.selected_sector.is_empty()
            && self.selected_year.is_some()
            && !self.year_predict.is_loading()
    }

    pub fn can_predict_mw(&self) -> bool {
        !self.mw_sector.is_empty()
            && !self.mw_capacity.is_empty()
            && !self.mw_predict.is_loading()
    }

    pub fn trends(&self) -> Option<&TrendSeries> {
        self.sector_data.as_ref().map(|d| &d.trends)
    }

    pub fn insights(&self) -> Option<&Insights> {
        self.sector_data.as_ref().map(|d| &d.insights)
    }

    pub fn line_chart(&self) -> Option<ChartData> {
        self.sector_data
            .as_ref()
            .map(|d| charts::line_chart(&d.trends, &d.sector))
    }

    pub fn bar_chart(&self) -> Option<ChartData> {
        self.sector_data
            .as_ref()
            .map(|d| charts::bar_chart(&d.trends, &d.sector))
    }

    /// The sector distribution, shown once insights are available.
    pub fn distribution(&self) -> Option<Vec<DistributionSlice>> {
        self.insights().map(|_| charts::sector_distribution())
    }

    /// `None` until a trend series is loaded.
    pub fn csv_export(&self) -> Option<CsvExport> {
        self.sector_data.as_ref().map(export::csv_export)
    }
}

#[derive(Debug, Clone, Copy)]
enum Operation {
    Initial,
    Sector,
    YearPrediction,
    MwPrediction,
}

impl Operation {
    fn failure_message(self) -> &'static str {
        match self {
            Operation::Initial => INITIAL_LOAD_FAILED,
            Operation::Sector => SECTOR_LOAD_FAILED,
            Operation::YearPrediction => YEAR_PREDICTION_FAILED,
            Operation::MwPrediction => MW_PREDICTION_FAILED,
        }
    }
}
