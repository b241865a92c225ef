//! Chart-ready data derived from a trend series.
//!
//! Nothing here is stored; views recompute on every render.

use common::{TrendSeries, sector_color};

/// Colour of the "Actual Jobs" series, whatever the sector.
pub const ACTUAL_JOBS_COLOR: &str = "#10b981";

/// Number of trailing points shown by the comparison bar chart.
pub const RECENT_POINTS: usize = 5;

/// Illustrative employment share per sector, in percent.
///
/// Fixed figures, independent of the fetched insights; they sum to 100.
pub const SECTOR_DISTRIBUTION: [(&str, f64); 8] = [
    ("Solar", 35.0),
    ("Wind", 25.0),
    ("Hydroelectric", 15.0),
    ("Biomass", 10.0),
    ("Geothermal", 8.0),
    ("Small Hydro", 4.0),
    ("Waste-to-Energy", 2.0),
    ("Bagasse Cogeneration", 1.0),
];

#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    pub label: &'static str,
    pub data: Vec<f64>,
    pub color: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChartData {
    pub labels: Vec<i32>,
    pub datasets: Vec<Dataset>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DistributionSlice {
    pub sector: &'static str,
    pub percentage: f64,
    pub color: &'static str,
}

/// The last `limit` values of a sequence, or all of them.
fn tail<T: Copy>(values: &[T], limit: Option<usize>) -> Vec<T> {
    let skip = limit.map_or(0, |n| values.len().saturating_sub(n));
    values[skip..].to_vec()
}

fn chart_from(trends: &TrendSeries, sector: &str, limit: Option<usize>) -> ChartData {
    ChartData {
        labels: tail(&trends.years, limit),
        datasets: vec![
            Dataset {
                label: "Estimated Jobs",
                data: tail(&trends.estimated_jobs, limit),
                color: sector_color(sector),
            },
            Dataset {
                label: "Actual Jobs",
                data: tail(&trends.actual_jobs, limit),
                color: ACTUAL_JOBS_COLOR,
            },
        ],
    }
}

/// Estimated and actual jobs over the whole series.
pub fn line_chart(trends: &TrendSeries, sector: &str) -> ChartData {
    chart_from(trends, sector, None)
}

/// Estimated and actual jobs over the last [`RECENT_POINTS`] entries, by position.
pub fn bar_chart(trends: &TrendSeries, sector: &str) -> ChartData {
    chart_from(trends, sector, Some(RECENT_POINTS))
}

pub fn sector_distribution() -> Vec<DistributionSlice> {
    SECTOR_DISTRIBUTION
        .iter()
        .map(|&(sector, percentage)| DistributionSlice {
            sector,
            percentage,
            color: sector_color(sector),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn series(len: usize) -> TrendSeries {
        TrendSeries {
            sector: "Wind".to_string(),
            years: (0..len).map(|i| 2015 + i as i32).collect(),
            estimated_jobs: (0..len).map(|i| 100.0 * i as f64).collect(),
            actual_jobs: (0..len).map(|i| 90.0 * i as f64).collect(),
            installed_capacity: (0..len).map(|i| 10.0 * i as f64).collect(),
        }
    }

    #[test]
    fn test_line_chart_uses_sector_color() {
        let chart = line_chart(&series(3), "Wind");
        assert_eq!(chart.labels, vec![2015, 2016, 2017]);
        assert_eq!(chart.datasets[0].label, "Estimated Jobs");
        assert_eq!(chart.datasets[0].color, "#06b6d4");
        assert_eq!(chart.datasets[1].color, ACTUAL_JOBS_COLOR);
        assert_eq!(chart.datasets[1].data, vec![0.0, 90.0, 180.0]);
    }

    #[test]
    fn test_line_chart_unknown_sector_gets_default_color() {
        let chart = line_chart(&series(1), "Tidal");
        assert_eq!(chart.datasets[0].color, common::DEFAULT_SECTOR_COLOR);
    }

    #[test]
    fn test_bar_chart_keeps_last_five_in_order() {
        let chart = bar_chart(&series(8), "Wind");
        assert_eq!(chart.labels, vec![2018, 2019, 2020, 2021, 2022]);
        assert_eq!(chart.datasets[0].data, vec![300.0, 400.0, 500.0, 600.0, 700.0]);
        assert_eq!(chart.datasets[1].data, vec![270.0, 360.0, 450.0, 540.0, 630.0]);
    }

    #[test]
    fn test_bar_chart_short_series_unsliced() {
        let chart = bar_chart(&series(3), "Wind");
        assert_eq!(chart.labels, vec![2015, 2016, 2017]);
        assert_eq!(chart.datasets[0].data.len(), 3);
    }

    #[test]
    fn test_distribution_sums_to_one_hundred() {
        let slices = sector_distribution();
        assert_eq!(slices.len(), 8);
        assert_eq!(slices.iter().map(|s| s.percentage).sum::<f64>(), 100.0);
        assert_eq!(slices[0].sector, "Solar");
        assert_eq!(slices[0].color, "#f59e0b");
    }
}
