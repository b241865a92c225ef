//! Sector ordering and presentation tables.

use std::cmp::Ordering;
use tracing::debug;

/// Sectors listed first, in this order, ahead of everything else.
pub const PRIORITY_SECTORS: [&str; 5] = ["Solar", "Wind", "Hydroelectric", "Geothermal", "Biomass"];

/// Preferred initial selection when the API offers it.
pub const DEFAULT_SECTOR: &str = "Solar";

/// Colour used for sectors without an entry in [`SECTOR_COLORS`].
pub const DEFAULT_SECTOR_COLOR: &str = "#3b82f6";

pub const SECTOR_COLORS: [(&str, &str); 8] = [
    ("Solar", "#f59e0b"),
    ("Wind", "#06b6d4"),
    ("Biomass", "#10b981"),
    ("Hydroelectric", "#3b82f6"),
    ("Geothermal", "#ef4444"),
    ("Small Hydro", "#8b5cf6"),
    ("Waste-to-Energy", "#f97316"),
    ("Bagasse Cogeneration", "#84cc16"),
];

pub fn sector_color(sector: &str) -> &'static str {
    SECTOR_COLORS
        .iter()
        .find(|(name, _)| *name == sector)
        .map(|(_, color)| *color)
        .unwrap_or(DEFAULT_SECTOR_COLOR)
}

fn priority(sector: &str) -> Option<usize> {
    PRIORITY_SECTORS.iter().position(|p| *p == sector)
}

/// Alphabetical, ignoring case; ties fall back to the exact text.
fn alphabetical(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

/// Priority sectors first in their fixed order, the rest alphabetically.
pub fn order_sectors(mut sectors: Vec<String>) -> Vec<String> {
    sectors.sort_by(|a, b| match (priority(a), priority(b)) {
        (Some(x), Some(y)) => x.cmp(&y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => alphabetical(a, b),
    });
    debug!(?sectors, "Ordered sectors");
    sectors
}

/// Solar when offered, otherwise the first sector; `None` for an empty list.
pub fn default_sector(ordered: &[String]) -> Option<&str> {
    ordered
        .iter()
        .find(|s| s.as_str() == DEFAULT_SECTOR)
        .or_else(|| ordered.first())
        .map(String::as_str)
}
