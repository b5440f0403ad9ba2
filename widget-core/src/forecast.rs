//! Reduction of the 3-hour forecast list to one reading per day.

use chrono::NaiveDateTime;

use crate::model::ForecastEntry;

/// Time-of-day marker that picks the representative slot of each day.
pub const DAILY_MARKER: &str = "12:00:00";

/// Upper bound on the number of days shown.
pub const MAX_DAYS: usize = 5;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// At most [`MAX_DAYS`] forecast entries, one per day, in provider order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ForecastSelection(Vec<ForecastEntry>);

impl ForecastSelection {
    /// Keeps the entries whose timestamp contains [`DAILY_MARKER`], capped at
    /// [`MAX_DAYS`]. Fewer matches give a shorter selection.
    pub fn from_entries(entries: impl IntoIterator<Item = ForecastEntry>) -> Self {
        Self(
            entries
                .into_iter()
                .filter(|entry| entry.timestamp.contains(DAILY_MARKER))
                .take(MAX_DAYS)
                .collect(),
        )
    }

    pub fn entries(&self) -> &[ForecastEntry] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Short English weekday ("Mon", "Tue", ...) of a provider timestamp.
///
/// Timestamps that do not parse are returned unchanged.
pub fn weekday_short(timestamp: &str) -> String {
    NaiveDateTime::parse_from_str(timestamp, TIMESTAMP_FORMAT)
        .map(|dt| dt.format("%a").to_string())
        .unwrap_or_else(|_| timestamp.to_string())
}
