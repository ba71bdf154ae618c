use serde::{Deserialize, Deserializer, Serialize};

use crate::domain::errors::DecodeError;

/// One fetched payload of market statistics.
///
/// Immutable once decoded; each refresh cycle owns its own snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub last_update: String,
    /// Intraday ticks of the current session, oldest first
    #[serde(default, deserialize_with = "null_as_empty")]
    pub hourly_data: Vec<HourlyPoint>,
    /// Final volume per trading day, chronological
    #[serde(default, deserialize_with = "null_as_empty")]
    pub daily_data: Vec<DailyPoint>,
    /// Intraday ticks of the previous session, used as the comparison line
    #[serde(default, deserialize_with = "null_as_empty")]
    pub yesterday_hourly_data: Vec<HourlyVolume>,
}

impl Snapshot {
    /// Decode a snapshot from its JSON text.
    pub fn from_json(text: &str) -> Result<Self, DecodeError> {
        serde_json::from_str(text).map_err(DecodeError::from)
    }

    pub fn latest_hourly(&self) -> Option<&HourlyPoint> {
        self.hourly_data.last()
    }
}

/// One intraday sampling tick.
///
/// `total_volume` is the cumulative session volume at this tick (100M CNY units),
/// not a per-hour delta.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HourlyPoint {
    pub hour: String,
    pub total_volume: f64,
    pub sh_index: f64,
    pub sh_change_pct: f64,
    pub sz_index: f64,
    pub sz_change_pct: f64,
}

/// Reference-period tick; only the volume is plotted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HourlyVolume {
    pub hour: String,
    pub total_volume: f64,
}

/// Final aggregate volume of one trading day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyPoint {
    pub date: String,
    pub total_volume: f64,
}

/// Anything that can be placed on a labelled value axis
pub trait SeriesPoint {
    fn label(&self) -> &str;
    fn value(&self) -> f64;
}

impl SeriesPoint for HourlyPoint {
    fn label(&self) -> &str {
        &self.hour
    }

    fn value(&self) -> f64 {
        self.total_volume
    }
}

impl SeriesPoint for HourlyVolume {
    fn label(&self) -> &str {
        &self.hour
    }

    fn value(&self) -> f64 {
        self.total_volume
    }
}

impl SeriesPoint for DailyPoint {
    fn label(&self) -> &str {
        &self.date
    }

    fn value(&self) -> f64 {
        self.total_volume
    }
}

// The producer writes `null` for a sequence when its upstream query fails.
fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}
