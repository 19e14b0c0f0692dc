use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::core::{DataType, DataUnit};
use crate::error::{ChartError, ChartResult};

/// One bucket of a time series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimeSeriesItem {
    pub timestamp: DateTime<Utc>,
    pub value: Option<f64>,
    /// The bucket is still accumulating data (typically the most recent ones).
    #[serde(default)]
    pub incomplete: bool,
}

impl TimeSeriesItem {
    #[must_use]
    pub fn new(timestamp: DateTime<Utc>, value: Option<f64>) -> Self {
        Self {
            timestamp,
            value,
            incomplete: false,
        }
    }

    #[must_use]
    pub fn incomplete(mut self) -> Self {
        self.incomplete = true;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct TimeSeriesMeta {
    #[serde(default)]
    pub value_type: Option<DataType>,
    #[serde(default)]
    pub value_unit: Option<DataUnit>,
    #[serde(default)]
    pub interval_ms: u64,
}

/// Ordered samples for one field, plus type metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeSeries {
    pub field: String,
    pub values: Vec<TimeSeriesItem>,
    #[serde(default)]
    pub meta: TimeSeriesMeta,
}

impl TimeSeries {
    /// Builds a series, rejecting non-finite values and unordered timestamps.
    pub fn new(
        field: impl Into<String>,
        values: Vec<TimeSeriesItem>,
        meta: TimeSeriesMeta,
    ) -> ChartResult<Self> {
        if values
            .iter()
            .any(|item| item.value.is_some_and(|value| !value.is_finite()))
        {
            return Err(ChartError::InvalidData(
                "time series values must be finite".to_owned(),
            ));
        }
        if values
            .windows(2)
            .any(|pair| pair[1].timestamp < pair[0].timestamp)
        {
            return Err(ChartError::InvalidData(
                "time series timestamps must be ascending".to_owned(),
            ));
        }

        Ok(Self {
            field: field.into(),
            values,
            meta,
        })
    }

    #[must_use]
    pub fn start(&self) -> Option<DateTime<Utc>> {
        self.values.first().map(|item| item.timestamp)
    }

    #[must_use]
    pub fn end(&self) -> Option<DateTime<Utc>> {
        self.values.last().map(|item| item.timestamp)
    }

    /// `true` when no bucket carries a value.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.iter().all(|item| item.value.is_none())
    }

    /// Keeps the buckets whose timestamp lies inside `[start, end]`.
    #[must_use]
    pub fn constrain(&self, start: Option<DateTime<Utc>>, end: Option<DateTime<Utc>>) -> Self {
        let values = self
            .values
            .iter()
            .filter(|item| start.is_none_or(|start| item.timestamp >= start))
            .filter(|item| end.is_none_or(|end| item.timestamp <= end))
            .copied()
            .collect();

        Self {
            field: self.field.clone(),
            values,
            meta: self.meta,
        }
    }
}

/// Earliest and latest boundary across a set of plottables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeExtent {
    pub earliest: DateTime<Utc>,
    pub latest: DateTime<Utc>,
}

impl TimeExtent {
    /// Folds boundaries into an extent; `None` when no boundary is known.
    #[must_use]
    pub fn from_boundaries(boundaries: impl IntoIterator<Item = DateTime<Utc>>) -> Option<Self> {
        boundaries.into_iter().fold(None, |extent, timestamp| {
            Some(match extent {
                None => Self {
                    earliest: timestamp,
                    latest: timestamp,
                },
                Some(Self { earliest, latest }) => Self {
                    earliest: earliest.min(timestamp),
                    latest: latest.max(timestamp),
                },
            })
        })
    }
}
