use std::collections::HashSet;
use std::fmt;
use std::rc::Rc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::core::{DataType, FALLBACK_TYPE, Plottable, RangeMap};
use crate::render::Color;
use crate::telemetry::{DiagnosticEvent, DiagnosticsSink};

use super::{SeriesOwner, UnitResolution};
use super::value_format::{
    format_locale_number, format_tooltip_timestamp, format_tooltip_value, truncate_label,
};

/// One hovered data point as reported by the rendering engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TooltipParam {
    pub series_name: String,
    /// Position in the flat series list. Absent for mark lines and other
    /// decorations the engine cannot attribute.
    pub series_index: Option<usize>,
    pub timestamp: DateTime<Utc>,
    pub value: Option<f64>,
    #[serde(default)]
    pub color: Option<Color>,
}

impl TooltipParam {
    #[must_use]
    pub fn new(
        series_name: impl Into<String>,
        series_index: Option<usize>,
        timestamp: DateTime<Utc>,
        value: Option<f64>,
    ) -> Self {
        Self {
            series_name: series_name.into(),
            series_index,
            timestamp,
            value,
            color: None,
        }
    }
}

/// Drops points without a value and every repeat of a series name.
///
/// Complete and incomplete halves of a line share a name and overlap at one
/// bucket; only the first one listed is kept.
#[must_use]
pub fn dedupe_tooltip_params(params: &[TooltipParam]) -> Vec<&TooltipParam> {
    let mut seen: HashSet<&str> = HashSet::new();
    params
        .iter()
        .filter(|param| param.value.is_some())
        .filter(|param| seen.insert(param.series_name.as_str()))
        .collect()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TooltipRow {
    pub series_name: String,
    pub color: Option<Color>,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tooltip {
    pub header: Option<String>,
    pub rows: Vec<TooltipRow>,
}

impl Tooltip {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Formats hovered values using the plottable behind each series.
pub struct TooltipFormatter<'a> {
    index: RangeMap<&'a dyn Plottable>,
    units: UnitResolution,
    diagnostics: Rc<dyn DiagnosticsSink>,
    utc: bool,
    label_max_len: usize,
}

impl fmt::Debug for TooltipFormatter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TooltipFormatter")
            .field("attributed_series", &self.index.upper_bound())
            .field("units", &self.units)
            .field("utc", &self.utc)
            .field("label_max_len", &self.label_max_len)
            .finish_non_exhaustive()
    }
}

impl<'a> TooltipFormatter<'a> {
    pub(crate) fn new(
        index: RangeMap<&'a dyn Plottable>,
        units: UnitResolution,
        diagnostics: Rc<dyn DiagnosticsSink>,
        utc: bool,
        label_max_len: usize,
    ) -> Self {
        Self {
            index,
            units,
            diagnostics,
            utc,
            label_max_len,
        }
    }

    /// Plottable that produced the series at `series_index`.
    #[must_use]
    pub fn plottable_at(&self, series_index: usize) -> Option<&'a dyn Plottable> {
        self.index.get(series_index).copied()
    }

    /// Series index ranges and the plottable owning each.
    #[must_use]
    pub fn series_owners(&self) -> Vec<SeriesOwner> {
        self.index
            .iter()
            .map(|entry| SeriesOwner {
                min: entry.min,
                max: entry.max,
                label: entry.value.label().to_owned(),
                data_type: entry.value.data_type(),
            })
            .collect()
    }

    #[must_use]
    pub fn units(&self) -> &UnitResolution {
        &self.units
    }

    /// Type used to format the series at `series_index`.
    #[must_use]
    pub fn data_type_at(&self, series_index: usize) -> DataType {
        self.plottable_at(series_index)
            .and_then(|plottable| plottable.data_type())
            .unwrap_or(FALLBACK_TYPE)
    }

    /// Formats one value. Without a series index the value cannot be traced
    /// back to a plottable, so it is reported and locale-formatted.
    #[must_use]
    pub fn format_value(
        &self,
        value: f64,
        series_index: Option<usize>,
        series_name: Option<&str>,
    ) -> String {
        let Some(series_index) = series_index else {
            self.diagnostics
                .report(&DiagnosticEvent::MissingSeriesAttribution {
                    series_name: series_name.map(str::to_owned),
                });
            return format_locale_number(value);
        };

        let data_type = self.data_type_at(series_index);
        format_tooltip_value(value, data_type, self.units.unit_for(Some(data_type)))
    }

    /// Builds the tooltip for one hover event.
    #[must_use]
    pub fn format(&self, params: &[TooltipParam]) -> Tooltip {
        let visible = dedupe_tooltip_params(params);
        let header = visible
            .first()
            .map(|param| format_tooltip_timestamp(param.timestamp, self.utc));

        let rows = visible
            .into_iter()
            .filter_map(|param| {
                let value = param.value?;
                Some(TooltipRow {
                    series_name: truncate_label(&param.series_name, self.label_max_len),
                    color: param.color,
                    value: self.format_value(
                        value,
                        param.series_index,
                        Some(param.series_name.as_str()),
                    ),
                })
            })
            .collect();

        Tooltip { header, rows }
    }
}
