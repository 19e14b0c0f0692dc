use crate::core::plottable::time_series_plottable_methods;
use crate::core::{
    Plottable, PlottableConfig, PlottableSeries, PlottingOptions, TimeSeries, TimeSeriesItem,
};
use crate::render::{Color, LineStrokeStyle, SeriesKind, SeriesPoint, SeriesSpec};

/// Complete and incomplete halves of a series, aligned on the same buckets.
#[derive(Debug, Clone, PartialEq)]
pub struct SplitPoints {
    pub complete: Vec<SeriesPoint>,
    /// `None` when every bucket is complete.
    pub incomplete: Option<Vec<SeriesPoint>>,
}

/// Splits buckets into a complete and an incomplete trace.
///
/// The incomplete trace keeps the last complete bucket before the first
/// incomplete one so the two traces share one point and read as a single
/// continuous line.
#[must_use]
pub fn split_complete_incomplete(values: &[TimeSeriesItem]) -> SplitPoints {
    let complete = values
        .iter()
        .map(|item| SeriesPoint {
            timestamp: item.timestamp,
            value: if item.incomplete { None } else { item.value },
        })
        .collect();

    let Some(first_incomplete) = values.iter().position(|item| item.incomplete) else {
        return SplitPoints {
            complete,
            incomplete: None,
        };
    };
    let bridge = first_incomplete.checked_sub(1);

    let incomplete = values
        .iter()
        .enumerate()
        .map(|(index, item)| SeriesPoint {
            timestamp: item.timestamp,
            value: if item.incomplete || Some(index) == bridge {
                item.value
            } else {
                None
            },
        })
        .collect();

    SplitPoints {
        complete,
        incomplete: Some(incomplete),
    }
}

pub(crate) fn continuous_series(
    name: &str,
    kind: SeriesKind,
    values: &[TimeSeriesItem],
    options: &PlottingOptions,
    color: Option<Color>,
) -> PlottableSeries {
    let split = split_complete_incomplete(values);
    let base = |points: Vec<SeriesPoint>| {
        SeriesSpec::new(name, kind, options.y_axis_position)
            .with_color(color)
            .with_unit(options.unit)
            .with_points(points)
    };

    let mut series = PlottableSeries::new();
    series.push(base(split.complete));
    if let Some(incomplete) = split.incomplete {
        series.push(base(incomplete).with_stroke_style(LineStrokeStyle::Dotted));
    }
    series
}

/// Time series drawn as a line.
#[derive(Debug, Clone, PartialEq)]
pub struct Line {
    time_series: TimeSeries,
    config: PlottableConfig,
}

impl Line {
    #[must_use]
    pub fn new(time_series: TimeSeries) -> Self {
        Self::with_config(time_series, PlottableConfig::default())
    }

    #[must_use]
    pub fn with_config(time_series: TimeSeries, config: PlottableConfig) -> Self {
        Self {
            time_series,
            config,
        }
    }

    #[must_use]
    pub fn time_series(&self) -> &TimeSeries {
        &self.time_series
    }
}

impl Plottable for Line {
    time_series_plottable_methods!();

    fn to_series(&self, options: &PlottingOptions) -> PlottableSeries {
        continuous_series(
            self.label(),
            SeriesKind::Line,
            &self.time_series.values,
            options,
            self.config.color.or(options.color),
        )
    }
}
