use crate::core::plottable::time_series_plottable_methods;
use crate::core::{Plottable, PlottableConfig, PlottableSeries, PlottingOptions, TimeSeries};
use crate::render::{SeriesKind, SeriesPoint, SeriesSpec};

/// Opacity applied to incomplete buckets.
pub const INCOMPLETE_BAR_OPACITY: f64 = 0.5;

/// Time series drawn as bars, optionally stacked with other bars.
///
/// Always produces exactly one sub-series. When any bucket is incomplete the
/// whole series is dimmed rather than split, since bars do not need a
/// continuous trace.
#[derive(Debug, Clone, PartialEq)]
pub struct Bars {
    time_series: TimeSeries,
    config: PlottableConfig,
}

impl Bars {
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
}

impl Plottable for Bars {
    time_series_plottable_methods!();

    fn to_series(&self, options: &PlottingOptions) -> PlottableSeries {
        let points = self
            .time_series
            .values
            .iter()
            .map(|item| SeriesPoint {
                timestamp: item.timestamp,
                value: item.value,
            })
            .collect();
        let opacity = if self.time_series.values.iter().any(|item| item.incomplete) {
            INCOMPLETE_BAR_OPACITY
        } else {
            1.0
        };

        let mut series = PlottableSeries::new();
        series.push(
            SeriesSpec::new(self.label(), SeriesKind::Bar, options.y_axis_position)
                .with_color(self.config.color.or(options.color))
                .with_unit(options.unit)
                .with_stack(self.config.stack.clone())
                .with_opacity(opacity)
                .with_points(points),
        );
        series
    }
}
