use crate::core::line_series::continuous_series;
use crate::core::plottable::time_series_plottable_methods;
use crate::core::{Plottable, PlottableConfig, PlottableSeries, PlottingOptions, TimeSeries};
use crate::render::SeriesKind;

/// Time series drawn as a filled area. Splits incomplete buckets the same
/// way [`crate::core::Line`] does.
#[derive(Debug, Clone, PartialEq)]
pub struct Area {
    time_series: TimeSeries,
    config: PlottableConfig,
}

impl Area {
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

impl Plottable for Area {
    time_series_plottable_methods!();

    fn to_series(&self, options: &PlottingOptions) -> PlottableSeries {
        continuous_series(
            self.label(),
            SeriesKind::Area,
            &self.time_series.values,
            options,
            self.config.color.or(options.color),
        )
    }
}
