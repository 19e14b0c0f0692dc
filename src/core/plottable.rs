use chrono::{DateTime, Utc};
use smallvec::SmallVec;

use crate::core::{AxisPosition, DataType, DataUnit};
use crate::render::{Color, SeriesSpec};

/// Sub-series produced by one plottable. Most plottables emit one or two.
pub type PlottableSeries = SmallVec<[SeriesSpec; 2]>;

/// Per-plottable options decided by the resolver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlottingOptions {
    /// Palette color, present only when the plottable asked for one.
    pub color: Option<Color>,
    pub y_axis_position: AxisPosition,
    /// Unit resolved for the plottable's data type.
    pub unit: Option<DataUnit>,
}

/// A self-describing, time-bound data series that can be turned into
/// renderable sub-series.
pub trait Plottable {
    /// Name shown in legends and tooltips.
    fn label(&self) -> &str;

    fn data_type(&self) -> Option<DataType>;

    fn data_unit(&self) -> Option<DataUnit>;

    fn start(&self) -> Option<DateTime<Utc>>;

    fn end(&self) -> Option<DateTime<Utc>>;

    /// `true` when there is nothing to plot.
    fn is_empty(&self) -> bool;

    /// `false` when the plottable carries its own color.
    fn needs_color(&self) -> bool;

    fn to_series(&self, options: &PlottingOptions) -> PlottableSeries;

    /// Returns a copy restricted to `[start, end]`.
    fn constrain(
        &self,
        start: Option<DateTime<Utc>>,
        end: Option<DateTime<Utc>>,
    ) -> Box<dyn Plottable>;
}

/// Caller-supplied presentation overrides shared by the built-in plottables.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PlottableConfig {
    /// Intrinsic color; when set the plottable takes no palette slot.
    pub color: Option<Color>,
    /// Display name replacing the field name.
    pub alias: Option<String>,
    /// Stack group, honored by bar plottables.
    pub stack: Option<String>,
}

impl PlottableConfig {
    #[must_use]
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    #[must_use]
    pub fn with_alias(mut self, alias: impl Into<String>) -> Self {
        self.alias = Some(alias.into());
        self
    }

    #[must_use]
    pub fn with_stack(mut self, stack: impl Into<String>) -> Self {
        self.stack = Some(stack.into());
        self
    }
}

/// Expands to the [`Plottable`] methods shared by plottables backed by one
/// [`crate::core::TimeSeries`]. The implementing type needs `time_series`
/// and `config` fields and a `with_config` constructor; it still writes its
/// own `to_series`.
macro_rules! time_series_plottable_methods {
    () => {
        fn label(&self) -> &str {
            self.config
                .alias
                .as_deref()
                .unwrap_or(&self.time_series.field)
        }

        fn data_type(&self) -> Option<$crate::core::DataType> {
            self.time_series.meta.value_type
        }

        fn data_unit(&self) -> Option<$crate::core::DataUnit> {
            self.time_series.meta.value_unit
        }

        fn start(&self) -> Option<::chrono::DateTime<::chrono::Utc>> {
            self.time_series.start()
        }

        fn end(&self) -> Option<::chrono::DateTime<::chrono::Utc>> {
            self.time_series.end()
        }

        fn is_empty(&self) -> bool {
            self.time_series.is_empty()
        }

        fn needs_color(&self) -> bool {
            self.config.color.is_none()
        }

        fn constrain(
            &self,
            start: Option<::chrono::DateTime<::chrono::Utc>>,
            end: Option<::chrono::DateTime<::chrono::Utc>>,
        ) -> Box<dyn $crate::core::Plottable> {
            Box::new(Self::with_config(
                self.time_series.constrain(start, end),
                self.config.clone(),
            ))
        }
    };
}

pub(crate) use time_series_plottable_methods;
