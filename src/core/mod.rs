pub mod area_series;
pub mod bar_series;
pub mod line_series;
pub mod plottable;
pub mod range_map;
pub mod time_series;
pub mod types;

pub use area_series::Area;
pub use bar_series::Bars;
pub use line_series::{Line, SplitPoints, split_complete_incomplete};
pub use plottable::{Plottable, PlottableConfig, PlottableSeries, PlottingOptions};
pub use range_map::{RangeEntry, RangeMap};
pub use time_series::{TimeExtent, TimeSeries, TimeSeriesItem, TimeSeriesMeta};
pub use types::{
    AxisPosition, DataType, DataUnit, DurationUnit, FALLBACK_TYPE, FallbackUnits, RateUnit,
    SizeUnit,
};
