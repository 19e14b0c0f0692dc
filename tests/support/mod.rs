#![allow(dead_code)]

use chrono::{DateTime, TimeZone, Utc};
use tsaxis_rs::core::{
    DataType, DataUnit, Line, Plottable, PlottableSeries, PlottingOptions, TimeSeries,
    TimeSeriesItem, TimeSeriesMeta,
};
use tsaxis_rs::render::{SeriesKind, SeriesSpec};

pub const BASE_UNIX_SECONDS: i64 = 1_700_000_000;

pub fn at_minute(minute: i64) -> DateTime<Utc> {
    Utc.timestamp_opt(BASE_UNIX_SECONDS + minute * 60, 0)
        .single()
        .expect("valid timestamp")
}

pub fn time_series(
    field: &str,
    data_type: Option<DataType>,
    unit: Option<DataUnit>,
    values: &[Option<f64>],
) -> TimeSeries {
    let items = values
        .iter()
        .enumerate()
        .map(|(i, value)| TimeSeriesItem::new(at_minute(i as i64), *value))
        .collect();
    TimeSeries::new(
        field,
        items,
        TimeSeriesMeta {
            value_type: data_type,
            value_unit: unit,
            interval_ms: 60_000,
        },
    )
    .expect("valid time series")
}

pub fn line(
    field: &str,
    data_type: Option<DataType>,
    unit: Option<DataUnit>,
) -> Box<dyn Plottable> {
    Box::new(Line::new(time_series(
        field,
        data_type,
        unit,
        &[Some(1.0), Some(2.0), Some(3.0)],
    )))
}

/// Plottable with a fixed number of sub-series and no real data behind it.
#[derive(Debug, Clone)]
pub struct StubPlottable {
    pub label: String,
    pub data_type: Option<DataType>,
    pub unit: Option<DataUnit>,
    pub series_count: usize,
    pub empty: bool,
    pub needs_color: bool,
}

impl StubPlottable {
    pub fn new(label: &str, data_type: Option<DataType>) -> Self {
        Self {
            label: label.to_owned(),
            data_type,
            unit: None,
            series_count: 1,
            empty: false,
            needs_color: true,
        }
    }

    pub fn with_unit(mut self, unit: DataUnit) -> Self {
        self.unit = Some(unit);
        self
    }

    pub fn with_series_count(mut self, series_count: usize) -> Self {
        self.series_count = series_count;
        self
    }

    pub fn empty(mut self) -> Self {
        self.empty = true;
        self
    }

    pub fn with_own_color(mut self) -> Self {
        self.needs_color = false;
        self
    }

    pub fn boxed(self) -> Box<dyn Plottable> {
        Box::new(self)
    }
}

impl Plottable for StubPlottable {
    fn label(&self) -> &str {
        &self.label
    }

    fn data_type(&self) -> Option<DataType> {
        self.data_type
    }

    fn data_unit(&self) -> Option<DataUnit> {
        self.unit
    }

    fn start(&self) -> Option<DateTime<Utc>> {
        (!self.empty).then(|| at_minute(0))
    }

    fn end(&self) -> Option<DateTime<Utc>> {
        (!self.empty).then(|| at_minute(10))
    }

    fn is_empty(&self) -> bool {
        self.empty
    }

    fn needs_color(&self) -> bool {
        self.needs_color
    }

    fn to_series(&self, options: &PlottingOptions) -> PlottableSeries {
        (0..self.series_count)
            .map(|_| {
                SeriesSpec::new(&self.label, SeriesKind::Line, options.y_axis_position)
                    .with_color(options.color)
                    .with_unit(options.unit)
            })
            .collect()
    }

    fn constrain(
        &self,
        _start: Option<DateTime<Utc>>,
        _end: Option<DateTime<Utc>>,
    ) -> Box<dyn Plottable> {
        Box::new(self.clone())
    }
}
