use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::core::{AxisPosition, DataUnit};
use crate::error::{ChartError, ChartResult};
use crate::render::{Color, LineStrokeStyle};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeriesKind {
    Line,
    Area,
    Bar,
    /// Vertical marker lines without a data trace (release overlay).
    MarkLine,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeriesPoint {
    pub timestamp: DateTime<Utc>,
    pub value: Option<f64>,
}

/// Vertical marker drawn at a timestamp, with an optional label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesMarkLine {
    pub timestamp: DateTime<Utc>,
    pub label: String,
}

/// One renderable sub-series handed to the drawing backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesSpec {
    pub name: String,
    pub kind: SeriesKind,
    pub y_axis: AxisPosition,
    pub color: Option<Color>,
    pub unit: Option<DataUnit>,
    pub stroke_style: LineStrokeStyle,
    pub opacity: f64,
    #[serde(default)]
    pub stack: Option<String>,
    #[serde(default)]
    pub points: Vec<SeriesPoint>,
    #[serde(default)]
    pub mark_lines: Vec<SeriesMarkLine>,
}

impl SeriesSpec {
    #[must_use]
    pub fn new(name: impl Into<String>, kind: SeriesKind, y_axis: AxisPosition) -> Self {
        Self {
            name: name.into(),
            kind,
            y_axis,
            color: None,
            unit: None,
            stroke_style: LineStrokeStyle::Solid,
            opacity: 1.0,
            stack: None,
            points: Vec::new(),
            mark_lines: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_color(mut self, color: Option<Color>) -> Self {
        self.color = color;
        self
    }

    #[must_use]
    pub fn with_unit(mut self, unit: Option<DataUnit>) -> Self {
        self.unit = unit;
        self
    }

    #[must_use]
    pub fn with_stroke_style(mut self, stroke_style: LineStrokeStyle) -> Self {
        self.stroke_style = stroke_style;
        self
    }

    #[must_use]
    pub fn with_opacity(mut self, opacity: f64) -> Self {
        self.opacity = opacity;
        self
    }

    #[must_use]
    pub fn with_stack(mut self, stack: Option<String>) -> Self {
        self.stack = stack;
        self
    }

    #[must_use]
    pub fn with_points(mut self, points: Vec<SeriesPoint>) -> Self {
        self.points = points;
        self
    }

    #[must_use]
    pub fn with_mark_lines(mut self, mark_lines: Vec<SeriesMarkLine>) -> Self {
        self.mark_lines = mark_lines;
        self
    }

    pub fn validate(&self) -> ChartResult<()> {
        if let Some(color) = self.color {
            color.validate()?;
        }
        if !self.opacity.is_finite() || !(0.0..=1.0).contains(&self.opacity) {
            return Err(ChartError::InvalidData(format!(
                "series `{}` opacity must be finite and in [0, 1]",
                self.name
            )));
        }
        if self
            .points
            .iter()
            .any(|point| point.value.is_some_and(|value| !value.is_finite()))
        {
            return Err(ChartError::InvalidData(format!(
                "series `{}` contains non-finite values",
                self.name
            )));
        }
        Ok(())
    }
}
