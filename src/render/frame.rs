use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{AxisPosition, DataType, DataUnit, TimeExtent};
use crate::error::{ChartError, ChartResult};
use crate::render::SeriesSpec;

/// One Y axis: where it sits, which type drives its labels, and in which unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct YAxisSpec {
    pub position: AxisPosition,
    pub data_type: DataType,
    pub unit: Option<DataUnit>,
}

/// Backend-agnostic description of one chart draw pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderFrame {
    pub axes: SmallVec<[YAxisSpec; 2]>,
    pub series: Vec<SeriesSpec>,
    pub show_legend: bool,
    #[serde(default)]
    pub legend_selection: Option<IndexMap<String, bool>>,
    #[serde(default)]
    pub time_extent: Option<TimeExtent>,
    #[serde(default)]
    pub utc: bool,
}

impl RenderFrame {
    #[must_use]
    pub fn has_right_axis(&self) -> bool {
        self.axes
            .iter()
            .any(|axis| axis.position == AxisPosition::Right)
    }

    pub fn validate(&self) -> ChartResult<()> {
        match self.axes.as_slice() {
            [left] if left.position == AxisPosition::Left => {}
            [left, right]
                if left.position == AxisPosition::Left
                    && right.position == AxisPosition::Right => {}
            axes => {
                return Err(ChartError::InvalidData(format!(
                    "frame must have a left axis and at most one right axis, got {} axes",
                    axes.len()
                )));
            }
        }

        let has_right_axis = self.has_right_axis();
        for series in &self.series {
            series.validate()?;
            if series.y_axis == AxisPosition::Right && !has_right_axis {
                return Err(ChartError::InvalidData(format!(
                    "series `{}` targets a missing right axis",
                    series.name
                )));
            }
        }

        Ok(())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }
}
