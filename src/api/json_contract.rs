use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{DataType, DataUnit, TimeExtent};
use crate::error::{ChartError, ChartResult};
use crate::render::{SeriesSpec, YAxisSpec};

use super::{AxisAssignment, Visualization};

pub const VISUALIZATION_SNAPSHOT_JSON_SCHEMA_V1: u32 = 1;

/// Range of flat series indexes produced by one plottable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeriesOwner {
    pub min: usize,
    pub max: usize,
    pub label: String,
    pub data_type: Option<DataType>,
}

/// Owned, serializable view of a [`Visualization`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VisualizationSnapshot {
    pub axes: SmallVec<[YAxisSpec; 2]>,
    pub assignment: AxisAssignment,
    pub units: IndexMap<DataType, Option<DataUnit>>,
    pub series: Vec<SeriesSpec>,
    #[serde(default)]
    pub release_series: Option<SeriesSpec>,
    pub series_owners: Vec<SeriesOwner>,
    pub show_legend: bool,
    #[serde(default)]
    pub legend_selection: Option<IndexMap<String, bool>>,
    #[serde(default)]
    pub time_extent: Option<TimeExtent>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VisualizationSnapshotJsonContractV1 {
    pub schema_version: u32,
    pub snapshot: VisualizationSnapshot,
}

impl Visualization<'_> {
    #[must_use]
    pub fn snapshot(&self) -> VisualizationSnapshot {
        VisualizationSnapshot {
            axes: self.axes.clone(),
            assignment: self.assignment.clone(),
            units: self.tooltip.units().iter().collect(),
            series: self.series.clone(),
            release_series: self.release_series.clone(),
            series_owners: self.tooltip.series_owners(),
            show_legend: self.show_legend,
            legend_selection: self.legend_selection.clone(),
            time_extent: self.time_extent,
        }
    }
}

impl VisualizationSnapshot {
    pub fn to_json_contract_v1_pretty(&self) -> ChartResult<String> {
        let payload = VisualizationSnapshotJsonContractV1 {
            schema_version: VISUALIZATION_SNAPSHOT_JSON_SCHEMA_V1,
            snapshot: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            ChartError::InvalidData(format!("failed to serialize snapshot contract v1: {e}"))
        })
    }

    /// Accepts either a bare snapshot or a versioned contract payload.
    pub fn from_json_compat_str(input: &str) -> ChartResult<Self> {
        if let Ok(snapshot) = serde_json::from_str::<VisualizationSnapshot>(input) {
            return Ok(snapshot);
        }
        let payload: VisualizationSnapshotJsonContractV1 =
            serde_json::from_str(input).map_err(|e| {
                ChartError::InvalidData(format!("failed to parse snapshot json payload: {e}"))
            })?;
        if payload.schema_version != VISUALIZATION_SNAPSHOT_JSON_SCHEMA_V1 {
            return Err(ChartError::InvalidData(format!(
                "unsupported snapshot schema version: {}",
                payload.schema_version
            )));
        }
        Ok(payload.snapshot)
    }
}
