use serde::{Deserialize, Serialize};

use crate::core::{AxisPosition, DataType, FALLBACK_TYPE};

/// Which data types render against which Y axis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AxisAssignment {
    pub left_type: DataType,
    /// `None` when no type is assigned to the right, i.e. there is no right axis.
    pub right_type: Option<DataType>,
    pub left_data_types: Vec<DataType>,
    pub right_data_types: Vec<DataType>,
}

impl AxisAssignment {
    /// Partitions `axis_types`, which must be ordered most popular first.
    ///
    /// * one type: left only
    /// * two types: most popular left, the other right
    /// * more, fallback type most popular: everything left
    /// * more otherwise: most popular left, the rest right
    #[must_use]
    pub fn partition(axis_types: &[DataType]) -> Self {
        let (left_data_types, right_data_types) = match axis_types {
            [] | [_] => (axis_types.to_vec(), Vec::new()),
            [first, second] => (vec![*first], vec![*second]),
            [first, ..] if *first == FALLBACK_TYPE => (axis_types.to_vec(), Vec::new()),
            [first, rest @ ..] => (vec![*first], rest.to_vec()),
        };

        Self {
            left_type: axis_type_for(&left_data_types).unwrap_or(FALLBACK_TYPE),
            right_type: axis_type_for(&right_data_types),
            left_data_types,
            right_data_types,
        }
    }

    /// Axis owning `data_type`, or `None` if neither axis does.
    #[must_use]
    pub fn position_for(&self, data_type: Option<DataType>) -> Option<AxisPosition> {
        let data_type = data_type?;
        if self.left_data_types.contains(&data_type) {
            Some(AxisPosition::Left)
        } else if self.right_data_types.contains(&data_type) {
            Some(AxisPosition::Right)
        } else {
            None
        }
    }

    #[must_use]
    pub fn has_right_axis(&self) -> bool {
        self.right_type.is_some()
    }

    #[must_use]
    pub fn axis_count(&self) -> usize {
        if self.has_right_axis() { 2 } else { 1 }
    }

    #[must_use]
    pub fn assigned_type_count(&self) -> usize {
        self.left_data_types.len() + self.right_data_types.len()
    }
}

/// Axis labels follow the single type an axis owns; a mixed (or empty) axis
/// uses generic formatting.
fn axis_type_for(data_types: &[DataType]) -> Option<DataType> {
    match data_types {
        [] => None,
        [only] => Some(*only),
        _ => Some(FALLBACK_TYPE),
    }
}
