use indexmap::{IndexMap, IndexSet};
use serde::{Deserialize, Serialize};

use crate::core::{DataType, DataUnit, FALLBACK_TYPE, FallbackUnits, Plottable};

/// Plottables bucketed by data type, in first-encounter order.
///
/// Plottables without a data type share the `None` bucket.
pub struct TypeGroups<'a> {
    groups: IndexMap<Option<DataType>, Vec<&'a dyn Plottable>>,
}

impl<'a> TypeGroups<'a> {
    #[must_use]
    pub fn from_plottables(plottables: &[&'a dyn Plottable]) -> Self {
        let mut groups: IndexMap<Option<DataType>, Vec<&'a dyn Plottable>> = IndexMap::new();
        for plottable in plottables {
            groups
                .entry(plottable.data_type())
                .or_default()
                .push(*plottable);
        }
        Self { groups }
    }

    /// Plottable count per bucket, in encounter order.
    pub fn type_counts(&self) -> impl Iterator<Item = (Option<DataType>, usize)> + '_ {
        self.groups
            .iter()
            .map(|(data_type, members)| (*data_type, members.len()))
    }

    /// Defined data types ordered by descending plottable count. Ties keep
    /// encounter order.
    #[must_use]
    pub fn axis_types(&self) -> Vec<DataType> {
        let mut counted: Vec<(DataType, usize)> = self
            .type_counts()
            .filter_map(|(data_type, count)| data_type.map(|data_type| (data_type, count)))
            .collect();
        counted.sort_by(|a, b| b.1.cmp(&a.1));
        counted.into_iter().map(|(data_type, _)| data_type).collect()
    }

    /// Distinct units supplied by the plottables of `data_type`.
    #[must_use]
    pub fn units_of(&self, data_type: Option<DataType>) -> IndexSet<DataUnit> {
        self.groups
            .get(&data_type)
            .into_iter()
            .flatten()
            .filter_map(|plottable| plottable.data_unit())
            .collect()
    }

    pub fn defined_types(&self) -> impl Iterator<Item = DataType> + '_ {
        self.groups.keys().filter_map(|data_type| *data_type)
    }
}

/// One display unit per data type, fixed for the duration of a pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnitResolution {
    units: IndexMap<DataType, Option<DataUnit>>,
    fallback_units: FallbackUnits,
}

impl UnitResolution {
    /// Picks the unit for every defined data type in `groups`:
    /// a single supplied unit wins; none or several fall back to the
    /// registered unit for the type.
    #[must_use]
    pub fn resolve(groups: &TypeGroups<'_>, fallback_units: &FallbackUnits) -> Self {
        let units = groups
            .defined_types()
            .map(|data_type| {
                let supplied = groups.units_of(Some(data_type));
                let unit = match supplied.len() {
                    1 => supplied.first().copied(),
                    _ => fallback_units.get(data_type),
                };
                (data_type, unit)
            })
            .collect();

        Self {
            units,
            fallback_units: fallback_units.clone(),
        }
    }

    /// Unit for a plottable's type. A missing type resolves through
    /// [`FALLBACK_TYPE`]; a type absent from this pass gets its fallback unit.
    #[must_use]
    pub fn unit_for(&self, data_type: Option<DataType>) -> Option<DataUnit> {
        let data_type = data_type.unwrap_or(FALLBACK_TYPE);
        match self.units.get(&data_type) {
            Some(unit) => *unit,
            None => self.fallback_units.get(data_type),
        }
    }

    #[must_use]
    pub fn contains(&self, data_type: DataType) -> bool {
        self.units.contains_key(&data_type)
    }

    pub fn iter(&self) -> impl Iterator<Item = (DataType, Option<DataUnit>)> + '_ {
        self.units.iter().map(|(data_type, unit)| (*data_type, *unit))
    }
}
