use tracing::trace;

use crate::core::{AxisPosition, Plottable, PlottingOptions, RangeEntry, RangeMap};
use crate::error::ChartResult;
use crate::render::SeriesSpec;
use crate::telemetry::{DiagnosticEvent, DiagnosticsSink};

use super::{AxisAssignment, ColorAllocator, UnitResolution};

/// Flat series list plus the reverse index from series position to the
/// plottable that produced it.
pub struct FlattenedSeries<'a> {
    pub series: Vec<SeriesSpec>,
    pub index: RangeMap<&'a dyn Plottable>,
}

struct FlattenAccumulator<'a> {
    running_index: usize,
    color_cursor: usize,
    ranges: Vec<RangeEntry<&'a dyn Plottable>>,
    series: Vec<SeriesSpec>,
}

/// Expands every plottable into its sub-series, in input order.
///
/// Plottables whose type neither axis owns are reported and drawn against
/// the left axis.
pub fn flatten_series<'a>(
    plottables: &[&'a dyn Plottable],
    assignment: &AxisAssignment,
    units: &UnitResolution,
    colors: &ColorAllocator,
    diagnostics: &dyn DiagnosticsSink,
) -> ChartResult<FlattenedSeries<'a>> {
    let initial = FlattenAccumulator {
        running_index: 0,
        color_cursor: 0,
        ranges: Vec::with_capacity(plottables.len()),
        series: Vec::new(),
    };

    let accumulated = plottables.iter().fold(initial, |mut acc, &plottable| {
        let color = if plottable.needs_color() {
            let color = colors.color_at(acc.color_cursor);
            acc.color_cursor += 1;
            color
        } else {
            None
        };

        let y_axis_position = assignment
            .position_for(plottable.data_type())
            .unwrap_or_else(|| {
                diagnostics.report(&DiagnosticEvent::UnassignableAxis {
                    label: plottable.label().to_owned(),
                    data_type: plottable.data_type(),
                    left_axis_type: assignment.left_type,
                    right_axis_type: assignment.right_type,
                });
                AxisPosition::Left
            });

        let options = PlottingOptions {
            color,
            y_axis_position,
            unit: units.unit_for(plottable.data_type()),
        };
        let produced = plottable.to_series(&options);
        let len = produced.len();
        trace!(
            label = plottable.label(),
            ?y_axis_position,
            first_index = acc.running_index,
            len,
            "flattened plottable"
        );

        acc.ranges.push(RangeEntry::new(
            acc.running_index,
            acc.running_index + len,
            plottable,
        ));
        acc.running_index += len;
        acc.series.extend(produced);
        acc
    });

    Ok(FlattenedSeries {
        series: accumulated.series,
        index: RangeMap::new(accumulated.ranges)?,
    })
}
