mod axis_partitioner;
mod color_allocator;
mod json_contract;
mod series_flattener;
mod tooltip;
mod unit_resolver;
pub mod value_format;
mod visualization_config;

use std::rc::Rc;

use indexmap::IndexMap;
use smallvec::SmallVec;
use tracing::debug;

use crate::core::{AxisPosition, Plottable, TimeExtent};
use crate::error::{ChartError, ChartResult};
use crate::extensions::release_series;
use crate::render::{RenderFrame, Renderer, SeriesSpec, YAxisSpec};
use crate::telemetry::{DiagnosticEvent, DiagnosticsSink, TracingDiagnostics};

pub use axis_partitioner::AxisAssignment;
pub use color_allocator::{CategoricalPalette, ColorAllocator, FixedPalette, PaletteProvider};
pub use json_contract::{
    SeriesOwner, VISUALIZATION_SNAPSHOT_JSON_SCHEMA_V1, VisualizationSnapshot,
    VisualizationSnapshotJsonContractV1,
};
pub use series_flattener::{FlattenedSeries, flatten_series};
pub use tooltip::{Tooltip, TooltipFormatter, TooltipParam, TooltipRow, dedupe_tooltip_params};
pub use unit_resolver::{TypeGroups, UnitResolution};
pub use visualization_config::VisualizationConfig;

/// Resolves plottables into axes, series and a tooltip formatter.
///
/// Each call to [`SeriesAxisResolver::resolve`] is a full, independent pass;
/// nothing carries over between passes.
pub struct SeriesAxisResolver {
    palette: Box<dyn PaletteProvider>,
    diagnostics: Rc<dyn DiagnosticsSink>,
    config: VisualizationConfig,
}

impl SeriesAxisResolver {
    /// Resolver with the categorical palette and `tracing` diagnostics.
    pub fn new(config: VisualizationConfig) -> ChartResult<Self> {
        config.validate()?;
        Ok(Self {
            palette: Box::new(CategoricalPalette),
            diagnostics: Rc::new(TracingDiagnostics),
            config,
        })
    }

    #[must_use]
    pub fn with_palette(mut self, palette: impl PaletteProvider + 'static) -> Self {
        self.palette = Box::new(palette);
        self
    }

    #[must_use]
    pub fn with_diagnostics(mut self, diagnostics: Rc<dyn DiagnosticsSink>) -> Self {
        self.diagnostics = diagnostics;
        self
    }

    #[must_use]
    pub fn config(&self) -> &VisualizationConfig {
        &self.config
    }

    pub fn resolve<'a>(
        &self,
        plottables: &'a [Box<dyn Plottable>],
    ) -> ChartResult<Visualization<'a>> {
        let refs: Vec<&'a dyn Plottable> = plottables
            .iter()
            .map(|boxed| -> &'a dyn Plottable { boxed.as_ref() })
            .collect();
        self.resolve_refs(&refs)
    }

    /// Runs one resolution pass.
    ///
    /// Fails with [`ChartError::NoPlottableValues`] when every plottable is
    /// empty (or there are none).
    pub fn resolve_refs<'a>(
        &self,
        plottables: &[&'a dyn Plottable],
    ) -> ChartResult<Visualization<'a>> {
        if plottables.iter().all(|plottable| plottable.is_empty()) {
            return Err(ChartError::NoPlottableValues);
        }

        let groups = TypeGroups::from_plottables(plottables);
        let axis_types = groups.axis_types();
        let assignment = AxisAssignment::partition(&axis_types);
        if !axis_types.is_empty() {
            self.report_axes_assigned(plottables, &assignment);
        }

        let units = UnitResolution::resolve(&groups, &self.config.fallback_units);

        let mut axes: SmallVec<[YAxisSpec; 2]> = SmallVec::new();
        axes.push(YAxisSpec {
            position: AxisPosition::Left,
            data_type: assignment.left_type,
            unit: units.unit_for(Some(assignment.left_type)),
        });
        if let Some(right_type) = assignment.right_type {
            axes.push(YAxisSpec {
                position: AxisPosition::Right,
                data_type: right_type,
                unit: units.unit_for(Some(right_type)),
            });
        }

        let colors =
            ColorAllocator::for_plottables(self.palette.as_ref(), plottables, &*self.diagnostics);
        let flattened = flatten_series(
            plottables,
            &assignment,
            &units,
            &colors,
            &*self.diagnostics,
        )?;

        let release_series = self.config.releases.as_deref().map(release_series);
        let visible_series_count = plottables.len() + usize::from(release_series.is_some());
        let time_extent = TimeExtent::from_boundaries(
            plottables
                .iter()
                .flat_map(|plottable| [plottable.start(), plottable.end()])
                .flatten(),
        );

        debug!(
            plottables = plottables.len(),
            series = flattened.series.len(),
            axes = axes.len(),
            show_legend = visible_series_count > 1,
            "resolved visualization"
        );

        Ok(Visualization {
            axes,
            assignment,
            series: flattened.series,
            release_series,
            show_legend: visible_series_count > 1,
            legend_selection: self.config.legend_selection.clone(),
            legend_label_max_len: self.config.legend_label_max_len,
            time_extent,
            utc: self.config.utc,
            tooltip: TooltipFormatter::new(
                flattened.index,
                units,
                Rc::clone(&self.diagnostics),
                self.config.utc,
                self.config.tooltip_label_max_len,
            ),
        })
    }

    fn report_axes_assigned(&self, plottables: &[&dyn Plottable], assignment: &AxisAssignment) {
        self.diagnostics.report(&DiagnosticEvent::AxesAssigned {
            labels: plottables
                .iter()
                .map(|plottable| plottable.label().to_owned())
                .collect(),
            types: plottables.iter().map(|plottable| plottable.data_type()).collect(),
            units: plottables.iter().map(|plottable| plottable.data_unit()).collect(),
            left_data_types: assignment.left_data_types.clone(),
            right_data_types: assignment.right_data_types.clone(),
            left_axis_type: assignment.left_type,
            right_axis_type: assignment.right_type,
        });
    }
}

/// Output of one resolution pass.
#[derive(Debug)]
pub struct Visualization<'a> {
    /// Left axis first; a right axis only when types were assigned to it.
    pub axes: SmallVec<[YAxisSpec; 2]>,
    pub assignment: AxisAssignment,
    /// Flat sub-series list, in plottable order.
    pub series: Vec<SeriesSpec>,
    pub release_series: Option<SeriesSpec>,
    pub show_legend: bool,
    pub legend_selection: Option<IndexMap<String, bool>>,
    pub legend_label_max_len: usize,
    pub time_extent: Option<TimeExtent>,
    pub utc: bool,
    pub tooltip: TooltipFormatter<'a>,
}

impl Visualization<'_> {
    #[must_use]
    pub fn axis(&self, position: AxisPosition) -> Option<&YAxisSpec> {
        self.axes.iter().find(|axis| axis.position == position)
    }

    /// Label as shown in the legend.
    #[must_use]
    pub fn legend_label(&self, series_name: &str) -> String {
        value_format::truncate_label(series_name, self.legend_label_max_len)
    }

    /// Series plus the release overlay, in draw order.
    pub fn all_series(&self) -> impl Iterator<Item = &SeriesSpec> {
        self.series.iter().chain(self.release_series.as_ref())
    }

    #[must_use]
    pub fn render_frame(&self) -> RenderFrame {
        RenderFrame {
            axes: self.axes.clone(),
            series: self.all_series().cloned().collect(),
            show_legend: self.show_legend,
            legend_selection: self.legend_selection.clone(),
            time_extent: self.time_extent,
            utc: self.utc,
        }
    }

    pub fn render<R: Renderer + ?Sized>(&self, renderer: &mut R) -> ChartResult<()> {
        renderer.render(&self.render_frame())
    }
}

impl YAxisSpec {
    /// Tick label for `value` on this axis.
    #[must_use]
    pub fn format_value(&self, value: f64) -> String {
        value_format::format_axis_value(value, self.data_type, self.unit)
    }
}
