//! Telemetry helpers and the diagnostics port used by the resolver.
//!
//! Non-fatal anomalies (an unassignable axis, a tooltip value without series
//! attribution, an empty palette) never abort a resolution pass. They are
//! reported through a [`DiagnosticsSink`] so hosts can forward them to their
//! own observability stack, and tests can record them.

use std::cell::RefCell;

use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};

use crate::core::{DataType, DataUnit};

/// Initializes a default `tracing` subscriber when the `telemetry` feature is enabled.
///
/// Returns `true` when initialization succeeds.
/// Returns `false` when no initialization is performed (feature disabled) or if a
/// global subscriber was already set by the host application.
#[must_use]
pub fn init_default_tracing() -> bool {
    #[cfg(feature = "telemetry")]
    {
        let builder = tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("tsaxis_rs=info")),
            )
            .with_target(true)
            .compact();

        return builder.try_init().is_ok();
    }

    #[cfg(not(feature = "telemetry"))]
    {
        false
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum DiagnosticLevel {
    Info,
    Warn,
    Error,
}

/// Side-channel events emitted while resolving or formatting a chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DiagnosticEvent {
    /// Summary of the axis partition, emitted once per pass when at least one
    /// data type was assigned.
    AxesAssigned {
        labels: Vec<String>,
        types: Vec<Option<DataType>>,
        units: Vec<Option<DataUnit>>,
        left_data_types: Vec<DataType>,
        right_data_types: Vec<DataType>,
        left_axis_type: DataType,
        right_axis_type: Option<DataType>,
    },
    /// A plottable's data type is owned by neither axis. Its series are
    /// placed on the left axis.
    UnassignableAxis {
        label: String,
        data_type: Option<DataType>,
        left_axis_type: DataType,
        right_axis_type: Option<DataType>,
    },
    /// A tooltip value arrived without a series index, so it was formatted
    /// with the locale default.
    MissingSeriesAttribution { series_name: Option<String> },
    /// Colors were requested but the palette provider returned none.
    PaletteExhausted { requested: usize },
}

impl DiagnosticEvent {
    #[must_use]
    pub fn level(&self) -> DiagnosticLevel {
        match self {
            Self::AxesAssigned { .. } => DiagnosticLevel::Info,
            Self::MissingSeriesAttribution { .. } | Self::PaletteExhausted { .. } => {
                DiagnosticLevel::Warn
            }
            Self::UnassignableAxis { .. } => DiagnosticLevel::Error,
        }
    }

    /// Stable grouping key so repeated occurrences collapse into one issue.
    #[must_use]
    pub fn fingerprint(&self) -> &'static str {
        match self {
            Self::AxesAssigned { .. } => "axes-assigned",
            Self::UnassignableAxis { .. } => "could-not-assign-plottable-to-an-axis",
            Self::MissingSeriesAttribution { .. } => "missing-series-attribution",
            Self::PaletteExhausted { .. } => "palette-exhausted",
        }
    }
}

/// Reporting port injected into the resolver.
pub trait DiagnosticsSink {
    fn report(&self, event: &DiagnosticEvent);
}

/// Forwards events to `tracing` at the level each event carries.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingDiagnostics;

impl DiagnosticsSink for TracingDiagnostics {
    fn report(&self, event: &DiagnosticEvent) {
        let fingerprint = event.fingerprint();
        match event {
            DiagnosticEvent::AxesAssigned {
                labels,
                types,
                units,
                left_data_types,
                right_data_types,
                left_axis_type,
                right_axis_type,
            } => info!(
                fingerprint,
                ?labels,
                ?types,
                ?units,
                ?left_data_types,
                ?right_data_types,
                %left_axis_type,
                ?right_axis_type,
                "assigned axes"
            ),
            DiagnosticEvent::UnassignableAxis {
                label,
                data_type,
                left_axis_type,
                right_axis_type,
            } => error!(
                fingerprint,
                label = label.as_str(),
                ?data_type,
                %left_axis_type,
                ?right_axis_type,
                "could not assign plottable to an axis"
            ),
            DiagnosticEvent::MissingSeriesAttribution { series_name } => warn!(
                fingerprint,
                ?series_name,
                "could not format value due to missing series information"
            ),
            DiagnosticEvent::PaletteExhausted { requested } => warn!(
                fingerprint,
                requested,
                "palette provider returned no colors"
            ),
        }
    }
}

/// Drops every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopDiagnostics;

impl DiagnosticsSink for NoopDiagnostics {
    fn report(&self, _event: &DiagnosticEvent) {}
}

/// Keeps every reported event in memory, in report order.
#[derive(Debug, Default)]
pub struct RecordingDiagnostics {
    events: RefCell<Vec<DiagnosticEvent>>,
}

impl RecordingDiagnostics {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn events(&self) -> Vec<DiagnosticEvent> {
        self.events.borrow().clone()
    }

    #[must_use]
    pub fn count_with_fingerprint(&self, fingerprint: &str) -> usize {
        self.events
            .borrow()
            .iter()
            .filter(|event| event.fingerprint() == fingerprint)
            .count()
    }

    pub fn clear(&self) {
        self.events.borrow_mut().clear();
    }
}

impl DiagnosticsSink for RecordingDiagnostics {
    fn report(&self, event: &DiagnosticEvent) {
        self.events.borrow_mut().push(event.clone());
    }
}
