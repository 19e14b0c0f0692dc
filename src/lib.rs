//! tsaxis-rs: axis, unit and tooltip resolution for time-series charts.
//!
//! The crate turns a set of typed, labeled [`core::Plottable`] values into a
//! fully resolved chart description (Y axes, flattened series, colors,
//! tooltip formatter) that an external [`render::Renderer`] can draw.

pub mod api;
pub mod core;
pub mod error;
pub mod extensions;
pub mod render;
pub mod telemetry;

pub use api::{SeriesAxisResolver, Visualization, VisualizationConfig};
pub use error::{ChartError, ChartResult};
