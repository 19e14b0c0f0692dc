//! Overlays drawn on top of the plottable series.
//!
//! Overlays never take part in axis, unit or color resolution.

pub mod releases;

pub use releases::{RELEASES_SERIES_NAME, Release, format_release_version, release_series};
