use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::core::AxisPosition;
use crate::render::{Color, SeriesKind, SeriesMarkLine, SeriesSpec};

pub const RELEASES_SERIES_NAME: &str = "Releases";

const RELEASE_LINE_COLOR: Color = Color::from_rgb8(0x80, 0x70, 0x8f);

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Release {
    pub version: String,
    pub timestamp: DateTime<Utc>,
}

impl Release {
    #[must_use]
    pub fn new(version: impl Into<String>, timestamp: DateTime<Utc>) -> Self {
        Self {
            version: version.into(),
            timestamp,
        }
    }
}

/// Short form of a release version: `frontend@1.2.3+8f9e0a` → `1.2.3`.
///
/// Versions without a package prefix or build suffix are returned as-is.
#[must_use]
pub fn format_release_version(version: &str) -> String {
    let without_package = version
        .split_once('@')
        .map_or(version, |(_, rest)| rest);
    let without_build = without_package
        .split_once('+')
        .map_or(without_package, |(base, _)| base);

    if without_build.is_empty() {
        version.to_owned()
    } else {
        without_build.to_owned()
    }
}

/// One mark-line series with a vertical line per release, in time order.
#[must_use]
pub fn release_series(releases: &[Release]) -> SeriesSpec {
    let mut ordered: Vec<&Release> = releases.iter().collect();
    ordered.sort_by_key(|release| release.timestamp);

    let mark_lines = ordered
        .into_iter()
        .map(|release| SeriesMarkLine {
            timestamp: release.timestamp,
            label: format_release_version(&release.version),
        })
        .collect();

    SeriesSpec::new(RELEASES_SERIES_NAME, SeriesKind::MarkLine, AxisPosition::Left)
        .with_color(Some(RELEASE_LINE_COLOR))
        .with_mark_lines(mark_lines)
}
