use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::core::FallbackUnits;
use crate::error::{ChartError, ChartResult};
use crate::extensions::Release;

/// Resolver configuration.
///
/// This type is serializable so host applications can persist or load widget
/// setup without inventing their own ad-hoc format. Every field has a default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VisualizationConfig {
    /// Format timestamps in UTC instead of local time.
    #[serde(default)]
    pub utc: bool,
    /// Release overlay. `Some(vec![])` still adds an (empty) overlay series.
    #[serde(default)]
    pub releases: Option<Vec<Release>>,
    /// Series label → visible flag, passed through to the legend.
    #[serde(default)]
    pub legend_selection: Option<IndexMap<String, bool>>,
    #[serde(default)]
    pub fallback_units: FallbackUnits,
    #[serde(default = "default_legend_label_max_len")]
    pub legend_label_max_len: usize,
    #[serde(default = "default_tooltip_label_max_len")]
    pub tooltip_label_max_len: usize,
}

impl Default for VisualizationConfig {
    fn default() -> Self {
        Self {
            utc: false,
            releases: None,
            legend_selection: None,
            fallback_units: FallbackUnits::default(),
            legend_label_max_len: default_legend_label_max_len(),
            tooltip_label_max_len: default_tooltip_label_max_len(),
        }
    }
}

impl VisualizationConfig {
    #[must_use]
    pub fn with_utc(mut self, utc: bool) -> Self {
        self.utc = utc;
        self
    }

    #[must_use]
    pub fn with_releases(mut self, releases: Vec<Release>) -> Self {
        self.releases = Some(releases);
        self
    }

    #[must_use]
    pub fn with_legend_selection(mut self, selection: IndexMap<String, bool>) -> Self {
        self.legend_selection = Some(selection);
        self
    }

    #[must_use]
    pub fn with_fallback_units(mut self, fallback_units: FallbackUnits) -> Self {
        self.fallback_units = fallback_units;
        self
    }

    #[must_use]
    pub fn with_label_limits(
        mut self,
        legend_label_max_len: usize,
        tooltip_label_max_len: usize,
    ) -> Self {
        self.legend_label_max_len = legend_label_max_len;
        self.tooltip_label_max_len = tooltip_label_max_len;
        self
    }

    pub fn validate(&self) -> ChartResult<()> {
        for (value, name) in [
            (self.legend_label_max_len, "legend_label_max_len"),
            (self.tooltip_label_max_len, "tooltip_label_max_len"),
        ] {
            if value == 0 {
                return Err(ChartError::InvalidConfig(format!("`{name}` must be > 0")));
            }
        }
        Ok(())
    }

    /// Parses and validates a JSON config.
    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        let config: Self = serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidConfig(format!("failed to parse config json: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            ChartError::InvalidConfig(format!("failed to serialize config json: {e}"))
        })
    }
}

fn default_legend_label_max_len() -> usize {
    80
}

fn default_tooltip_label_max_len() -> usize {
    60
}
