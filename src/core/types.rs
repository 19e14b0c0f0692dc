use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Output type of an aggregated field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DataType {
    Boolean,
    Date,
    Duration,
    Integer,
    Number,
    Percentage,
    Size,
    String,
    Rate,
    Score,
}

/// Generic type used for axes that span several types, and for plottables
/// that carry no type at all.
pub const FALLBACK_TYPE: DataType = DataType::Number;

impl DataType {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Boolean => "boolean",
            Self::Date => "date",
            Self::Duration => "duration",
            Self::Integer => "integer",
            Self::Number => "number",
            Self::Percentage => "percentage",
            Self::Size => "size",
            Self::String => "string",
            Self::Rate => "rate",
            Self::Score => "score",
        }
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DurationUnit {
    Nanosecond,
    Microsecond,
    Millisecond,
    Second,
    Minute,
    Hour,
    Day,
    Week,
    Month,
    Year,
}

impl DurationUnit {
    /// Length of one unit expressed in milliseconds.
    #[must_use]
    pub const fn in_milliseconds(self) -> f64 {
        match self {
            Self::Nanosecond => 1e-6,
            Self::Microsecond => 1e-3,
            Self::Millisecond => 1.0,
            Self::Second => 1_000.0,
            Self::Minute => 60_000.0,
            Self::Hour => 3_600_000.0,
            Self::Day => 86_400_000.0,
            Self::Week => 604_800_000.0,
            Self::Month => 2_629_800_000.0,
            Self::Year => 31_557_600_000.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SizeUnit {
    Bit,
    Byte,
    Kibibyte,
    Mebibyte,
    Gibibyte,
    Tebibyte,
    Pebibyte,
    Kilobyte,
    Megabyte,
    Gigabyte,
    Terabyte,
    Petabyte,
}

impl SizeUnit {
    #[must_use]
    pub const fn in_bytes(self) -> f64 {
        match self {
            Self::Bit => 0.125,
            Self::Byte => 1.0,
            Self::Kibibyte => 1024.0,
            Self::Mebibyte => 1_048_576.0,
            Self::Gibibyte => 1_073_741_824.0,
            Self::Tebibyte => 1_099_511_627_776.0,
            Self::Pebibyte => 1_125_899_906_842_624.0,
            Self::Kilobyte => 1e3,
            Self::Megabyte => 1e6,
            Self::Gigabyte => 1e9,
            Self::Terabyte => 1e12,
            Self::Petabyte => 1e15,
        }
    }

    /// Decimal units (kB, MB, ...) format in base 10, everything else in base 2.
    #[must_use]
    pub const fn is_base10(self) -> bool {
        matches!(
            self,
            Self::Kilobyte | Self::Megabyte | Self::Gigabyte | Self::Terabyte | Self::Petabyte
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RateUnit {
    #[serde(rename = "1/second")]
    PerSecond,
    #[serde(rename = "1/minute")]
    PerMinute,
    #[serde(rename = "1/hour")]
    PerHour,
}

impl RateUnit {
    #[must_use]
    pub const fn suffix(self) -> &'static str {
        match self {
            Self::PerSecond => "/s",
            Self::PerMinute => "/min",
            Self::PerHour => "/hr",
        }
    }
}

/// Unit tag scoped to the data type it qualifies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DataUnit {
    Duration(DurationUnit),
    Size(SizeUnit),
    Rate(RateUnit),
}

impl From<DurationUnit> for DataUnit {
    fn from(unit: DurationUnit) -> Self {
        Self::Duration(unit)
    }
}

impl From<SizeUnit> for DataUnit {
    fn from(unit: SizeUnit) -> Self {
        Self::Size(unit)
    }
}

impl From<RateUnit> for DataUnit {
    fn from(unit: RateUnit) -> Self {
        Self::Rate(unit)
    }
}

/// Unit used for a data type when its plottables supply none, or disagree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FallbackUnits {
    units: IndexMap<DataType, DataUnit>,
}

impl Default for FallbackUnits {
    fn default() -> Self {
        let mut units = IndexMap::new();
        units.insert(DataType::Duration, DurationUnit::Millisecond.into());
        units.insert(DataType::Size, SizeUnit::Byte.into());
        units.insert(DataType::Rate, RateUnit::PerSecond.into());
        Self { units }
    }
}

impl FallbackUnits {
    /// A table with no registered units.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            units: IndexMap::new(),
        }
    }

    #[must_use]
    pub fn with_unit(mut self, data_type: DataType, unit: DataUnit) -> Self {
        self.units.insert(data_type, unit);
        self
    }

    #[must_use]
    pub fn get(&self, data_type: DataType) -> Option<DataUnit> {
        self.units.get(&data_type).copied()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AxisPosition {
    Left,
    Right,
}
