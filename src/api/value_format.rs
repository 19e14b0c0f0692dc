//! Value and label formatting for axes, tooltips and legends.
//!
//! Numbers use en-US grouping (`1,234.5`); durations, sizes and rates use
//! short suffixes.

use chrono::{DateTime, Local, Timelike, Utc};

use crate::core::{DataType, DataUnit, DurationUnit, RateUnit, SizeUnit};

const MAX_LOCALE_FRACTION_DIGITS: usize = 3;

const DURATION_LABELS: [(DurationUnit, &str); 8] = [
    (DurationUnit::Week, "wk"),
    (DurationUnit::Day, "d"),
    (DurationUnit::Hour, "hr"),
    (DurationUnit::Minute, "min"),
    (DurationUnit::Second, "s"),
    (DurationUnit::Millisecond, "ms"),
    (DurationUnit::Microsecond, "μs"),
    (DurationUnit::Nanosecond, "ns"),
];

const MILLISECOND_LABEL_INDEX: usize = 5;

const BASE2_SIZE_LABELS: [&str; 6] = ["B", "KiB", "MiB", "GiB", "TiB", "PiB"];
const BASE10_SIZE_LABELS: [&str; 6] = ["B", "KB", "MB", "GB", "TB", "PB"];

/// Ascending magnitude steps: threshold, suffix, fraction digits.
const ABBREVIATIONS: [(f64, &str, usize); 5] = [
    (1.0, "", 2),
    (1e3, "k", 1),
    (1e6, "M", 1),
    (1e9, "B", 1),
    (1e12, "T", 1),
];

const ABBREVIATION_STEP: f64 = 1000.0;

/// Formats a hovered value for the tooltip, using the full precision the
/// data type calls for.
#[must_use]
pub fn format_tooltip_value(value: f64, data_type: DataType, unit: Option<DataUnit>) -> String {
    if !value.is_finite() {
        return format_locale_number(value);
    }

    match (data_type, unit) {
        (DataType::Duration, unit) => {
            format_duration(value * duration_scale(unit), FractionDigits::Fixed(2))
        }
        (DataType::Percentage, _) => {
            format!("{}%", format_fixed(value * 100.0, FractionDigits::Fixed(2)))
        }
        (DataType::Size, unit) => format_size(value, size_unit(unit), FractionDigits::Fixed(2)),
        (DataType::Rate, unit) => format!(
            "{}{}",
            format_abbreviated_number(value),
            rate_unit(unit).suffix()
        ),
        (DataType::Integer, _) => format_locale_number(value.round()),
        _ => format_locale_number(value),
    }
}

/// Formats an axis tick label. Same rules as the tooltip, but compact.
#[must_use]
pub fn format_axis_value(value: f64, data_type: DataType, unit: Option<DataUnit>) -> String {
    if !value.is_finite() {
        return format_locale_number(value);
    }

    match (data_type, unit) {
        (DataType::Duration, unit) => {
            format_duration(value * duration_scale(unit), FractionDigits::UpTo(2))
        }
        (DataType::Percentage, _) => {
            format!("{}%", format_fixed(value * 100.0, FractionDigits::UpTo(2)))
        }
        (DataType::Size, unit) => format_size(value, size_unit(unit), FractionDigits::UpTo(1)),
        (DataType::Rate, unit) => format!(
            "{}{}",
            format_abbreviated_number(value),
            rate_unit(unit).suffix()
        ),
        _ => format_abbreviated_number(value),
    }
}

/// en-US grouping with at most three fraction digits (`1234.5678` → `1,234.568`).
#[must_use]
pub fn format_locale_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_owned();
    }
    if value.is_infinite() {
        return if value > 0.0 { "∞" } else { "-∞" }.to_owned();
    }
    format_fixed(value, FractionDigits::UpTo(MAX_LOCALE_FRACTION_DIGITS))
}

/// `1500` → `1.5k`, `2_000_000` → `2M`; values under 1000 keep up to two
/// fraction digits.
#[must_use]
pub fn format_abbreviated_number(value: f64) -> String {
    if !value.is_finite() {
        return format_locale_number(value);
    }

    let magnitude = value.abs();
    let mut index = ABBREVIATIONS
        .iter()
        .rposition(|(threshold, _, _)| magnitude >= *threshold)
        .unwrap_or(0);
    loop {
        let (threshold, suffix, digits) = ABBREVIATIONS[index];
        let scaled = round_to(value / threshold, digits);
        if scaled.abs() < ABBREVIATION_STEP || index + 1 == ABBREVIATIONS.len() {
            return format!("{}{suffix}", format_fixed(scaled, FractionDigits::UpTo(digits)));
        }
        index += 1;
    }
}

/// Axis tick label for a timestamp: a date at midnight, a time otherwise.
#[must_use]
pub fn format_x_axis_timestamp(timestamp: DateTime<Utc>, utc: bool) -> String {
    if utc {
        format_axis_time(timestamp)
    } else {
        format_axis_time(timestamp.with_timezone(&Local))
    }
}

fn format_axis_time<Tz>(timestamp: DateTime<Tz>) -> String
where
    Tz: chrono::TimeZone,
    Tz::Offset: std::fmt::Display,
{
    if timestamp.hour() == 0 && timestamp.minute() == 0 && timestamp.second() == 0 {
        timestamp.format("%b %-d").to_string()
    } else {
        timestamp.format("%-I:%M %p").to_string()
    }
}

/// Tooltip header for the hovered bucket.
#[must_use]
pub fn format_tooltip_timestamp(timestamp: DateTime<Utc>, utc: bool) -> String {
    const PATTERN: &str = "%b %-d, %Y %-I:%M:%S %p";
    if utc {
        format!("{} (UTC)", timestamp.format(PATTERN))
    } else {
        timestamp.with_timezone(&Local).format(PATTERN).to_string()
    }
}

/// Shortens `label` to `max_chars` characters, marking the cut with `…`.
#[must_use]
pub fn truncate_label(label: &str, max_chars: usize) -> String {
    if label.chars().count() <= max_chars {
        return label.to_owned();
    }
    let mut truncated: String = label.chars().take(max_chars).collect();
    truncated.push('…');
    truncated
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FractionDigits {
    Fixed(usize),
    UpTo(usize),
}

impl FractionDigits {
    fn precision(self) -> usize {
        match self {
            Self::Fixed(precision) | Self::UpTo(precision) => precision,
        }
    }
}

fn duration_scale(unit: Option<DataUnit>) -> f64 {
    match unit {
        Some(DataUnit::Duration(unit)) => unit.in_milliseconds(),
        _ => DurationUnit::Millisecond.in_milliseconds(),
    }
}

fn size_unit(unit: Option<DataUnit>) -> SizeUnit {
    match unit {
        Some(DataUnit::Size(unit)) => unit,
        _ => SizeUnit::Byte,
    }
}

fn rate_unit(unit: Option<DataUnit>) -> RateUnit {
    match unit {
        Some(DataUnit::Rate(unit)) => unit,
        _ => RateUnit::PerSecond,
    }
}

fn format_duration(milliseconds: f64, digits: FractionDigits) -> String {
    let magnitude = milliseconds.abs();
    let mut index = DURATION_LABELS
        .iter()
        .position(|(unit, _)| magnitude >= unit.in_milliseconds())
        .unwrap_or(MILLISECOND_LABEL_INDEX);
    loop {
        let (unit, label) = DURATION_LABELS[index];
        let scaled = if magnitude == 0.0 {
            0.0
        } else {
            round_to(milliseconds / unit.in_milliseconds(), digits.precision())
        };
        // Rounding can carry into the next larger unit (59.999s -> 1min).
        let carries = index
            .checked_sub(1)
            .map(|larger| DURATION_LABELS[larger].0.in_milliseconds())
            .is_some_and(|larger_ms| (scaled * unit.in_milliseconds()).abs() >= larger_ms);
        if !carries {
            return format!("{}{label}", format_fixed(scaled, digits));
        }
        index -= 1;
    }
}

fn format_size(value: f64, unit: SizeUnit, digits: FractionDigits) -> String {
    let (step, labels) = if unit.is_base10() {
        (1000.0, BASE10_SIZE_LABELS)
    } else {
        (1024.0, BASE2_SIZE_LABELS)
    };

    let mut scaled = value * unit.in_bytes();
    let mut index = 0;
    loop {
        let shown = if index == 0 {
            FractionDigits::UpTo(2)
        } else {
            digits
        };
        let rounded = round_to(scaled, shown.precision());
        if rounded.abs() < step || index + 1 == labels.len() {
            return format!("{} {}", format_fixed(rounded, shown), labels[index]);
        }
        scaled /= step;
        index += 1;
    }
}

fn round_to(value: f64, digits: usize) -> f64 {
    let factor = 10_f64.powi(i32::try_from(digits).unwrap_or(i32::MAX));
    (value * factor).round() / factor
}

fn format_fixed(value: f64, digits: FractionDigits) -> String {
    let precision = digits.precision();
    let mut text = format!("{value:.precision$}");
    if matches!(digits, FractionDigits::UpTo(_)) && text.contains('.') {
        let trimmed_len = text.trim_end_matches('0').trim_end_matches('.').len();
        text.truncate(trimmed_len);
    }
    if text.trim_start_matches('-').chars().all(|c| c == '0' || c == '.') {
        text = text.trim_start_matches('-').to_owned();
    }
    group_thousands(&text)
}

fn group_thousands(text: &str) -> String {
    let (sign, unsigned) = match text.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", text),
    };
    let (integer, fraction) = match unsigned.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (unsigned, None),
    };

    let mut grouped = String::with_capacity(text.len() + integer.len() / 3);
    for (index, digit) in integer.chars().enumerate() {
        if index > 0 && (integer.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    match fraction {
        Some(fraction) => format!("{sign}{grouped}.{fraction}"),
        None => format!("{sign}{grouped}"),
    }
}
