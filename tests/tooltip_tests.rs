mod support;

use std::rc::Rc;

use support::{at_minute, line, time_series};
use tsaxis_rs::api::{
    SeriesAxisResolver, TooltipParam, VisualizationConfig, dedupe_tooltip_params,
};
use tsaxis_rs::core::{DataType, DurationUnit, Line, Plottable};
use tsaxis_rs::telemetry::{DiagnosticEvent, RecordingDiagnostics};

fn latency_and_ratio() -> Vec<Box<dyn Plottable>> {
    vec![
        line(
            "latency",
            Some(DataType::Duration),
            Some(DurationUnit::Second.into()),
        ),
        line("error_rate", Some(DataType::Percentage), None),
    ]
}

fn resolver(config: VisualizationConfig) -> (SeriesAxisResolver, Rc<RecordingDiagnostics>) {
    let diagnostics = Rc::new(RecordingDiagnostics::new());
    let resolver = SeriesAxisResolver::new(config)
        .expect("resolver")
        .with_diagnostics(diagnostics.clone());
    (resolver, diagnostics)
}

#[test]
fn dedupe_keeps_first_valued_entry_per_name() {
    let params = vec![
        TooltipParam::new("a", Some(0), at_minute(0), Some(1.0)),
        TooltipParam::new("a", Some(1), at_minute(0), Some(2.0)),
        TooltipParam::new("b", Some(2), at_minute(0), None),
        TooltipParam::new("c", Some(3), at_minute(0), Some(3.0)),
    ];

    let visible = dedupe_tooltip_params(&params);

    let summary: Vec<_> = visible
        .iter()
        .map(|param| (param.series_name.as_str(), param.value))
        .collect();
    assert_eq!(summary, vec![("a", Some(1.0)), ("c", Some(3.0))]);
}

#[test]
fn dedupe_skips_valueless_entry_before_valued_duplicate() {
    let params = vec![
        TooltipParam::new("a", Some(1), at_minute(0), None),
        TooltipParam::new("a", Some(0), at_minute(0), Some(7.0)),
    ];

    let visible = dedupe_tooltip_params(&params);

    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].value, Some(7.0));
}

#[test]
fn values_are_formatted_by_the_owning_plottable_type() {
    let plottables = latency_and_ratio();
    let (resolver, _) = resolver(VisualizationConfig::default());
    let visualization = resolver.resolve(&plottables).expect("resolution");
    let tooltip = &visualization.tooltip;

    assert_eq!(tooltip.format_value(1.5, Some(0), Some("latency")), "1.50s");
    assert_eq!(
        tooltip.format_value(0.25, Some(1), Some("error_rate")),
        "25.00%"
    );
}

#[test]
fn unknown_series_index_falls_back_to_number_formatting() {
    let plottables = latency_and_ratio();
    let (resolver, diagnostics) = resolver(VisualizationConfig::default());
    let visualization = resolver.resolve(&plottables).expect("resolution");

    assert_eq!(visualization.tooltip.data_type_at(99), DataType::Number);
    assert_eq!(visualization.tooltip.format_value(3.0, Some(99), None), "3");
    assert_eq!(
        diagnostics.count_with_fingerprint("missing-series-attribution"),
        0
    );
}

#[test]
fn missing_series_index_is_reported_and_locale_formatted() {
    let plottables = latency_and_ratio();
    let (resolver, diagnostics) = resolver(VisualizationConfig::default());
    let visualization = resolver.resolve(&plottables).expect("resolution");

    let formatted = visualization
        .tooltip
        .format_value(1234.5, None, Some("Releases"));

    assert_eq!(formatted, "1,234.5");
    assert_eq!(
        diagnostics.count_with_fingerprint("missing-series-attribution"),
        1
    );
    assert!(diagnostics.events().contains(&DiagnosticEvent::MissingSeriesAttribution {
        series_name: Some("Releases".to_owned()),
    }));
}

#[test]
fn tooltip_has_utc_header_and_one_row_per_visible_series() {
    let plottables = latency_and_ratio();
    let (resolver, _) = resolver(VisualizationConfig::default().with_utc(true));
    let visualization = resolver.resolve(&plottables).expect("resolution");

    let tooltip = visualization.tooltip.format(&[
        TooltipParam::new("latency", Some(0), at_minute(0), Some(0.25)),
        TooltipParam::new("latency", Some(0), at_minute(0), Some(0.25)),
        TooltipParam::new("error_rate", Some(1), at_minute(0), Some(0.5)),
    ]);

    assert_eq!(
        tooltip.header.as_deref(),
        Some("Nov 14, 2023 10:13:20 PM (UTC)")
    );
    let rows: Vec<_> = tooltip
        .rows
        .iter()
        .map(|row| (row.series_name.as_str(), row.value.as_str()))
        .collect();
    assert_eq!(rows, vec![("latency", "250.00ms"), ("error_rate", "50.00%")]);
}

#[test]
fn tooltip_without_visible_values_is_empty() {
    let plottables = latency_and_ratio();
    let (resolver, _) = resolver(VisualizationConfig::default());
    let visualization = resolver.resolve(&plottables).expect("resolution");

    let tooltip = visualization
        .tooltip
        .format(&[TooltipParam::new("latency", Some(0), at_minute(0), None)]);

    assert!(tooltip.is_empty());
    assert!(tooltip.header.is_none());
}

#[test]
fn long_series_names_are_truncated_in_rows() {
    let plottables: Vec<Box<dyn Plottable>> = vec![Box::new(Line::new(time_series(
        "a_very_long_series_name",
        Some(DataType::Number),
        None,
        &[Some(1.0)],
    )))];
    let (resolver, _) = resolver(VisualizationConfig::default().with_label_limits(80, 6));
    let visualization = resolver.resolve(&plottables).expect("resolution");

    let tooltip = visualization.tooltip.format(&[TooltipParam::new(
        "a_very_long_series_name",
        Some(0),
        at_minute(0),
        Some(1.0),
    )]);

    assert_eq!(tooltip.rows[0].series_name, "a_very…");
    assert_eq!(tooltip.rows[0].value, "1");
}
