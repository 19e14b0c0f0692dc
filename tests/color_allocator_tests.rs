mod support;

use std::cell::Cell;
use std::rc::Rc;

use support::StubPlottable;
use tsaxis_rs::api::{
    CategoricalPalette, ColorAllocator, FixedPalette, PaletteProvider, SeriesAxisResolver,
    VisualizationConfig,
};
use tsaxis_rs::core::{DataType, Plottable};
use tsaxis_rs::render::Color;
use tsaxis_rs::telemetry::{NoopDiagnostics, RecordingDiagnostics};

fn three_colors() -> Vec<Color> {
    vec![
        Color::from_rgb8(255, 0, 0),
        Color::from_rgb8(0, 255, 0),
        Color::from_rgb8(0, 0, 255),
    ]
}

fn resolved_colors(
    plottables: &[Box<dyn Plottable>],
    palette: Vec<Color>,
) -> Vec<Option<Color>> {
    let resolver = SeriesAxisResolver::new(VisualizationConfig::default())
        .expect("resolver")
        .with_palette(FixedPalette(palette))
        .with_diagnostics(Rc::new(NoopDiagnostics));
    resolver
        .resolve(plottables)
        .expect("resolution")
        .series
        .iter()
        .map(|series| series.color)
        .collect()
}

#[test]
fn colors_cycle_when_demand_exceeds_palette() {
    let allocator = ColorAllocator::new(three_colors());

    let cursor_colors: Vec<_> = (0..5).map(|cursor| allocator.color_at(cursor)).collect();

    let palette = three_colors();
    assert_eq!(
        cursor_colors,
        vec![
            Some(palette[0]),
            Some(palette[1]),
            Some(palette[2]),
            Some(palette[0]),
            Some(palette[1]),
        ]
    );
}

#[test]
fn plottables_with_own_color_take_no_palette_slot() {
    let palette = three_colors();
    let plottables: Vec<Box<dyn Plottable>> = [false, true, false, false, true, false]
        .into_iter()
        .enumerate()
        .map(|(i, own_color)| {
            let stub = StubPlottable::new(&format!("s{i}"), Some(DataType::Number));
            let stub = if own_color { stub.with_own_color() } else { stub };
            stub.boxed()
        })
        .collect();

    let colors = resolved_colors(&plottables, palette.clone());

    assert_eq!(
        colors,
        vec![
            Some(palette[0]),
            None,
            Some(palette[1]),
            Some(palette[2]),
            None,
            Some(palette[0]),
        ]
    );
}

#[test]
fn empty_palette_never_indexes_out_of_bounds() {
    let allocator = ColorAllocator::new(Vec::new());
    assert_eq!(allocator.color_at(0), None);
    assert_eq!(allocator.color_at(7), None);

    let plottables: Vec<Box<dyn Plottable>> = vec![
        StubPlottable::new("a", Some(DataType::Number)).boxed(),
        StubPlottable::new("b", Some(DataType::Number)).boxed(),
    ];
    assert_eq!(resolved_colors(&plottables, Vec::new()), vec![None, None]);
}

#[test]
fn palette_is_requested_for_color_needing_plottables_only() {
    let requested = Rc::new(Cell::new(0_usize));
    let seen = Rc::clone(&requested);
    let provider = move |size: usize| {
        seen.set(size);
        three_colors()
    };

    let plottables = [
        StubPlottable::new("a", Some(DataType::Number)),
        StubPlottable::new("b", Some(DataType::Number)).with_own_color(),
        StubPlottable::new("c", Some(DataType::Number)),
    ];
    let refs: Vec<&dyn Plottable> = plottables.iter().map(|p| p as &dyn Plottable).collect();

    let allocator = ColorAllocator::for_plottables(&provider, &refs, &NoopDiagnostics);

    assert_eq!(requested.get(), 2);
    assert_eq!(allocator.palette().len(), 3);
}

#[test]
fn empty_palette_is_reported() {
    let diagnostics = RecordingDiagnostics::new();
    let plottables = [StubPlottable::new("a", Some(DataType::Number))];
    let refs: Vec<&dyn Plottable> = plottables.iter().map(|p| p as &dyn Plottable).collect();

    let allocator = ColorAllocator::for_plottables(&FixedPalette(Vec::new()), &refs, &diagnostics);

    assert!(allocator.palette().is_empty());
    assert_eq!(diagnostics.count_with_fingerprint("palette-exhausted"), 1);
}

#[test]
fn categorical_palette_honors_requested_size() {
    assert_eq!(CategoricalPalette.palette(0).len(), 0);
    assert_eq!(CategoricalPalette.palette(4).len(), 4);
    assert_eq!(CategoricalPalette.palette(500).len(), 10);
}

#[test]
fn resolved_series_receive_cycled_palette_colors() {
    let palette = three_colors();
    let plottables: Vec<Box<dyn Plottable>> = (0..5)
        .map(|i| StubPlottable::new(&format!("s{i}"), Some(DataType::Number)).boxed())
        .collect();

    let colors = resolved_colors(&plottables, palette.clone());

    assert_eq!(
        colors,
        vec![
            Some(palette[0]),
            Some(palette[1]),
            Some(palette[2]),
            Some(palette[0]),
            Some(palette[1]),
        ]
    );
}
