use approx::assert_relative_eq;
use tsaxis_rs::ChartError;
use tsaxis_rs::core::{AxisPosition, DataType};
use tsaxis_rs::render::{
    Color, NullRenderer, RenderFrame, Renderer, SeriesKind, SeriesPoint, SeriesSpec, YAxisSpec,
};

fn axis(position: AxisPosition) -> YAxisSpec {
    YAxisSpec {
        position,
        data_type: DataType::Number,
        unit: None,
    }
}

fn frame(axes: &[AxisPosition], series: Vec<SeriesSpec>) -> RenderFrame {
    RenderFrame {
        axes: axes.iter().copied().map(axis).collect(),
        series,
        show_legend: false,
        legend_selection: None,
        time_extent: None,
        utc: true,
    }
}

#[test]
fn hex_colors_parse_in_every_supported_width() {
    let short = Color::from_hex("#f00").expect("short hex");
    let full = Color::from_hex("7553ff").expect("full hex");
    let translucent = Color::from_hex("#00000080").expect("hex with alpha");

    assert_eq!(short, Color::rgb(1.0, 0.0, 0.0));
    assert_relative_eq!(full.red, 117.0 / 255.0);
    assert_relative_eq!(translucent.alpha, 128.0 / 255.0);
    assert_eq!(full.to_hex(), "#7553ff");
    assert_eq!(translucent.to_hex(), "#00000080");
    assert!(matches!(
        Color::from_hex("#12345"),
        Err(ChartError::InvalidData(_))
    ));
    assert!(matches!(
        Color::from_hex("#zzzzzz"),
        Err(ChartError::InvalidData(_))
    ));
}

#[test]
fn color_serializes_as_hex_string() {
    let color = Color::from_rgb8(0x3d, 0x74, 0xdb);

    let json = serde_json::to_string(&color).expect("serialize");
    let restored: Color = serde_json::from_str(&json).expect("deserialize");

    assert_eq!(json, "\"#3d74db\"");
    assert_eq!(restored, color);
}

#[test]
fn frame_requires_left_axis_first() {
    assert!(frame(&[AxisPosition::Left], Vec::new()).validate().is_ok());
    assert!(
        frame(&[AxisPosition::Left, AxisPosition::Right], Vec::new())
            .validate()
            .is_ok()
    );
    assert!(frame(&[], Vec::new()).validate().is_err());
    assert!(frame(&[AxisPosition::Right], Vec::new()).validate().is_err());
    assert!(
        frame(&[AxisPosition::Right, AxisPosition::Left], Vec::new())
            .validate()
            .is_err()
    );
}

#[test]
fn series_on_missing_right_axis_is_rejected() {
    let series = SeriesSpec::new("orphan", SeriesKind::Line, AxisPosition::Right);
    let left_only = frame(&[AxisPosition::Left], vec![series.clone()]);
    let mut renderer = NullRenderer::default();

    assert!(matches!(
        renderer.render(&left_only),
        Err(ChartError::InvalidData(_))
    ));
    assert_eq!(renderer.frames_rendered, 0);

    let both = frame(&[AxisPosition::Left, AxisPosition::Right], vec![series]);
    renderer.render(&both).expect("valid frame");
    assert_eq!(renderer.frames_rendered, 1);
    assert!(both.has_right_axis());
}

#[test]
fn series_validation_checks_opacity_and_values() {
    let dimmed = SeriesSpec::new("bars", SeriesKind::Bar, AxisPosition::Left).with_opacity(1.5);
    assert!(dimmed.validate().is_err());

    let bad_color = SeriesSpec::new("line", SeriesKind::Line, AxisPosition::Left)
        .with_color(Some(Color::rgba(0.0, 0.0, 0.0, 2.0)));
    assert!(bad_color.validate().is_err());

    let ok = SeriesSpec::new("line", SeriesKind::Line, AxisPosition::Left).with_points(vec![
        SeriesPoint {
            timestamp: chrono::DateTime::<chrono::Utc>::UNIX_EPOCH,
            value: Some(1.0),
        },
    ]);
    ok.validate().expect("finite values");
}
