mod support;

use support::StubPlottable;
use tsaxis_rs::api::{TypeGroups, UnitResolution};
use tsaxis_rs::core::{
    DataType, DataUnit, DurationUnit, FallbackUnits, Plottable, RateUnit, SizeUnit,
};

fn resolve(plottables: &[StubPlottable]) -> UnitResolution {
    let refs: Vec<&dyn Plottable> = plottables.iter().map(|p| p as &dyn Plottable).collect();
    let groups = TypeGroups::from_plottables(&refs);
    UnitResolution::resolve(&groups, &FallbackUnits::default())
}

#[test]
fn single_supplied_unit_is_used() {
    let units = resolve(&[
        StubPlottable::new("p50", Some(DataType::Duration)).with_unit(DurationUnit::Second.into()),
        StubPlottable::new("p95", Some(DataType::Duration)).with_unit(DurationUnit::Second.into()),
    ]);

    assert_eq!(
        units.unit_for(Some(DataType::Duration)),
        Some(DataUnit::Duration(DurationUnit::Second))
    );
}

#[test]
fn missing_units_fall_back_to_registered_unit() {
    let units = resolve(&[
        StubPlottable::new("bytes", Some(DataType::Size)),
        StubPlottable::new("throughput", Some(DataType::Rate)),
        StubPlottable::new("count", Some(DataType::Integer)),
    ]);

    assert_eq!(units.unit_for(Some(DataType::Size)), Some(SizeUnit::Byte.into()));
    assert_eq!(units.unit_for(Some(DataType::Rate)), Some(RateUnit::PerSecond.into()));
    assert_eq!(units.unit_for(Some(DataType::Integer)), None);
}

#[test]
fn conflicting_units_use_fallback_not_first() {
    let units = resolve(&[
        StubPlottable::new("a", Some(DataType::Duration)).with_unit(DurationUnit::Second.into()),
        StubPlottable::new("b", Some(DataType::Duration)).with_unit(DurationUnit::Minute.into()),
    ]);

    assert_eq!(
        units.unit_for(Some(DataType::Duration)),
        Some(DataUnit::Duration(DurationUnit::Millisecond))
    );
}

#[test]
fn absent_units_do_not_count_as_a_conflict() {
    let units = resolve(&[
        StubPlottable::new("a", Some(DataType::Size)).with_unit(SizeUnit::Kibibyte.into()),
        StubPlottable::new("b", Some(DataType::Size)),
    ]);

    assert_eq!(units.unit_for(Some(DataType::Size)), Some(SizeUnit::Kibibyte.into()));
}

#[test]
fn missing_type_resolves_through_fallback_type_bucket() {
    let units = resolve(&[
        StubPlottable::new("n", Some(DataType::Number)),
        StubPlottable::new("untyped", None).with_unit(SizeUnit::Byte.into()),
    ]);

    assert_eq!(units.unit_for(None), units.unit_for(Some(DataType::Number)));
    assert!(units.contains(DataType::Number));
    assert_eq!(units.iter().count(), 1);
}

#[test]
fn unknown_type_gets_its_fallback_unit() {
    let units = resolve(&[StubPlottable::new("n", Some(DataType::Number))]);
    assert_eq!(
        units.unit_for(Some(DataType::Duration)),
        Some(DurationUnit::Millisecond.into())
    );
}

#[test]
fn type_groups_count_in_encounter_order() {
    let plottables = [
        StubPlottable::new("a", Some(DataType::Size)),
        StubPlottable::new("b", Some(DataType::Duration)),
        StubPlottable::new("c", None),
        StubPlottable::new("d", Some(DataType::Duration)),
    ];
    let refs: Vec<&dyn Plottable> = plottables.iter().map(|p| p as &dyn Plottable).collect();
    let groups = TypeGroups::from_plottables(&refs);

    let counts: Vec<_> = groups.type_counts().collect();
    assert_eq!(
        counts,
        vec![
            (Some(DataType::Size), 1),
            (Some(DataType::Duration), 2),
            (None, 1)
        ]
    );
    assert_eq!(groups.axis_types(), vec![DataType::Duration, DataType::Size]);
}
