use physics_tuning::*;

#[test]
fn snapshots_are_isolated_from_later_publications() {
    let registry = ParameterRegistry::default();
    let before = registry.snapshot();

    let generation = registry.update(|params| params.set_max_translation(5.0));

    assert_eq!(generation, 1);
    assert_eq!(before.max_translation_squared(), 4.0);
    assert_eq!(registry.snapshot().max_translation_squared(), 25.0);
}

#[test]
fn update_recomputes_before_publishing() {
    let registry = ParameterRegistry::default();
    registry.update(|params| {
        params.set_linear_slop(0.01);
        params.set_max_translation(3.0);
    });

    let snapshot = registry.snapshot();
    assert!(snapshot.is_consistent());
    assert_eq!(snapshot.polygon_radius(), 0.02);
    assert_eq!(snapshot.max_translation_squared(), 9.0);
}

#[test]
fn apply_overrides_advances_generation() {
    let registry = ParameterRegistry::default();
    let overrides = ParameterOverrides {
        linear_slop: Some(0.01),
        ..Default::default()
    };

    assert_eq!(registry.apply(&overrides), 1);
    assert_eq!(registry.apply(&overrides), 2);
    assert_eq!(registry.generation(), 2);
    assert_eq!(registry.snapshot().polygon_radius(), 0.02);
}

#[test]
fn registry_built_from_stale_set_is_consistent() {
    let mut params = ParameterSet::new();
    params.set_max_translation(6.0);

    let registry = ParameterRegistry::new(params);
    assert_eq!(registry.generation(), 0);
    assert_eq!(registry.snapshot().max_translation_squared(), 36.0);
}

#[test]
fn worlds_own_independent_registries() {
    let world_a = ParameterRegistry::default();
    let world_b = ParameterRegistry::default();

    world_a.update(|params| params.set_linear_slop(0.02));

    assert_eq!(world_a.snapshot().polygon_radius(), 0.04);
    assert_eq!(world_b.snapshot().polygon_radius(), 0.01);
}
