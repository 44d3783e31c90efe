use rand::Rng;

use crate::seed::{scoped_rng, seeded_rng, SCOPE_PRIMORDIAL_WELLS, SCOPE_SURFACE_LAYERS};

#[test]
fn test_same_seed_same_stream() {
    let mut a = seeded_rng("alpha");
    let mut b = seeded_rng("alpha");

    for _ in 0..32 {
        assert_eq!(a.random::<u64>(), b.random::<u64>());
    }
}

#[test]
fn test_different_seeds_diverge() {
    let mut a = seeded_rng("A");
    let mut b = seeded_rng("B");

    let draws_a: Vec<u64> = (0..8).map(|_| a.random()).collect();
    let draws_b: Vec<u64> = (0..8).map(|_| b.random()).collect();
    assert_ne!(draws_a, draws_b);
}

#[test]
fn test_scopes_are_independent_of_base_stream() {
    let mut base = seeded_rng("alpha");
    let mut surface = scoped_rng("alpha", SCOPE_SURFACE_LAYERS);
    let mut wells = scoped_rng("alpha", SCOPE_PRIMORDIAL_WELLS);

    let base_draw = base.random::<u64>();
    assert_ne!(base_draw, surface.random::<u64>());
    assert_ne!(base_draw, wells.random::<u64>());
}

#[test]
fn test_scoped_stream_matches_suffixed_seed() {
    // A scope is nothing more than a suffixed seed
    let mut scoped = scoped_rng("alpha", SCOPE_SURFACE_LAYERS);
    let mut manual = seeded_rng("alpha-surface-layers");
    assert_eq!(scoped.random::<u64>(), manual.random::<u64>());
}

#[test]
fn test_empty_seed_is_valid() {
    let mut a = seeded_rng("");
    let mut b = seeded_rng("");
    assert_eq!(a.random::<u64>(), b.random::<u64>());
}
