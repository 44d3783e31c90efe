use rand::SeedableRng;
use rand_chacha::ChaChaRng;

use crate::composition::Composition;
use crate::layer::{LayerName, PlanetaryLayer};
use crate::material::Material;
use crate::wells::generate_primordial_wells;

const EARTH_RADIUS: f64 = 6.371e6;

fn crust(min_radius: f64, max_radius: f64) -> PlanetaryLayer {
    PlanetaryLayer {
        name: LayerName::Crust,
        min_radius,
        max_radius,
        materials: Vec::new(),
        temperature: 300.0,
        pressure: 1e5,
        density: 2800.0,
    }
}

fn bulk_composition() -> Composition {
    let mut comp = Composition::new();
    comp.add(Material::Fe, 2.0e24);
    comp.add(Material::Si, 2.0e24);
    comp.add(Material::H, 0.5e24);
    comp.add(Material::C, 0.5e24);
    comp.add(Material::N, 0.2e24);
    comp.add(Material::S, 0.3e24);
    comp
}

#[test]
fn test_well_count_within_bounds() {
    let crust = crust(6.0e6, EARTH_RADIUS);
    let comp = bulk_composition();

    for seed in 0..20u64 {
        let mut rng = ChaChaRng::seed_from_u64(seed);
        let wells = generate_primordial_wells(&crust, EARTH_RADIUS, "count-check", &comp, &mut rng);
        assert!(wells.len() >= 3 && wells.len() <= 12, "got {}", wells.len());
    }
}

#[test]
fn test_tiny_planet_still_gets_minimum_wells() {
    let crust = crust(900.0, 1000.0);
    let comp = bulk_composition();
    let mut rng = ChaChaRng::seed_from_u64(1);

    // Area term is negligible at this size; only the uniform draw remains
    let wells = generate_primordial_wells(&crust, 1000.0, "tiny", &comp, &mut rng);
    assert!(wells.len() >= 3 && wells.len() <= 5);
}

#[test]
fn test_well_ids_and_locations() {
    let crust = crust(6.0e6, EARTH_RADIUS);
    let comp = bulk_composition();
    let mut rng = ChaChaRng::seed_from_u64(2);

    let wells = generate_primordial_wells(&crust, EARTH_RADIUS, "alpha", &comp, &mut rng);
    for (i, well) in wells.iter().enumerate() {
        assert_eq!(well.id, format!("well-alpha-{}", i));
        assert!(well.location.latitude >= -90.0 && well.location.latitude <= 90.0);
        assert!(well.location.longitude >= -180.0 && well.location.longitude <= 180.0);
        assert!(well.location.depth >= 100.0);
        assert!(well.location.depth <= crust.thickness());
    }
}

#[test]
fn test_well_energy_in_unit_interval() {
    let crust = crust(6.0e6, EARTH_RADIUS);
    let comp = bulk_composition();
    let mut rng = ChaChaRng::seed_from_u64(3);

    let wells = generate_primordial_wells(&crust, EARTH_RADIUS, "energy", &comp, &mut rng);
    for well in &wells {
        assert!((0.0..=1.0).contains(&well.energy_level));
    }
}

#[test]
fn test_well_composition_skips_trace_materials() {
    // Nitrogen sits below the 1% threshold and should not appear
    let mut comp = Composition::new();
    comp.add(Material::Fe, 5.0e24);
    comp.add(Material::H, 1.0e24);
    comp.add(Material::N, 1.0e22);

    let crust = crust(6.0e6, EARTH_RADIUS);
    let mut rng = ChaChaRng::seed_from_u64(4);

    let wells = generate_primordial_wells(&crust, EARTH_RADIUS, "trace", &comp, &mut rng);
    for well in &wells {
        assert!(well.composition.contains_key(&Material::H));
        assert!(well.composition.contains_key(&Material::Fe));
        assert!(!well.composition.contains_key(&Material::N));
    }
}

#[test]
fn test_degenerate_crust_pins_depth() {
    // Crust thinner than the 100 m floor: the depth range collapses
    let crust = crust(EARTH_RADIUS - 50.0, EARTH_RADIUS);
    let comp = bulk_composition();
    let mut rng = ChaChaRng::seed_from_u64(5);

    let wells = generate_primordial_wells(&crust, EARTH_RADIUS, "thin", &comp, &mut rng);
    for well in &wells {
        assert_eq!(well.location.depth, 100.0);
    }
}

#[test]
fn test_deterministic_for_same_stream() {
    let crust = crust(6.0e6, EARTH_RADIUS);
    let comp = bulk_composition();

    let mut rng_a = ChaChaRng::seed_from_u64(9);
    let mut rng_b = ChaChaRng::seed_from_u64(9);

    let wells_a = generate_primordial_wells(&crust, EARTH_RADIUS, "det", &comp, &mut rng_a);
    let wells_b = generate_primordial_wells(&crust, EARTH_RADIUS, "det", &comp, &mut rng_b);
    assert_eq!(wells_a, wells_b);
}
