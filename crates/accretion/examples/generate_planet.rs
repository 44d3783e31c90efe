//! Generate a planet from a seed and print the record
//!
//! Usage: cargo run -p accretion --example generate_planet [seed]

use accretion::{simulate, AccretionConfig};
use std::env;

fn main() {
    let seed = env::args()
        .nth(1)
        .unwrap_or_else(|| "test-planet-alpha".to_string());

    let config = AccretionConfig::new(seed.clone());
    let planet = simulate(&config);

    println!("Planet {} (seed {:?})", planet.id, seed);
    println!("  mass:     {:.3e} kg", planet.mass);
    println!("  radius:   {:.3e} m", planet.radius);
    println!("  rotation: {:.0} s", planet.rotation_period);
    println!("  core:     {}", planet.core_type);
    println!("  gravity:  {:.2} m/s^2", planet.surface_gravity());

    println!("  layers:");
    for layer in &planet.layers {
        println!(
            "    {:?}: {:.3e}..{:.3e} m, {:.0} K, {} deposits",
            layer.name,
            layer.min_radius,
            layer.max_radius,
            layer.temperature,
            layer.materials.len()
        );
    }

    match &planet.hydrosphere {
        Some(h) => println!(
            "  hydrosphere: {:.0}% coverage, {:.0} m deep",
            h.coverage * 100.0,
            h.average_depth
        ),
        None => println!("  hydrosphere: none"),
    }
    match &planet.atmosphere {
        Some(a) => println!(
            "  atmosphere: {:.0} Pa, {:.0} m thick",
            a.pressure, a.thickness
        ),
        None => println!("  atmosphere: none"),
    }

    println!("  wells: {}", planet.primordial_wells.len());
    for well in &planet.primordial_wells {
        println!(
            "    {} ({:?}): {:.0} K, energy {:.2}",
            well.id, well.well_type, well.temperature, well.energy_level
        );
    }

    println!("  collisions recorded: {}", planet.composition_history.len());

    // Prove the record round-trips through JSON
    let json = serde_json::to_string_pretty(&planet).expect("planet serializes");
    println!("\n{} bytes of JSON", json.len());

    // Same seed, same planet
    let again = simulate(&config);
    assert_eq!(planet, again);
    println!("re-run with the same seed matched exactly");
}
