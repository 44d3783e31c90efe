//! The accretion pipeline
//!
//! One entry point, [`simulate`], runs the whole chain: debris field,
//! cohesion simulation, stratification, classification, surface
//! synthesis, wells, and final assembly into an immutable planet record.

use crate::config::AccretionConfig;
use crate::rotation::{radius_from_mass, rotation_period};
use crate::seed::{scoped_rng, seeded_rng, SCOPE_PRIMORDIAL_WELLS, SCOPE_SURFACE_LAYERS};
use crate::stratify::stratify_layers;
use debris::{generate_debris_field, run_cohesion_simulation};
use log::{debug, info};
use planetary::atmosphere::synthesize_atmosphere;
use planetary::hydrosphere::synthesize_hydrosphere;
use planetary::wells::generate_primordial_wells;
use planetary::{CoreType, Planet, PlanetStatus};

/// Runs the full accretion pipeline for a configuration.
///
/// The same configuration always yields the same planet, bit for bit.
/// There is no failure path; degenerate configurations (zero particles,
/// zero mass) produce a degenerate but well-formed planet.
pub fn simulate(config: &AccretionConfig) -> Planet {
    info!("accretion run starting for seed {:?}", config.seed);

    let distribution = config.resolved_distribution();
    let mut field_rng = seeded_rng(&config.seed);

    let field = generate_debris_field(
        config.particle_count,
        config.target_mass,
        &distribution,
        &mut field_rng,
    );
    debug!("debris field: {} particles", field.len());

    let outcome = run_cohesion_simulation(field);
    info!(
        "cohesion settled: {} bodies, {} collisions, {:.3e} kg",
        outcome.particles.len(),
        outcome.history.len(),
        outcome.total_mass
    );

    let layers = stratify_layers(&outcome.particles, &outcome.composition, outcome.total_mass);

    let radius = radius_from_mass(outcome.total_mass);
    let rotation = rotation_period(outcome.angular_momentum, outcome.total_mass, radius);

    let hollow_hint = config
        .hints
        .as_ref()
        .map(|h| h.is_hollow())
        .unwrap_or(false);
    let core_type = CoreType::classify(&outcome.composition, &layers[0], hollow_hint);
    debug!("core classified as {}", core_type);

    let mut surface_rng = scoped_rng(&config.seed, SCOPE_SURFACE_LAYERS);
    let crust_temperature = layers[3].temperature;
    let hydrosphere = synthesize_hydrosphere(
        &outcome.composition,
        crust_temperature,
        radius,
        &mut surface_rng,
    );
    let atmosphere = synthesize_atmosphere(&outcome.composition, radius);

    let mut wells_rng = scoped_rng(&config.seed, SCOPE_PRIMORDIAL_WELLS);
    let primordial_wells = generate_primordial_wells(
        &layers[3],
        radius,
        &config.seed,
        &outcome.composition,
        &mut wells_rng,
    );
    info!(
        "surface done: hydrosphere {}, atmosphere {}, {} wells",
        hydrosphere.is_some(),
        atmosphere.is_some(),
        primordial_wells.len()
    );

    Planet {
        id: format!("planet-{}", config.seed),
        seed: config.seed.clone(),
        radius,
        mass: outcome.total_mass,
        rotation_period: rotation,
        core_type,
        layers,
        hydrosphere,
        atmosphere,
        primordial_wells,
        composition_history: outcome.history,
        status: PlanetStatus::Formed,
    }
}
