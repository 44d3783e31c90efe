//! The planet record
//!
//! The immutable output of the accretion pipeline. Once assembled, a
//! `Planet` is plain data: it serializes to JSON without any references
//! back into the simulation that formed it.

use crate::atmosphere::Atmosphere;
use crate::core_type::CoreType;
use crate::events::AccretionEvent;
use crate::hydrosphere::Hydrosphere;
use crate::layer::PlanetaryLayer;
use crate::wells::PrimordialWell;
use serde::{Deserialize, Serialize};

/// Gravitational constant, m³/(kg·s²).
const G: f64 = 6.67430e-11;

/// Lifecycle status of a planet record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlanetStatus {
    Formed,
}

/// A fully formed planet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Planet {
    pub id: String,
    /// The seed string the planet was generated from.
    pub seed: String,
    /// Radius in meters.
    pub radius: f64,
    /// Total mass in kg.
    pub mass: f64,
    /// Rotation period in seconds, in [3600, 604800].
    pub rotation_period: f64,
    pub core_type: CoreType,
    /// The four stratified layers, innermost first.
    pub layers: Vec<PlanetaryLayer>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hydrosphere: Option<Hydrosphere>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub atmosphere: Option<Atmosphere>,
    pub primordial_wells: Vec<PrimordialWell>,
    /// Every collision recorded during the cohesion simulation.
    pub composition_history: Vec<AccretionEvent>,
    pub status: PlanetStatus,
}

impl Planet {
    /// Surface gravity in m/s².
    pub fn surface_gravity(&self) -> f64 {
        if self.radius <= 0.0 {
            return 0.0;
        }
        G * self.mass / (self.radius * self.radius)
    }

    /// Surface area in m².
    pub fn surface_area(&self) -> f64 {
        4.0 * std::f64::consts::PI * self.radius * self.radius
    }
}
