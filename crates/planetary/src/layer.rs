//! Planetary layers
//!
//! The four concentric shells a planet stratifies into, with the material
//! deposits assigned to each. Radii are in meters from the planet center;
//! successive layers never shrink inward.

use crate::material::Material;
use serde::{Deserialize, Serialize};

/// The four layers, innermost first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LayerName {
    InnerCore,
    OuterCore,
    Mantle,
    Crust,
}

impl LayerName {
    /// All four layers, innermost first.
    pub const ALL: [LayerName; 4] = [
        LayerName::InnerCore,
        LayerName::OuterCore,
        LayerName::Mantle,
        LayerName::Crust,
    ];
}

/// A quantity of one material settled into a layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MaterialDeposit {
    #[serde(rename = "type")]
    pub material: Material,
    /// Mass in kg.
    pub quantity: f64,
    /// Representative depth within the layer, in meters below the surface.
    pub depth: f64,
    pub hardness: f64,
    pub density: f64,
}

/// One concentric shell of the planet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanetaryLayer {
    pub name: LayerName,
    /// Inner boundary radius in meters.
    pub min_radius: f64,
    /// Outer boundary radius in meters.
    pub max_radius: f64,
    pub materials: Vec<MaterialDeposit>,
    /// Nominal temperature in K.
    pub temperature: f64,
    /// Nominal pressure in Pa.
    pub pressure: f64,
    /// Bulk density in kg/m³.
    pub density: f64,
}

impl PlanetaryLayer {
    /// Radial thickness in meters.
    pub fn thickness(&self) -> f64 {
        self.max_radius - self.min_radius
    }

    /// Total deposit mass assigned to this layer, in kg.
    pub fn assigned_mass(&self) -> f64 {
        self.materials.iter().map(|d| d.quantity).sum()
    }
}
