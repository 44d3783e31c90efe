//! Bulk composition
//!
//! Per-material mass bookkeeping for the settled debris field. A `BTreeMap`
//! keyed by [`Material`] gives deterministic iteration order, which the
//! downstream derivations (stratification, surface synthesis, wells) rely
//! on for reproducible output.

use crate::material::Material;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Total mass per material, in kg.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Composition {
    masses: BTreeMap<Material, f64>,
}

impl Composition {
    pub fn new() -> Self {
        Composition {
            masses: BTreeMap::new(),
        }
    }

    /// Adds mass to a material bucket.
    pub fn add(&mut self, material: Material, mass: f64) {
        *self.masses.entry(material).or_insert(0.0) += mass;
    }

    /// Mass of a single material, 0.0 if absent.
    pub fn mass_of(&self, material: Material) -> f64 {
        self.masses.get(&material).copied().unwrap_or(0.0)
    }

    /// Sum over all materials.
    pub fn total_mass(&self) -> f64 {
        self.masses.values().sum()
    }

    /// Mass fraction of a material, 0.0 when the composition is empty.
    pub fn fraction(&self, material: Material) -> f64 {
        let total = self.total_mass();
        if total <= 0.0 {
            return 0.0;
        }
        self.mass_of(material) / total
    }

    pub fn is_empty(&self) -> bool {
        self.masses.is_empty()
    }

    /// Iterates materials in deterministic (enum declaration) order.
    pub fn iter(&self) -> impl Iterator<Item = (Material, f64)> + '_ {
        self.masses.iter().map(|(m, mass)| (*m, *mass))
    }

    /// The densest material with any mass present, if any.
    pub fn densest_material(&self) -> Option<Material> {
        self.masses
            .iter()
            .filter(|(_, mass)| **mass > 0.0)
            .map(|(m, _)| *m)
            .max_by(|a, b| {
                a.density()
                    .partial_cmp(&b.density())
                    .unwrap_or(std::cmp::Ordering::Equal)
            })
    }

    /// Materials ranked by mass descending, ties broken by enum order.
    pub fn ranked_by_mass(&self) -> Vec<Material> {
        let mut ranked: Vec<(Material, f64)> = self.iter().collect();
        ranked.sort_by(|a, b| {
            b.1.partial_cmp(&a.1)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then(a.0.cmp(&b.0))
        });
        ranked.into_iter().map(|(m, _)| m).collect()
    }
}
