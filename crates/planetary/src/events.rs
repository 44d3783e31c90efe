//! Accretion event log
//!
//! Append-only records of what happened during the cohesion simulation.
//! The finished planet carries the full log as its composition history.

use crate::material::Material;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// What kind of event was recorded. Collisions are the only event the
/// simulation emits today.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    Collision,
}

/// Outcome of a merge: the surviving particle's new mass and the per-
/// material masses that went into it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MergeResult {
    pub new_mass: f64,
    pub materials_merged: BTreeMap<Material, f64>,
}

/// A single entry in the accretion history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccretionEvent {
    pub cycle: u32,
    #[serde(rename = "type")]
    pub kind: EventKind,
    /// Labels of the particles involved, surviving particle first.
    pub objects: Vec<String>,
    pub result: MergeResult,
}
