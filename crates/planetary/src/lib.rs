//! Planet data model and rule-based derivations
//!
//! This crate holds the output record of the accretion engine (the
//! immutable [`Planet`]) together with the closed material taxonomy and
//! the derivations that run after the particle simulation settles:
//! core-type classification, hydrosphere and atmosphere synthesis, and
//! primordial well placement.
//!
//! Everything here is plain data. Records serialize to camelCase JSON and
//! carry no references back into the simulation that produced them.

pub mod atmosphere;
pub mod composition;
pub mod core_type;
pub mod events;
pub mod hydrosphere;
pub mod layer;
pub mod material;
pub mod planet;
pub mod wells;

// Re-export key types at crate root
pub use atmosphere::{Atmosphere, GasFractions};
pub use composition::Composition;
pub use core_type::CoreType;
pub use events::{AccretionEvent, EventKind, MergeResult};
pub use hydrosphere::Hydrosphere;
pub use layer::{LayerName, MaterialDeposit, PlanetaryLayer};
pub use material::Material;
pub use planet::{Planet, PlanetStatus};
pub use wells::{PrimordialWell, WellLocation, WellType};

#[cfg(test)]
mod wells_test;
