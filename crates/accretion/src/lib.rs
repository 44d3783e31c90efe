//! Seeded planetary accretion pipeline
//!
//! Turns a seed string into a fully formed [`planetary::Planet`]:
//! a debris field is generated from a seeded element distribution, run
//! through the cohesion simulation, stratified into layers, classified,
//! and dressed with a hydrosphere, atmosphere, and primordial wells.
//!
//! The same seed and configuration always produce the same planet, bit
//! for bit. There are no failure states; degenerate inputs settle on
//! documented fallbacks.

pub mod config;
pub mod generation;
pub mod rotation;
pub mod seed;
pub mod stratify;

pub use config::{AccretionConfig, EnvironmentalHints};
pub use generation::simulate;

#[cfg(test)]
mod seed_test;
