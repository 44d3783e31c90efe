//! Seed-scoped RNG derivation
//!
//! Every stage of the pipeline that consumes randomness gets its own
//! ChaCha stream derived from the seed string. The string is hashed
//! through a v5 UUID so any printable seed maps onto a stable 64-bit
//! stream key; sub-scopes concatenate a fixed suffix before hashing, so
//! streams for different stages never overlap.

use rand::SeedableRng;
use rand_chacha::ChaChaRng;
use uuid::Uuid;

/// Scope suffix for hydrosphere synthesis randomness.
pub const SCOPE_SURFACE_LAYERS: &str = "surface-layers";

/// Scope suffix for primordial well randomness.
pub const SCOPE_PRIMORDIAL_WELLS: &str = "primordial-wells";

/// Derives the base RNG stream for a seed string.
pub fn seeded_rng(name: &str) -> ChaChaRng {
    let uuid = Uuid::new_v5(&Uuid::NAMESPACE_OID, name.as_bytes());
    let (key, _) = uuid.as_u64_pair();
    ChaChaRng::seed_from_u64(key)
}

/// Derives the RNG stream for a named sub-scope of a seed.
pub fn scoped_rng(seed: &str, scope: &str) -> ChaChaRng {
    seeded_rng(&format!("{}-{}", seed, scope))
}
