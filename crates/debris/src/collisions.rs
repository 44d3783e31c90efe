//! Collision merging
//!
//! Scans the field for close pairs and merges the lighter particle into
//! the heavier one, logging every merge as an accretion event. The scan
//! walks indices downward (outer loop descending, inner loop descending
//! below it) and stops scanning a particle after its first merge of the
//! cycle; this ordering is part of the deterministic contract, so merged
//! particles are tombstoned during the pass and compacted once at the end
//! rather than removed mid-scan.

use crate::particle::DebrisParticle;
use planetary::events::{AccretionEvent, EventKind, MergeResult};
use std::collections::BTreeMap;

/// Pairs closer than this merge, in meters.
const COLLISION_RADIUS: f64 = 1e7;

/// Runs one collision pass over the field, in place. Appends one event
/// per merge to `events`. Total mass is conserved exactly; momentum is
/// conserved per merge.
pub fn resolve_collisions(
    particles: &mut Vec<DebrisParticle>,
    cycle: u32,
    events: &mut Vec<AccretionEvent>,
) {
    let len = particles.len();
    if len < 2 {
        return;
    }

    let mut alive = vec![true; len];

    for i in (1..len).rev() {
        if !alive[i] {
            continue;
        }
        for j in (0..i).rev() {
            if !alive[j] {
                continue;
            }

            let distance = particles[i].distance_to(&particles[j]);
            if distance >= COLLISION_RADIUS {
                continue;
            }

            // Ties keep the lower-index particle
            let (survivor, consumed) = if particles[i].mass > particles[j].mass {
                (i, j)
            } else {
                (j, i)
            };

            let consumed_mass = particles[consumed].mass;
            let consumed_material = particles[consumed].material;
            let consumed_momentum = particles[consumed].momentum();

            let new_mass = particles[survivor].mass + consumed_mass;
            let survivor_momentum = particles[survivor].momentum();

            let mut materials_merged = BTreeMap::new();
            materials_merged.insert(particles[survivor].material, new_mass);
            materials_merged.insert(consumed_material, consumed_mass);

            events.push(AccretionEvent {
                cycle,
                kind: EventKind::Collision,
                objects: vec![
                    format!("particle-{}", survivor),
                    format!("particle-{}", consumed),
                ],
                result: MergeResult {
                    new_mass,
                    materials_merged,
                },
            });

            particles[survivor].mass = new_mass;
            particles[survivor].velocity = (survivor_momentum + consumed_momentum) / new_mass;
            alive[consumed] = false;

            break;
        }
    }

    let mut keep = alive.iter();
    particles.retain(|_| *keep.next().unwrap_or(&true));
}
