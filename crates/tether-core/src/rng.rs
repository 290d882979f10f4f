//! Deterministic RNG for scattering team-wide move targets.
//!
//! # Determinism strategy
//!
//! Every controller owns its own stream, derived from `TetherConfig::seed`
//! and its `ControllerId` with [`JitterRng::for_controller`]:
//!
//!   seed = global_seed XOR (controller_id * MIXING_CONSTANT)
//!
//! A companion's scatter therefore depends only on the seed, its id and how
//! many team-wide commands it has received, not on how many other companions
//! are attached.
//!
//! The mixing constant is the 64-bit fractional part of the golden ratio,
//! which spreads consecutive ids uniformly across the seed space.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::{ControllerId, Point3};

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

/// Seeded RNG producing horizontal scatter offsets.
pub struct JitterRng(SmallRng);

impl JitterRng {
    pub fn new(seed: u64) -> Self {
        JitterRng(SmallRng::seed_from_u64(seed))
    }

    /// Independent stream for one controller, stable across squad size changes.
    pub fn for_controller(global_seed: u64, id: ControllerId) -> Self {
        let seed = global_seed ^ (id.0 as u64).wrapping_mul(MIXING_CONSTANT);
        JitterRng(SmallRng::seed_from_u64(seed))
    }

    /// Uniform value in `[-radius, radius]`; exactly `0.0` when `radius <= 0`.
    #[inline]
    pub fn symmetric(&mut self, radius: f32) -> f32 {
        if radius <= 0.0 {
            return 0.0;
        }
        self.0.gen_range(-radius..=radius)
    }

    /// `target` shifted by an independent offset in `[-radius, radius]` on
    /// both x and z.  The vertical component is left alone.
    pub fn scatter(&mut self, target: Point3, radius: f32) -> Point3 {
        let dx = self.symmetric(radius);
        let dz = self.symmetric(radius);
        target.offset_horizontal(dx, dz)
    }
}
