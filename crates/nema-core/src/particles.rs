//! Particle Field
//!
//! Decorative dots scattered once at mount, each floating on its own
//! randomized cycle.

use std::ops::Range;

use rand::Rng;

/// Number of particles in the hero background
pub const PARTICLE_COUNT: usize = 40;

/// Float cycle length, seconds
pub const DURATION_RANGE: Range<f64> = 4.0..10.0;

/// Start delay, seconds
pub const DELAY_RANGE: Range<f64> = 0.0..4.0;

/// One decorative point
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    /// Horizontal position, percent of the container
    pub left: f64,
    /// Vertical position, percent of the container
    pub top: f64,
    pub duration: f64,
    pub delay: f64,
}

impl Particle {
    /// Draw one particle with uniform position and bounded timing
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            left: rng.gen_range(0.0..100.0),
            top: rng.gen_range(0.0..100.0),
            duration: rng.gen_range(DURATION_RANGE),
            delay: rng.gen_range(DELAY_RANGE),
        }
    }

    /// Inline style for the particle element
    pub fn style(&self) -> String {
        format!(
            "left: {}%; top: {}%; animation: float {}s ease-in-out {}s infinite",
            self.left, self.top, self.duration, self.delay
        )
    }
}

/// Scatter `count` particles
pub fn scatter<R: Rng + ?Sized>(rng: &mut R, count: usize) -> Vec<Particle> {
    (0..count).map(|_| Particle::random(rng)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn test_field_size() {
        let mut rng = StdRng::seed_from_u64(40);
        assert_eq!(scatter(&mut rng, PARTICLE_COUNT).len(), 40);
    }

    #[test]
    fn test_bounds() {
        let mut rng = StdRng::seed_from_u64(7);
        for p in scatter(&mut rng, 1_000) {
            assert!((0.0..100.0).contains(&p.left));
            assert!((0.0..100.0).contains(&p.top));
            assert!(DURATION_RANGE.contains(&p.duration));
            assert!(DELAY_RANGE.contains(&p.delay));
        }
    }

    #[test]
    fn test_same_seed_same_field() {
        let a = scatter(&mut StdRng::seed_from_u64(3), PARTICLE_COUNT);
        let b = scatter(&mut StdRng::seed_from_u64(3), PARTICLE_COUNT);
        assert_eq!(a, b);
    }

    #[test]
    fn test_style() {
        let p = Particle { left: 12.5, top: 80.0, duration: 6.25, delay: 1.5 };
        assert_eq!(
            p.style(),
            "left: 12.5%; top: 80%; animation: float 6.25s ease-in-out 1.5s infinite"
        );
    }
}
