use rand::Rng;
use std::f64::consts::TAU;
use std::ops::RangeInclusive;

/// Velocity multiplier applied every frame.
pub const FRICTION: f64 = 0.985;

/// A spin is at rest once `|velocity|` drops below this.
pub const MIN_VELOCITY: f64 = 0.01;

/// Range the initial angular velocity is drawn from (radians per frame).
pub const INITIAL_VELOCITY: RangeInclusive<f64> = 1.2..=2.0;

/// An in-flight spin. Owned by the session while `is_spinning()`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spin {
    velocity: f64,
    frames: u32,
}

/// Result of advancing a spin by one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Step {
    Rolling,
    Rest,
}

impl Spin {
    pub fn with_velocity(velocity: f64) -> Self {
        Self {
            velocity,
            frames: 0,
        }
    }

    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::with_velocity(rng.gen_range(INITIAL_VELOCITY))
    }

    pub fn velocity(&self) -> f64 {
        self.velocity
    }

    /// Frames advanced so far.
    pub fn frames(&self) -> u32 {
        self.frames
    }

    /// Advance one frame. The rest check happens before friction is applied,
    /// so a spin that reaches rest leaves `rotation` untouched on that frame.
    pub fn step(&mut self, rotation: &mut f64) -> Step {
        if self.velocity.abs() < MIN_VELOCITY {
            return Step::Rest;
        }

        self.velocity *= FRICTION;
        *rotation = normalize(*rotation + self.velocity);
        self.frames += 1;
        Step::Rolling
    }
}

/// Reduce an angle into [0, 2π).
pub fn normalize(angle: f64) -> f64 {
    let r = angle.rem_euclid(TAU);
    // rem_euclid can round up to TAU for tiny negative inputs
    if r >= TAU {
        0.0
    } else {
        r
    }
}
