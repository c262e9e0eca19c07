//! Weapon motion integration
//!
//! Advances the weapon one tick along its current leg. Speed follows a
//! triangular profile keyed on distance traveled (accelerate over the first
//! quarter, cruise, decelerate over the last quarter) and rotation eases
//! toward the target angle at a fixed rate.

use glam::Vec2;

use super::state::{MotionProfile, TargetSegment, Weapon};
use crate::math::unit;

/// Which part of the triangular profile the weapon is in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Accelerate,
    Cruise,
    Decelerate,
}

impl Phase {
    pub fn at(segment: &TargetSegment, pos: Vec2) -> Self {
        let traveled = segment.traveled(pos);
        if traveled < segment.quarter_distance {
            Phase::Accelerate
        } else if traveled >= segment.three_quarter_distance {
            Phase::Decelerate
        } else {
            Phase::Cruise
        }
    }
}

/// Apply one tick of acceleration for the current phase
///
/// Velocity is not floored at zero: a long deceleration reverses the weapon
/// along its aim vector.
#[inline]
pub fn update_velocity(profile: &mut MotionProfile, phase: Phase) {
    match phase {
        Phase::Accelerate => profile.velocity += profile.acceleration,
        Phase::Decelerate => profile.velocity -= profile.acceleration,
        Phase::Cruise => {}
    }
}

/// Move `pos` toward `target` by `velocity`, snapping when within `snap_epsilon`
#[inline]
pub fn step_position(pos: Vec2, target: Vec2, velocity: f32, snap_epsilon: f32) -> Vec2 {
    let remaining = target - pos;
    if remaining.length() < snap_epsilon {
        target
    } else {
        pos + unit(remaining) * velocity
    }
}

/// Rotate `profile.angle` toward `profile.target_angle`
///
/// Snaps once the remaining turn is under two steps so the angle never
/// oscillates around the target.
#[inline]
pub fn step_angle(profile: &mut MotionProfile) {
    if (profile.angle - profile.target_angle).abs() < (2.0 * profile.angular_velocity).abs() {
        profile.angle = profile.target_angle;
    } else {
        profile.angle += profile.angular_velocity;
    }
}

/// Advance the weapon one tick and flag arrival
pub fn advance(weapon: &mut Weapon, snap_epsilon: f32) {
    let phase = Phase::at(&weapon.segment, weapon.pos);
    update_velocity(&mut weapon.profile, phase);

    weapon.pos = step_position(
        weapon.pos,
        weapon.segment.target_pos,
        weapon.profile.velocity,
        snap_epsilon,
    );
    step_angle(&mut weapon.profile);

    // Exact comparison: the snap above lands precisely on the target
    if weapon.pos == weapon.segment.target_pos {
        weapon.arrived = true;
    }
}
