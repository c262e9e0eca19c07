//! Weapon targeting
//!
//! Each time the weapon arrives it picks a new aim point past the player
//! (overshoot-through pursuit) and works out how far and how fast to turn
//! to face its new heading.

use glam::{Vec2, Vec3};

use super::state::TargetSegment;
use crate::math::{angle_between, planar, unit};
use crate::tuning::Tuning;

/// Result of planning one pursuit leg
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Leg {
    pub segment: TargetSegment,
    /// New heading (unit, z = 0)
    pub direction: Vec3,
    pub target_angle: f32,
    /// Radians per tick, spread over the first quarter of the leg
    pub angular_velocity: f32,
}

/// Offset from the weapon to its next aim point
///
/// - closer than `min_range`: aim `min_range` beyond the player
/// - farther than `max_range`: aim `max_range` beyond the player
/// - in between: aim at twice the current offset
pub fn aim_offset(diff: Vec2, min_range: f32, max_range: f32) -> Vec2 {
    let mag = diff.length();
    if mag <= min_range {
        diff + unit(diff) * min_range
    } else if mag >= max_range {
        diff + unit(diff) * max_range
    } else {
        diff * 2.0
    }
}

/// Signed rotation from `from` to `to`
///
/// A negative cross product means the turn goes the long way around:
/// `half_turn + (half_turn - theta)`.
pub fn rotation_delta(from: Vec3, to: Vec3, half_turn: f32) -> f32 {
    let theta = angle_between(from, to);
    if from.cross(to).z < 0.0 {
        half_turn + (half_turn - theta)
    } else {
        theta
    }
}

/// Plan the next leg for a weapon at `weapon_pos` chasing `player_pos`
pub fn retarget(
    weapon_pos: Vec2,
    direction: Vec3,
    angle: f32,
    player_pos: Vec2,
    tuning: &Tuning,
) -> Leg {
    let diff = player_pos - weapon_pos;
    let dist = aim_offset(diff, tuning.min_range, tuning.max_range);
    let segment = TargetSegment::from_offset(weapon_pos, dist);

    // Player sits exactly on the weapon: re-aim in place, keep heading
    if segment.quarter_distance <= 0.0 {
        log::debug!("Weapon retarget degenerate at ({:.1}, {:.1})", weapon_pos.x, weapon_pos.y);
        return Leg {
            segment,
            direction,
            target_angle: angle,
            angular_velocity: 0.0,
        };
    }

    let new_direction = planar(unit(dist));
    let angle_diff = rotation_delta(direction, new_direction, tuning.rotation_constant.value());
    let angular_velocity = angle_diff / segment.quarter_distance;
    assert!(
        angle_diff.is_finite() && angular_velocity.is_finite(),
        "steering produced a non-finite rotation"
    );

    log::debug!(
        "Weapon retarget: ({:.1}, {:.1}) -> ({:.1}, {:.1}), turn {:.3} rad",
        weapon_pos.x,
        weapon_pos.y,
        segment.target_pos.x,
        segment.target_pos.y,
        angle_diff
    );

    Leg {
        segment,
        direction: new_direction,
        target_angle: angle + angle_diff,
        angular_velocity,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::{FRAC_PI_2, PI};

    fn tuning() -> Tuning {
        Tuning::default()
    }

    #[test]
    fn test_close_player_pushes_min_range() {
        let leg = retarget(Vec2::ZERO, Vec3::X, 0.0, Vec2::new(10.0, 0.0), &tuning());
        assert_eq!(leg.segment.target_pos, Vec2::new(85.0, 0.0));
        assert_eq!(leg.segment.quarter_distance, 21.25);
        assert_eq!(leg.segment.three_quarter_distance, 63.75);
    }

    #[test]
    fn test_far_player_pushes_max_range() {
        let leg = retarget(Vec2::ZERO, Vec3::Y, 0.0, Vec2::new(0.0, 150.0), &tuning());
        assert_eq!(leg.segment.target_pos, Vec2::new(0.0, 250.0));
        assert!(leg.direction.abs_diff_eq(Vec3::Y, 1e-6));
        // Same heading: (almost) no rotation
        assert!(leg.target_angle.abs() < 1e-3);
        assert!(leg.angular_velocity.abs() < 1e-4);
    }

    #[test]
    fn test_band_doubles_offset() {
        let start = Vec2::new(5.0, 5.0);
        let player = Vec2::new(5.0 + 48.0, 5.0 + 64.0); // |diff| = 80
        let leg = retarget(start, Vec3::X, 1.0, player, &tuning());
        assert_eq!(leg.segment.target_pos, start + (player - start) * 2.0);
        assert_eq!(leg.segment.start_pos, start);
    }

    #[test]
    fn test_band_edges_agree() {
        let t = tuning();
        for mag in [t.min_range, t.max_range] {
            let diff = Vec2::new(mag, 0.0);
            assert_eq!(aim_offset(diff, t.min_range, t.max_range), diff * 2.0);
        }
    }

    #[test]
    fn test_counter_clockwise_turn() {
        // X -> Y has positive cross z: short way
        let delta = rotation_delta(Vec3::X, Vec3::Y, PI);
        assert!((delta - FRAC_PI_2).abs() < 1e-6);
    }

    #[test]
    fn test_clockwise_turn_goes_long_way() {
        // Y -> X has negative cross z
        let delta = rotation_delta(Vec3::Y, Vec3::X, PI);
        assert!((delta - 1.5 * PI).abs() < 1e-5);
    }

    #[test]
    #[allow(clippy::approx_constant)]
    fn test_literal_half_turn() {
        let delta = rotation_delta(Vec3::Y, Vec3::X, 3.14);
        assert!((delta - (3.14 + (3.14 - FRAC_PI_2))).abs() < 1e-5);
    }

    #[test]
    fn test_angular_velocity_tied_to_quarter_distance() {
        // Weapon heading +X, player straight up (screen-space +Y) at 150
        let leg = retarget(Vec2::ZERO, Vec3::X, 2.0, Vec2::new(0.0, 150.0), &tuning());
        assert!((leg.target_angle - (2.0 + FRAC_PI_2)).abs() < 1e-5);
        let expected = FRAC_PI_2 / 62.5;
        assert!((leg.angular_velocity - expected).abs() < 1e-6);
    }

    #[test]
    fn test_first_leg_from_zero_heading() {
        let leg = retarget(Vec2::ZERO, Vec3::ZERO, 0.0, Vec2::new(200.0, 0.0), &tuning());
        // Zero heading: dot = 0, cross = 0, treated as a quarter turn
        assert!((leg.target_angle - FRAC_PI_2).abs() < 1e-6);
        assert!(leg.direction.abs_diff_eq(Vec3::X, 1e-6));
    }

    #[test]
    fn test_coincident_player_degrades_gracefully() {
        let pos = Vec2::new(30.0, 40.0);
        let leg = retarget(pos, Vec3::Y, 0.7, pos, &tuning());
        assert_eq!(leg.segment.target_pos, pos);
        assert_eq!(leg.direction, Vec3::Y);
        assert_eq!(leg.target_angle, 0.7);
        assert_eq!(leg.angular_velocity, 0.0);
        assert!(!leg.angular_velocity.is_nan());
    }

    #[test]
    fn test_near_coincident_player_stays_finite() {
        // At the origin so the nudge survives the addition
        let pos = Vec2::ZERO;
        for nudge in [1e-22, 1e-30, 1e-38, f32::MIN_POSITIVE, 1e-45] {
            let leg = retarget(pos, Vec3::NEG_Y, 0.0, pos + Vec2::new(nudge, 0.0), &tuning());
            assert!(leg.angular_velocity.is_finite());
            assert!(leg.target_angle.is_finite());
            assert!(leg.segment.target_pos.is_finite());
        }
    }

    #[test]
    fn test_antiparallel_heading_no_nan() {
        let leg = retarget(Vec2::ZERO, Vec3::NEG_X, 0.0, Vec2::new(500.0, 0.0), &tuning());
        assert!(leg.target_angle.is_finite());
        assert!((leg.target_angle - PI).abs() < 1e-3);
    }
}
