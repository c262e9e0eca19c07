//! Player/weapon contact detection
//!
//! The simulation only needs a yes/no answer once per tick. The narrow-phase
//! test sits behind `OverlapOracle` so hosts can plug in their own geometry
//! engine and tests can script contacts directly.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::state::{Player, Weapon};
use crate::tuning::Tuning;

/// Collision shape in arena coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Shape {
    Circle { center: Vec2, radius: f32 },
    /// Axis-aligned box from `min` spanning `size`
    Rect { min: Vec2, size: Vec2 },
}

/// Narrow-phase overlap test
pub trait OverlapOracle {
    fn overlap(&self, a: &Shape, b: &Shape) -> bool;
}

impl<F> OverlapOracle for F
where
    F: Fn(&Shape, &Shape) -> bool,
{
    fn overlap(&self, a: &Shape, b: &Shape) -> bool {
        self(a, b)
    }
}

/// Signed distance to a circle
#[inline]
pub fn sd_circle(p: Vec2, center: Vec2, radius: f32) -> f32 {
    (p - center).length() - radius
}

/// Signed distance to an axis-aligned box
pub fn sd_rect(p: Vec2, min: Vec2, size: Vec2) -> f32 {
    let half = size * 0.5;
    let d = (p - (min + half)).abs() - half;
    d.max(Vec2::ZERO).length() + d.x.max(d.y).min(0.0)
}

/// Exact overlap for circles and axis-aligned boxes (touching counts)
#[derive(Debug, Clone, Copy, Default)]
pub struct ShapeOverlap;

impl OverlapOracle for ShapeOverlap {
    fn overlap(&self, a: &Shape, b: &Shape) -> bool {
        match (*a, *b) {
            (
                Shape::Circle { center: ca, radius: ra },
                Shape::Circle { center: cb, radius: rb },
            ) => sd_circle(ca, cb, rb) <= ra,
            (Shape::Circle { center, radius }, Shape::Rect { min, size })
            | (Shape::Rect { min, size }, Shape::Circle { center, radius }) => {
                sd_rect(center, min, size) <= radius
            }
            (Shape::Rect { min: ma, size: sa }, Shape::Rect { min: mb, size: sb }) => {
                let max_a = ma + sa;
                let max_b = mb + sb;
                ma.x <= max_b.x && mb.x <= max_a.x && ma.y <= max_b.y && mb.y <= max_a.y
            }
        }
    }
}

/// Player hit circle: half the sprite height, centered on the sprite box
pub fn player_shape(player: &Player, tuning: &Tuning) -> Shape {
    Shape::Circle {
        center: player.pos + Vec2::new(tuning.player_width, tuning.player_height) * 0.5,
        radius: tuning.player_height / 2.0,
    }
}

/// Weapon hit circle: half the sprite height, centered on the sprite box
pub fn weapon_shape(weapon: &Weapon, tuning: &Tuning) -> Shape {
    Shape::Circle {
        center: weapon.pos + Vec2::new(tuning.weapon_width, tuning.weapon_height) * 0.5,
        radius: tuning.weapon_height / 2.0,
    }
}

/// Per-tick contact query between the player and the weapon
pub struct CollisionMonitor<'a, O: OverlapOracle + ?Sized> {
    oracle: &'a O,
}

impl<'a, O: OverlapOracle + ?Sized> CollisionMonitor<'a, O> {
    pub fn new(oracle: &'a O) -> Self {
        Self { oracle }
    }

    pub fn check(&self, player: &Player, weapon: &Weapon, tuning: &Tuning) -> bool {
        self.oracle
            .overlap(&player_shape(player, tuning), &weapon_shape(weapon, tuning))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn circle(x: f32, y: f32, radius: f32) -> Shape {
        Shape::Circle {
            center: Vec2::new(x, y),
            radius,
        }
    }

    #[test]
    fn test_circles() {
        let oracle = ShapeOverlap;
        assert!(oracle.overlap(&circle(0.0, 0.0, 10.0), &circle(15.0, 0.0, 10.0)));
        assert!(oracle.overlap(&circle(0.0, 0.0, 10.0), &circle(20.0, 0.0, 10.0)));
        assert!(!oracle.overlap(&circle(0.0, 0.0, 10.0), &circle(20.5, 0.0, 10.0)));
    }

    #[test]
    fn test_circle_rect() {
        let oracle = ShapeOverlap;
        let rect = Shape::Rect {
            min: Vec2::new(10.0, 10.0),
            size: Vec2::new(20.0, 10.0),
        };
        assert!(oracle.overlap(&circle(5.0, 15.0, 6.0), &rect));
        assert!(oracle.overlap(&rect, &circle(20.0, 15.0, 1.0)));
        // Near the corner but outside it
        assert!(!oracle.overlap(&circle(5.0, 5.0, 6.0), &rect));
    }

    #[test]
    fn test_rects() {
        let oracle = ShapeOverlap;
        let a = Shape::Rect {
            min: Vec2::ZERO,
            size: Vec2::new(10.0, 10.0),
        };
        let b = Shape::Rect {
            min: Vec2::new(5.0, 5.0),
            size: Vec2::new(10.0, 10.0),
        };
        let c = Shape::Rect {
            min: Vec2::new(11.0, 0.0),
            size: Vec2::new(1.0, 1.0),
        };
        assert!(oracle.overlap(&a, &b));
        assert!(!oracle.overlap(&a, &c));
    }

    #[test]
    fn test_sd_rect_inside_is_negative() {
        assert_eq!(sd_rect(Vec2::new(5.0, 5.0), Vec2::ZERO, Vec2::new(10.0, 10.0)), -5.0);
        assert_eq!(sd_rect(Vec2::new(13.0, 5.0), Vec2::ZERO, Vec2::new(10.0, 10.0)), 3.0);
    }

    #[test]
    fn test_monitor_uses_sprite_centers() {
        let tuning = Tuning::default();
        let player = Player::new(Vec2::new(100.0, 100.0), 3);
        let mut weapon = Weapon::new(Vec2::ZERO, &tuning);
        let monitor = CollisionMonitor::new(&ShapeOverlap);
        assert!(!monitor.check(&player, &weapon, &tuning));

        // Put the weapon box right on top of the player box
        weapon.pos = player.pos;
        assert!(monitor.check(&player, &weapon, &tuning));
    }

    #[test]
    fn test_monitor_with_scripted_oracle() {
        let tuning = Tuning::default();
        let player = Player::new(Vec2::ZERO, 3);
        let weapon = Weapon::new(Vec2::new(400.0, 0.0), &tuning);
        let always = |_: &Shape, _: &Shape| true;
        assert!(CollisionMonitor::new(&always).check(&player, &weapon, &tuning));
    }
}
