//! Data-driven game constants
//!
//! Loaded from JSON so balance can be changed without a rebuild. Missing
//! fields fall back to the values in `crate::consts`.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::InitError;

/// Half-turn constant used when the weapon rotates the "long way around"
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum RotationConstant {
    /// `std::f32::consts::PI`
    #[default]
    TruePi,
    /// 3.14, matches the rounding of the first release for visual parity
    Literal314,
}

impl RotationConstant {
    #[allow(clippy::approx_constant)]
    pub fn value(&self) -> f32 {
        match self {
            RotationConstant::TruePi => std::f32::consts::PI,
            RotationConstant::Literal314 => 3.14,
        }
    }
}

/// Steering, motion and damage constants for one session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Arena ===
    pub arena_width: f32,
    pub arena_height: f32,

    // === Player ===
    pub player_width: f32,
    pub player_height: f32,
    pub player_speed: f32,
    pub start_health: u8,
    /// Seconds of invincibility after a hit
    pub invincibility_secs: f32,

    // === Weapon ===
    pub weapon_width: f32,
    pub weapon_height: f32,
    pub min_range: f32,
    pub max_range: f32,
    pub acceleration: f32,
    pub start_velocity: f32,
    pub snap_epsilon: f32,
    pub rotation_constant: RotationConstant,

    // === Animation (exposed to the renderer) ===
    pub flash_period_frames: u64,
    pub anim_period_frames: u64,
    pub anim_frame_count: u64,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            arena_width: ARENA_WIDTH,
            arena_height: ARENA_HEIGHT,

            player_width: PLAYER_WIDTH,
            player_height: PLAYER_HEIGHT,
            player_speed: PLAYER_SPEED,
            start_health: PLAYER_START_HEALTH,
            invincibility_secs: INVINCIBILITY_SECS,

            weapon_width: WEAPON_WIDTH,
            weapon_height: WEAPON_HEIGHT,
            min_range: STEER_MIN_RANGE,
            max_range: STEER_MAX_RANGE,
            acceleration: WEAPON_ACCELERATION,
            start_velocity: WEAPON_START_VELOCITY,
            snap_epsilon: SNAP_EPSILON,
            rotation_constant: RotationConstant::TruePi,

            flash_period_frames: FLASH_PERIOD_FRAMES,
            anim_period_frames: ANIM_PERIOD_FRAMES,
            anim_frame_count: ANIM_FRAME_COUNT,
        }
    }
}

impl Tuning {
    /// Parse and validate tuning from a JSON document
    pub fn from_json(json: &str) -> Result<Self, InitError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Read, parse and validate a tuning file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, InitError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let tuning = Self::from_json(&json)?;
        log::info!("Loaded tuning from {}", path.display());
        Ok(tuning)
    }

    /// Reject values the simulation cannot run with
    pub fn validate(&self) -> Result<(), InitError> {
        let positive = [
            ("arena_width", self.arena_width),
            ("arena_height", self.arena_height),
            ("player_width", self.player_width),
            ("player_height", self.player_height),
            ("weapon_width", self.weapon_width),
            ("weapon_height", self.weapon_height),
            ("min_range", self.min_range),
            ("max_range", self.max_range),
            ("snap_epsilon", self.snap_epsilon),
        ];
        for (field, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(invalid(field, "must be finite and greater than zero"));
            }
        }

        let non_negative = [
            ("player_speed", self.player_speed),
            ("invincibility_secs", self.invincibility_secs),
            ("acceleration", self.acceleration),
        ];
        for (field, value) in non_negative {
            if !value.is_finite() || value < 0.0 {
                return Err(invalid(field, "must be finite and not negative"));
            }
        }

        if Duration::try_from_secs_f32(self.invincibility_secs).is_err() {
            return Err(invalid("invincibility_secs", "too large for a duration"));
        }
        if !self.start_velocity.is_finite() {
            return Err(invalid("start_velocity", "must be finite"));
        }
        if self.min_range > self.max_range {
            return Err(invalid("min_range", "must not exceed max_range"));
        }
        if self.start_health == 0 {
            return Err(invalid("start_health", "must be at least 1"));
        }
        if self.flash_period_frames == 0 || self.anim_period_frames == 0 || self.anim_frame_count == 0 {
            return Err(invalid("anim_period_frames", "frame periods must be non-zero"));
        }
        Ok(())
    }

    /// Invincibility window after a hit, saturating for unvalidated values
    pub fn invincibility_window(&self) -> Duration {
        match Duration::try_from_secs_f32(self.invincibility_secs) {
            Ok(window) => window,
            Err(_) if self.invincibility_secs > 0.0 => Duration::MAX,
            Err(_) => Duration::ZERO,
        }
    }
}

fn invalid(field: &'static str, reason: &'static str) -> InitError {
    log::warn!("Rejected tuning: {} {}", field, reason);
    InitError::InvalidTuning { field, reason }
}
