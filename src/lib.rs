//! Magnet Survival - dodge the magnetic wrecking ball
//!
//! Core modules:
//! - `sim`: Deterministic simulation (steering, motion, damage, game state)
//! - `math`: Vector helpers with defined zero-vector behavior
//! - `tuning`: Data-driven game constants
//! - `autopilot`: Seeded input generator for headless/demo runs

pub mod autopilot;
pub mod error;
pub mod math;
pub mod sim;
pub mod tuning;

pub use error::InitError;
pub use tuning::{RotationConstant, Tuning};

/// Game configuration constants (defaults for `Tuning`)
pub mod consts {
    /// Logical arena size in pixels
    pub const ARENA_WIDTH: f32 = 480.0;
    pub const ARENA_HEIGHT: f32 = 360.0;

    /// Player sprite box (collision circle radius is half the height)
    pub const PLAYER_WIDTH: f32 = 13.0;
    pub const PLAYER_HEIGHT: f32 = 29.0;
    /// Pixels per tick at full input
    pub const PLAYER_SPEED: f32 = 1.0;
    pub const PLAYER_START_HEALTH: u8 = 3;

    /// Weapon sprite box
    pub const WEAPON_WIDTH: f32 = 32.0;
    pub const WEAPON_HEIGHT: f32 = 32.0;

    /// Aim point is pushed at least this far past the player
    pub const STEER_MIN_RANGE: f32 = 75.0;
    /// Aim point is pushed at most this far past the player
    pub const STEER_MAX_RANGE: f32 = 100.0;
    /// Velocity change per tick during accelerate/decelerate phases
    pub const WEAPON_ACCELERATION: f32 = 0.04;
    pub const WEAPON_START_VELOCITY: f32 = 0.25;
    /// Below this distance the weapon snaps onto its target
    pub const SNAP_EPSILON: f32 = 2.0;

    /// Seconds of invincibility after taking a hit
    pub const INVINCIBILITY_SECS: f32 = 5.0;
    /// Frames per blink half-cycle while invincible
    pub const FLASH_PERIOD_FRAMES: u64 = 10;
    /// Frames per walk-cycle step
    pub const ANIM_PERIOD_FRAMES: u64 = 5;
    /// Frames in the walk cycle
    pub const ANIM_FRAME_COUNT: u64 = 6;

    /// Nominal host frame rate (headless runner)
    pub const TICK_RATE_HZ: u32 = 60;
}
