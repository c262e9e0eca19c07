//! Read-only snapshot for the renderer
//!
//! The simulation never draws; it exposes what a sprite renderer needs to
//! pick frames, rotate the weapon and show the HUD.

use std::time::Duration;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::damage::is_flash_frame;
use super::state::{GamePhase, GameState};

/// Player sprite row, chosen from the last movement direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Facing {
    Idle,
    Right,
    Left,
    Down,
    Up,
}

impl Facing {
    /// Horizontal movement wins over vertical
    pub fn from_direction(dir: Vec2) -> Self {
        if dir.x > 0.0 {
            Facing::Right
        } else if dir.x < 0.0 {
            Facing::Left
        } else if dir.y < 0.0 {
            Facing::Up
        } else if dir.y > 0.0 {
            Facing::Down
        } else {
            Facing::Idle
        }
    }

    /// Row index in the character sheet
    pub fn row(&self) -> u32 {
        match self {
            Facing::Idle => 0,
            Facing::Right => 1,
            Facing::Left => 2,
            Facing::Down => 3,
            Facing::Up => 4,
        }
    }
}

/// Everything the renderer and HUD read after a tick
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FrameView {
    pub phase: GamePhase,
    pub player_pos: Vec2,
    pub facing: Facing,
    /// Walk-cycle column
    pub anim_frame: u64,
    /// True when the player sprite should be skipped this frame
    pub flash_frame: bool,
    pub invincible: bool,
    pub health: u8,
    pub weapon_pos: Vec2,
    /// Rotation pivot (center of the weapon sprite box)
    pub weapon_center: Vec2,
    pub weapon_angle: f32,
    pub elapsed: Duration,
}

impl FrameView {
    pub fn capture(state: &GameState, now: Duration) -> Self {
        let tuning = &state.tuning;
        let frame = state.session.frame_count;
        let invincible = state.player.is_invincible();
        Self {
            phase: state.phase,
            player_pos: state.player.pos,
            facing: Facing::from_direction(state.player.dir),
            anim_frame: (frame / tuning.anim_period_frames) % tuning.anim_frame_count,
            flash_frame: is_flash_frame(invincible, frame, tuning.flash_period_frames),
            invincible,
            health: state.player.health,
            weapon_pos: state.weapon.pos,
            weapon_center: state.weapon.pos
                + Vec2::new(tuning.weapon_width, tuning.weapon_height) * 0.5,
            weapon_angle: state.weapon.profile.angle,
            elapsed: state.session.elapsed(now),
        }
    }

    #[inline]
    pub fn game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }
}
