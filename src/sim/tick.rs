//! Per-frame simulation tick
//!
//! Advances the game by one host frame: player movement, contact and damage,
//! then the weapon's pursuit.

use glam::Vec2;

use super::clock::Clock;
use super::collision::{CollisionMonitor, OverlapOracle};
use super::damage::DamageOutcome;
use super::motion;
use super::state::{GameEvent, GamePhase, GameState};
use crate::math::unit;

/// Input for a single tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
    /// Start/restart (one-shot, the host clears it after the tick)
    pub start: bool,
}

impl TickInput {
    /// Unit movement direction in screen space (y down), zero when idle
    ///
    /// Right beats left and up beats down when both are held.
    pub fn intent(&self) -> Vec2 {
        let x = if self.right {
            1.0
        } else if self.left {
            -1.0
        } else {
            0.0
        };
        let y = if self.up {
            -1.0
        } else if self.down {
            1.0
        } else {
            0.0
        };
        unit(Vec2::new(x, y))
    }
}

/// Advance the game state by one frame
pub fn tick<C, O>(state: &mut GameState, input: &TickInput, clock: &C, oracle: &O)
where
    C: Clock + ?Sized,
    O: OverlapOracle + ?Sized,
{
    state.events.clear();

    if input.start && state.phase != GamePhase::Playing {
        state.restart(clock.now());
    }

    // Nothing moves on the title or game over screens
    if state.phase != GamePhase::Playing {
        return;
    }

    let now = clock.now();
    let tuning = &state.tuning;

    // Player movement
    let dir = input.intent();
    state.player.dir = dir;
    state.player.pos += dir * tuning.player_speed;
    state.session.frame_count += 1;

    // Contact and damage
    let collided = CollisionMonitor::new(oracle).check(&state.player, &state.weapon, tuning);
    let window = tuning.invincibility_window();
    let player = &mut state.player;
    match player.damage.step(&mut player.health, collided, now, window) {
        DamageOutcome::Hit { health } => {
            log::debug!("Player hit, health now {}", health);
            state.events.push(GameEvent::PlayerHit { health });
        }
        DamageOutcome::Expired => {
            log::debug!("Invincibility ended");
            state.events.push(GameEvent::InvincibilityEnded);
        }
        DamageOutcome::Unchanged => {}
    }

    // Weapon pursuit
    if state.weapon.arrived {
        state.weapon.retarget(state.player.pos, tuning);
        state.events.push(GameEvent::WeaponRetargeted {
            target: state.weapon.segment.target_pos,
        });
    }
    motion::advance(&mut state.weapon, tuning.snap_epsilon);

    if state.player.health == 0 {
        let survived = state.session.elapsed(now);
        state.phase = GamePhase::GameOver;
        state.events.push(GameEvent::GameOver { survived });
        log::info!(
            "Game over after {:.1}s ({} frames)",
            survived.as_secs_f32(),
            state.session.frame_count
        );
    }
}
