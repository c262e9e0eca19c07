//! Seeded input generator
//!
//! Plays the game without a keyboard for demos and headless runs. Holds a
//! direction for a random number of ticks, prefers running away from the
//! weapon and turns back toward the middle near the arena edge.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::sim::{GamePhase, GameState, TickInput};

/// Distance from the arena edge that triggers a turn back inward
const EDGE_MARGIN: f32 = 24.0;
/// Chance a new heading is "away from the weapon" rather than random
const FLEE_CHANCE: f64 = 0.6;

pub struct Autopilot {
    rng: Pcg32,
    held: TickInput,
    hold_ticks: u32,
}

impl Autopilot {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
            held: TickInput::default(),
            hold_ticks: 0,
        }
    }

    /// Input for the next tick
    pub fn next_input(&mut self, state: &GameState) -> TickInput {
        if state.phase != GamePhase::Playing {
            self.hold_ticks = 0;
            return TickInput {
                start: true,
                ..Default::default()
            };
        }

        let tuning = &state.tuning;
        let pos = state.player.pos;
        let mut steer = Vec2::ZERO;
        if pos.x < EDGE_MARGIN {
            steer.x = 1.0;
        } else if pos.x > tuning.arena_width - tuning.player_width - EDGE_MARGIN {
            steer.x = -1.0;
        }
        if pos.y < EDGE_MARGIN {
            steer.y = 1.0;
        } else if pos.y > tuning.arena_height - tuning.player_height - EDGE_MARGIN {
            steer.y = -1.0;
        }
        if steer != Vec2::ZERO {
            self.held = input_toward(steer);
            self.hold_ticks = self.rng.random_range(10..30);
        }

        if self.hold_ticks == 0 {
            let heading = if self.rng.random_bool(FLEE_CHANCE) {
                pos - state.weapon.pos
            } else {
                Vec2::new(
                    self.rng.random_range(-1.0..=1.0),
                    self.rng.random_range(-1.0..=1.0),
                )
            };
            self.held = input_toward(heading);
            self.hold_ticks = self.rng.random_range(20..90);
        }

        self.hold_ticks -= 1;
        self.held
    }
}

/// Arrow keys that best approximate `dir` (components under 0.3 are dropped)
fn input_toward(dir: Vec2) -> TickInput {
    let dir = dir.normalize_or_zero();
    TickInput {
        left: dir.x < -0.3,
        right: dir.x > 0.3,
        up: dir.y < -0.3,
        down: dir.y > 0.3,
        start: false,
    }
}
