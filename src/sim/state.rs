//! Game state and core simulation types
//!
//! Everything the tick mutates lives here. The state is plain data owned by
//! the host loop and handed to `tick` by exclusive reference.

use std::time::Duration;

use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};

use super::damage::DamageState;
use super::steering;
use crate::error::InitError;
use crate::tuning::Tuning;

/// Current phase of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Title screen, nothing simulated until start
    Title,
    /// Active gameplay
    Playing,
    /// Health ran out; waits for restart
    GameOver,
}

/// Things that happened during a tick (for audio/HUD hooks)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    SessionStarted,
    PlayerHit { health: u8 },
    InvincibilityEnded,
    WeaponRetargeted { target: Vec2 },
    GameOver { survived: Duration },
}

/// Velocity and rotation parameters of the weapon
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MotionProfile {
    /// Fixed per weapon instance
    pub acceleration: f32,
    /// Pixels per tick along the aim vector; may go negative while decelerating
    pub velocity: f32,
    /// Current rotation (radians, unbounded)
    pub angle: f32,
    pub target_angle: f32,
    /// Radians per tick
    pub angular_velocity: f32,
}

/// One pursuit leg: from where the weapon was to where it aims
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TargetSegment {
    pub start_pos: Vec2,
    pub target_pos: Vec2,
    /// 25% of the leg length: end of the acceleration phase
    pub quarter_distance: f32,
    /// 75% of the leg length: start of the deceleration phase
    pub three_quarter_distance: f32,
}

impl TargetSegment {
    /// Degenerate leg that starts and ends at `pos`
    pub fn at(pos: Vec2) -> Self {
        Self {
            start_pos: pos,
            target_pos: pos,
            quarter_distance: 0.0,
            three_quarter_distance: 0.0,
        }
    }

    /// Build a leg from `start` along `dist`
    pub fn from_offset(start: Vec2, dist: Vec2) -> Self {
        let length = dist.length();
        Self {
            start_pos: start,
            target_pos: start + dist,
            quarter_distance: length * 0.25,
            three_quarter_distance: length * 0.75,
        }
    }

    /// Distance covered since the leg began
    #[inline]
    pub fn traveled(&self, pos: Vec2) -> f32 {
        (pos - self.start_pos).length()
    }
}

/// The pursuing wrecking ball
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Weapon {
    /// Top-left of the sprite box
    pub pos: Vec2,
    /// Last computed heading (unit, z = 0; zero before the first leg)
    pub direction: Vec3,
    pub profile: MotionProfile,
    pub segment: TargetSegment,
    /// Set when `pos` lands exactly on the segment target
    pub arrived: bool,
}

impl Weapon {
    pub fn new(pos: Vec2, tuning: &Tuning) -> Self {
        Self {
            pos,
            direction: Vec3::ZERO,
            profile: MotionProfile {
                acceleration: tuning.acceleration,
                velocity: tuning.start_velocity,
                angle: 0.0,
                target_angle: 0.0,
                angular_velocity: 0.0,
            },
            segment: TargetSegment::at(pos),
            arrived: false,
        }
    }

    /// Start a new pursuit leg toward `player_pos`
    pub fn retarget(&mut self, player_pos: Vec2, tuning: &Tuning) {
        let leg = steering::retarget(
            self.pos,
            self.direction,
            self.profile.angle,
            player_pos,
            tuning,
        );
        self.segment = leg.segment;
        self.direction = leg.direction;
        self.profile.target_angle = leg.target_angle;
        self.profile.angular_velocity = leg.angular_velocity;
        self.arrived = false;
    }
}

/// The player-controlled character
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    /// Top-left of the sprite box
    pub pos: Vec2,
    pub health: u8,
    pub damage: DamageState,
    /// Last movement direction (unit or zero), drives facing
    pub dir: Vec2,
}

impl Player {
    pub fn new(pos: Vec2, health: u8) -> Self {
        Self {
            pos,
            health,
            damage: DamageState::Vulnerable,
            dir: Vec2::ZERO,
        }
    }

    #[inline]
    pub fn is_invincible(&self) -> bool {
        self.damage.is_invincible()
    }
}

/// Session bookkeeping
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    /// Clock reading when the session started
    pub started_at: Duration,
    /// Ticks since session start (drives animation and blink)
    pub frame_count: u64,
}

impl Session {
    /// Time since start; zero if the clock reads earlier than the start
    pub fn elapsed(&self, now: Duration) -> Duration {
        now.saturating_sub(self.started_at)
    }
}

/// Complete game state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub tuning: Tuning,
    pub phase: GamePhase,
    pub session: Session,
    pub player: Player,
    pub weapon: Weapon,
    /// Events emitted by the most recent tick
    #[serde(skip)]
    pub events: Vec<GameEvent>,
}

impl GameState {
    /// Validate tuning and build a state sitting on the title screen
    pub fn new(tuning: Tuning) -> Result<Self, InitError> {
        tuning.validate()?;
        let (player, weapon) = spawn_entities(&tuning);
        Ok(Self {
            tuning,
            phase: GamePhase::Title,
            session: Session {
                started_at: Duration::ZERO,
                frame_count: 0,
            },
            player,
            weapon,
            events: Vec::new(),
        })
    }

    /// Validate tuning and start playing immediately
    pub fn start(tuning: Tuning, now: Duration) -> Result<Self, InitError> {
        let mut state = Self::new(tuning)?;
        state.restart(now);
        Ok(state)
    }

    /// Reinitialize every entity and enter `Playing`
    pub fn restart(&mut self, now: Duration) {
        let (player, weapon) = spawn_entities(&self.tuning);
        self.player = player;
        self.weapon = weapon;
        self.session = Session {
            started_at: now,
            frame_count: 0,
        };
        self.phase = GamePhase::Playing;
        self.events.push(GameEvent::SessionStarted);
        log::info!(
            "Session started: player at ({:.1}, {:.1}), weapon aiming at ({:.1}, {:.1})",
            self.player.pos.x,
            self.player.pos.y,
            self.weapon.segment.target_pos.x,
            self.weapon.segment.target_pos.y
        );
    }

    #[inline]
    pub fn is_game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }
}

/// Fresh player in the arena center and a weapon on the left edge,
/// pre-targeted once at the player
fn spawn_entities(tuning: &Tuning) -> (Player, Weapon) {
    let player_pos = Vec2::new(
        tuning.arena_width / 2.0 - tuning.player_width / 2.0,
        tuning.arena_height / 2.0 - tuning.player_height / 2.0,
    );
    let player = Player::new(player_pos, tuning.start_health);

    let weapon_pos = Vec2::new(0.0, tuning.arena_height / 2.0 - tuning.weapon_height / 2.0);
    let mut weapon = Weapon::new(weapon_pos, tuning);
    weapon.retarget(player.pos, tuning);

    (player, weapon)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_on_title() {
        let state = GameState::new(Tuning::default()).expect("default tuning");
        assert_eq!(state.phase, GamePhase::Title);
        assert_eq!(state.player.health, 3);
        assert_eq!(state.player.damage, DamageState::Vulnerable);
    }

    #[test]
    fn test_invalid_tuning_blocks_start() {
        let tuning = Tuning {
            player_height: -1.0,
            ..Default::default()
        };
        assert!(GameState::start(tuning, Duration::ZERO).is_err());
    }

    #[test]
    fn test_initial_placement() {
        let state = GameState::start(Tuning::default(), Duration::ZERO).expect("default tuning");
        assert_eq!(state.player.pos, Vec2::new(240.0 - 6.5, 180.0 - 14.5));
        assert_eq!(state.weapon.pos, Vec2::new(0.0, 180.0 - 16.0));
        assert_eq!(state.weapon.profile.velocity, 0.25);
        assert_eq!(state.weapon.profile.acceleration, 0.04);
    }

    #[test]
    fn test_weapon_pretargeted() {
        let state = GameState::start(Tuning::default(), Duration::ZERO).expect("default tuning");
        let weapon = &state.weapon;
        assert!(!weapon.arrived);
        assert_eq!(weapon.segment.start_pos, weapon.pos);
        assert_ne!(weapon.segment.target_pos, weapon.pos);
        // Player is far to the right: aim point goes max_range past it
        assert!(weapon.segment.target_pos.x > state.player.pos.x);
        assert!((weapon.direction.length() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_restart_resets_everything() {
        let mut state = GameState::start(Tuning::default(), Duration::ZERO).expect("default tuning");
        state.player.health = 0;
        state.player.pos = Vec2::new(1.0, 1.0);
        state.session.frame_count = 999;
        state.phase = GamePhase::GameOver;

        state.restart(Duration::from_secs(42));
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.player.health, 3);
        assert_eq!(state.session.frame_count, 0);
        assert_eq!(state.session.started_at, Duration::from_secs(42));
        assert_eq!(state.session.elapsed(Duration::from_secs(50)), Duration::from_secs(8));
    }

    #[test]
    fn test_segment_breakpoints() {
        let segment = TargetSegment::from_offset(Vec2::new(10.0, 0.0), Vec2::new(0.0, 100.0));
        assert_eq!(segment.target_pos, Vec2::new(10.0, 100.0));
        assert_eq!(segment.quarter_distance, 25.0);
        assert_eq!(segment.three_quarter_distance, 75.0);
        assert_eq!(segment.traveled(Vec2::new(10.0, 30.0)), 30.0);
    }
}
