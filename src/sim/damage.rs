//! Player damage and invincibility
//!
//! A hit while vulnerable costs one health and starts an invincibility
//! window. The window closes on its own once enough time has passed;
//! collisions during it are ignored.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Damage state of the player
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum DamageState {
    #[default]
    Vulnerable,
    /// Ignoring hits since the given clock reading
    Invincible { since: Duration },
}

/// What one damage step did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DamageOutcome {
    Unchanged,
    /// Took a hit; health after the hit
    Hit { health: u8 },
    /// Invincibility window closed
    Expired,
}

impl DamageState {
    #[inline]
    pub fn is_invincible(&self) -> bool {
        matches!(self, DamageState::Invincible { .. })
    }

    /// Consume this tick's collision signal
    ///
    /// The collision is evaluated before expiry, so a hit landing on the
    /// exact tick the window closes is still ignored.
    pub fn step(
        &mut self,
        health: &mut u8,
        collided: bool,
        now: Duration,
        window: Duration,
    ) -> DamageOutcome {
        match *self {
            DamageState::Vulnerable if collided && *health > 0 => {
                *health -= 1;
                *self = DamageState::Invincible { since: now };
                DamageOutcome::Hit { health: *health }
            }
            DamageState::Vulnerable => DamageOutcome::Unchanged,
            DamageState::Invincible { since } => {
                if now >= since.saturating_add(window) {
                    *self = DamageState::Vulnerable;
                    DamageOutcome::Expired
                } else {
                    DamageOutcome::Unchanged
                }
            }
        }
    }
}

/// Whether the renderer should skip drawing the player this frame
///
/// Blinks with a half-period of `period` frames while invincible.
#[inline]
pub fn is_flash_frame(invincible: bool, frame_count: u64, period: u64) -> bool {
    invincible && (frame_count / period.max(1)) % 2 == 0
}
