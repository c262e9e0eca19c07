//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must stay pure:
//! - One tick per host frame
//! - Time only through `Clock`
//! - Contact only through `OverlapOracle`
//! - No rendering or platform dependencies

pub mod clock;
pub mod collision;
pub mod damage;
pub mod motion;
pub mod state;
pub mod steering;
pub mod tick;
pub mod view;

pub use clock::{Clock, FixedStepClock, ManualClock, SystemClock, format_elapsed};
pub use collision::{CollisionMonitor, OverlapOracle, Shape, ShapeOverlap};
pub use damage::{DamageOutcome, DamageState, is_flash_frame};
pub use state::{
    GameEvent, GamePhase, GameState, MotionProfile, Player, Session, TargetSegment, Weapon,
};
pub use steering::{Leg, retarget};
pub use tick::{TickInput, tick};
pub use view::{Facing, FrameView};
