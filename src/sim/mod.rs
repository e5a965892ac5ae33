//! Deterministic simulation module
//!
//! All physical behavior lives here. This module must stay pure:
//! - No rendering or platform dependencies
//! - Input arrives as a per-tick snapshot
//! - Same state and inputs always produce the same result

pub mod ball;
pub mod collision;
pub mod kick;
pub mod motion;
pub mod state;
pub mod tick;

pub use ball::{Ball, BallOutcome};
pub use collision::{
    Contact, HeaderImpact, HeaderKind, KickImpact, circle_contact, resolve_foot, resolve_head,
};
pub use kick::{FootPose, KickFrame, KickGesture, KickPhase, pose_at};
pub use motion::{Character, MotionOutcome};
pub use state::{SimEvent, SimState};
pub use tick::tick;
