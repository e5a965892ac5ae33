//! Kick Sim - a kicking, heading character and a bouncing ball
//!
//! Core modules:
//! - `sim`: Deterministic per-tick simulation (kick gesture, motion, ball, contacts)
//! - `input`: Logical controls and key bindings
//! - `scene`: Placements handed to whatever draws the frame
//! - `driver`: Fixed-timestep frame loop
//! - `config`: Data-driven animation and physics constants

pub mod config;
pub mod driver;
pub mod error;
pub mod input;
pub mod scene;
pub mod sim;

pub use config::{MotionMode, SimConfig};
pub use driver::FrameDriver;
pub use error::ConfigError;
pub use input::{Control, ControlSnapshot, InputState, KeyBindings};

/// Frame loop constants
pub mod consts {
    /// Real time covered by one tick (60 Hz)
    pub const TICK_SECONDS: f32 = 1.0 / 60.0;
    /// Frame-delta scale passed to each fixed tick
    pub const FRAME_DT: f32 = 1.0;
    /// Maximum ticks per rendered frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;
    /// Longest frame the driver will try to catch up on
    pub const MAX_FRAME_SECONDS: f32 = 0.25;
}
