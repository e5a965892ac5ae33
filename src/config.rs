//! Simulation configuration
//!
//! Every animation and physics constant lives here. Values are in pixels and
//! frame-delta units (a `dt` of 1.0 is one 60 Hz frame), matching how the
//! character and ball were tuned. Loaded from JSON; missing fields take the
//! defaults below.

use std::f32::consts::PI;
use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Static arena rectangle. `ground_line` is the y the ball's center rests on.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArenaConfig {
    pub width: f32,
    pub height: f32,
    pub ground_line: f32,
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self {
            width: 1024.0,
            height: 768.0,
            ground_line: 740.0,
        }
    }
}

/// Character body layout (local offsets are in unscaled sprite pixels)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CharacterConfig {
    /// Uniform scale applied to every local offset
    pub scale: f32,
    /// Bounding box used when clamping to the arena
    pub width: f32,
    pub height: f32,
    /// Starting position of the character container
    pub start: Vec2,
    /// Head collider center, relative to the container
    pub head_offset: Vec2,
    /// Foot rest position (heel anchor), relative to the container
    pub foot_rest: Vec2,
    /// Foot rest rotation (radians)
    pub foot_rest_rotation: f32,
}

impl Default for CharacterConfig {
    fn default() -> Self {
        let arena = ArenaConfig::default();
        Self {
            scale: 1.4,
            width: 140.0,
            height: 170.0,
            start: Vec2::new(arena.width / 2.0 + 250.0, arena.height / 2.0 + 203.0),
            head_offset: Vec2::new(50.0, 50.0),
            // Heel sits just inside the head's right edge, below the chin
            foot_rest: Vec2::new(100.0 - 12.0, 100.0 + 19.0),
            foot_rest_rotation: 0.0,
        }
    }
}

/// Kick gesture timing and shape
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KickConfig {
    pub preparation_frames: u32,
    pub kick_frames: u32,
    pub restoration_frames: u32,
    /// Depth of the striking parabola
    pub max_height: f32,
    /// Extra travel during the strike
    pub forward_distance: f32,
    /// Wind-up travel during preparation
    pub preparation_push: f32,
    /// Peak swing rotation (radians)
    pub rotation_amplitude: f32,
}

impl Default for KickConfig {
    fn default() -> Self {
        Self {
            preparation_frames: 4,
            kick_frames: 20,
            restoration_frames: 10,
            max_height: 30.0,
            forward_distance: 10.0,
            preparation_push: 45.0,
            rotation_amplitude: PI / 1.7,
        }
    }
}

impl KickConfig {
    /// Total ticks a gesture stays in flight
    pub fn total_frames(&self) -> u32 {
        self.preparation_frames + self.kick_frames + self.restoration_frames
    }
}

/// Vertical control scheme, fixed at construction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum MotionMode {
    /// Jump control launches a gravity-integrated hop
    #[default]
    Jump,
    /// Up/down controls translate directly, no gravity
    FreeVertical,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MotionConfig {
    pub mode: MotionMode,
    /// Pixels per frame
    pub speed: f32,
    /// Initial vertical velocity of a jump (negative is up)
    pub jump_power: f32,
    pub gravity: f32,
    /// Character ground line: y of the container while standing
    pub ground_y: f32,
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            mode: MotionMode::Jump,
            speed: 5.0,
            jump_power: -7.0,
            gravity: 0.3,
            ground_y: CharacterConfig::default().start.y,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BallConfig {
    pub radius: f32,
    pub start: Vec2,
    pub gravity: f32,
    /// Per-tick horizontal velocity retention
    pub friction: f32,
    /// Additional horizontal retention applied on each ground contact
    pub ground_friction: f32,
    pub restitution: f32,
    /// Radians of spin per pixel travelled
    pub spin_factor: f32,
    /// Below this speed a grounded ball snaps to rest
    pub rest_epsilon: f32,
    /// Rebounds slower than this are killed
    pub bounce_stop: f32,
}

impl Default for BallConfig {
    fn default() -> Self {
        let arena = ArenaConfig::default();
        Self {
            radius: 22.0,
            start: Vec2::new(arena.width / 2.0, arena.ground_line),
            gravity: 0.5,
            friction: 0.99,
            ground_friction: 0.9,
            restitution: 0.7,
            spin_factor: 0.02,
            rest_epsilon: 0.05,
            bounce_stop: 1.0,
        }
    }
}

/// Contact radii and impulse magnitudes for the foot and head colliders
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactConfig {
    pub foot_radius: f32,
    pub base_kick_power: f32,
    /// Added to the kick power in proportion to strike progress
    pub kick_power_ramp: f32,
    /// Upward bias added to every kick
    pub kick_lift: f32,
    pub head_radius: f32,
    /// Ball speed above which a head contact counts as active
    pub active_speed_threshold: f32,
    pub header_power: f32,
    pub header_power_airborne: f32,
    /// Passive rebound keeps this fraction of the incoming speed.
    /// Tunable: sensitive to the incoming speed, not physically derived.
    pub passive_damping: f32,
    /// Passive rebound never leaves the ball slower than this
    pub passive_min_speed: f32,
    /// Upward bias when the ball is above the head
    pub header_lift: f32,
    /// Gap left between the ball and the head radius after a header
    pub separation: f32,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            foot_radius: 40.0,
            base_kick_power: 12.0,
            kick_power_ramp: 8.0,
            kick_lift: 4.0,
            head_radius: 60.0,
            active_speed_threshold: 2.0,
            header_power: 10.0,
            header_power_airborne: 14.0,
            passive_damping: 0.3,
            passive_min_speed: 1.5,
            header_lift: 3.0,
            separation: 1.0,
        }
    }
}

/// Complete simulation configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    pub arena: ArenaConfig,
    pub character: CharacterConfig,
    pub kick: KickConfig,
    pub motion: MotionConfig,
    pub ball: BallConfig,
    pub contact: ContactConfig,
}

impl SimConfig {
    /// Parse and validate a JSON document
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a JSON file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::Io(path.to_path_buf(), e))?;
        let config = Self::from_json(&json)?;
        log::info!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Reject configurations the simulation cannot run with
    pub fn validate(&self) -> Result<(), ConfigError> {
        let kick = &self.kick;
        for (name, frames) in [
            ("preparation_frames", kick.preparation_frames),
            ("kick_frames", kick.kick_frames),
            ("restoration_frames", kick.restoration_frames),
        ] {
            if frames == 0 {
                return Err(ConfigError::ZeroDuration { name });
            }
        }

        for (name, value) in [
            ("arena.width", self.arena.width),
            ("arena.height", self.arena.height),
            ("character.scale", self.character.scale),
            ("character.width", self.character.width),
            ("character.height", self.character.height),
            ("ball.radius", self.ball.radius),
            ("ball.rest_epsilon", self.ball.rest_epsilon),
            ("ball.bounce_stop", self.ball.bounce_stop),
            ("contact.foot_radius", self.contact.foot_radius),
            ("contact.head_radius", self.contact.head_radius),
            ("contact.separation", self.contact.separation),
        ] {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::NonPositive { name, value });
            }
        }

        for (name, value) in [
            ("ball.friction", self.ball.friction),
            ("ball.ground_friction", self.ball.ground_friction),
            ("ball.restitution", self.ball.restitution),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::CoefficientOutOfRange { name, value });
            }
        }

        let ground_line = self.arena.ground_line;
        if !(ground_line > 0.0 && ground_line <= self.arena.height) {
            return Err(ConfigError::GroundOutsideArena {
                ground_line,
                height: self.arena.height,
            });
        }

        Ok(())
    }
}
