//! Character body and ground motion
//!
//! Horizontal input moves the character directly. Vertical motion is either a
//! gravity-integrated jump or free up/down translation, picked at construction.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::kick::{FootPose, KickGesture};
use crate::config::{ArenaConfig, CharacterConfig, MotionConfig, MotionMode};
use crate::input::{Control, ControlSnapshot};

/// What the motion step did this tick, beyond moving
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MotionOutcome {
    pub jumped: bool,
    pub landed: bool,
}

/// The controllable character
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Character {
    /// Container origin in world space
    pub pos: Vec2,
    pub scale: f32,
    pub grounded: bool,
    pub vel_y: f32,
    /// Horizontal velocity applied on the last tick
    pub vel_x: f32,
    /// Jump control was held on the previous tick (edge detection)
    pub jump_held: bool,
    pub kick: KickGesture,
    /// Current foot pose (updated from the kick gesture every tick)
    pub foot: FootPose,
    pub head_offset: Vec2,
}

impl Character {
    pub fn new(config: &CharacterConfig) -> Self {
        let rest = FootPose::new(config.foot_rest, config.foot_rest_rotation);
        Self {
            pos: config.start,
            scale: config.scale,
            grounded: true,
            vel_y: 0.0,
            vel_x: 0.0,
            jump_held: false,
            kick: KickGesture::new(rest),
            foot: rest,
            head_offset: config.head_offset,
        }
    }

    /// Foot collider in world space
    pub fn foot_world(&self) -> Vec2 {
        self.pos + self.foot.offset * self.scale
    }

    /// Head collider in world space
    pub fn head_world(&self) -> Vec2 {
        self.pos + self.head_offset * self.scale
    }

    pub fn is_moving_horizontally(&self) -> bool {
        self.vel_x != 0.0
    }

    /// Apply one tick of input-driven motion
    pub fn step(
        &mut self,
        config: &MotionConfig,
        input: &ControlSnapshot,
        dt: f32,
    ) -> MotionOutcome {
        let mut outcome = MotionOutcome::default();

        self.vel_x = input.horizontal_axis() * config.speed;
        self.pos.x += self.vel_x * dt;

        match config.mode {
            MotionMode::Jump => {
                let jump = input.held(Control::Jump);
                if jump && !self.jump_held && self.grounded {
                    self.grounded = false;
                    self.vel_y = config.jump_power;
                    outcome.jumped = true;
                    log::debug!("Jump from y={:.1}", self.pos.y);
                }
                self.jump_held = jump;

                if self.grounded {
                    self.pos.y = self.pos.y.min(config.ground_y);
                } else {
                    self.pos.y += self.vel_y * dt;
                    self.vel_y += config.gravity * dt;

                    if self.pos.y >= config.ground_y {
                        self.pos.y = config.ground_y;
                        self.vel_y = 0.0;
                        self.grounded = true;
                        outcome.landed = true;
                        log::debug!("Landed at x={:.1}", self.pos.x);
                    }
                }
            }
            MotionMode::FreeVertical => {
                self.pos.y += input.vertical_axis() * config.speed * dt;
                self.pos.y = self.pos.y.min(config.ground_y);
            }
        }

        outcome
    }

    /// Keep the character's bounding box inside the arena
    pub fn clamp_to(&mut self, arena: &ArenaConfig, body: &CharacterConfig) {
        let max_x = (arena.width - body.width).max(0.0);
        let max_y = (arena.height - body.height).max(0.0);
        self.pos.x = self.pos.x.clamp(0.0, max_x);
        self.pos.y = self.pos.y.clamp(0.0, max_y);
    }
}
