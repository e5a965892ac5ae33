//! Kick gesture state machine
//!
//! A gesture runs `Idle -> Preparing -> Striking -> Recovering -> Idle`. Each
//! phase has a fixed frame budget and a motion law that maps phase progress
//! (0..=1) to a foot pose relative to the character container.

use std::f32::consts::PI;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::config::KickConfig;

/// Current sub-state of the kick gesture
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum KickPhase {
    /// Foot at rest, ready to trigger
    #[default]
    Idle,
    /// Wind-up: foot pushed forward
    Preparing,
    /// Swing: parabolic dip and rotation, may strike the ball
    Striking,
    /// Foot returns to rest
    Recovering,
}

impl KickPhase {
    /// Phase entered once this one runs out
    pub fn next(self) -> Self {
        match self {
            KickPhase::Idle => KickPhase::Idle,
            KickPhase::Preparing => KickPhase::Striking,
            KickPhase::Striking => KickPhase::Recovering,
            KickPhase::Recovering => KickPhase::Idle,
        }
    }

    /// Frame budget for this phase (Idle has none)
    pub fn duration(self, config: &KickConfig) -> u32 {
        match self {
            KickPhase::Idle => 0,
            KickPhase::Preparing => config.preparation_frames,
            KickPhase::Striking => config.kick_frames,
            KickPhase::Recovering => config.restoration_frames,
        }
    }
}

/// Foot placement relative to the character container (unscaled)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FootPose {
    pub offset: Vec2,
    pub rotation: f32,
}

impl FootPose {
    pub fn new(offset: Vec2, rotation: f32) -> Self {
        Self { offset, rotation }
    }
}

/// Foot pose for `phase` at `progress`. Progress is clamped to [0, 1].
pub fn pose_at(config: &KickConfig, rest: FootPose, phase: KickPhase, progress: f32) -> FootPose {
    let p = progress.clamp(0.0, 1.0);
    let push = config.preparation_push;
    match phase {
        KickPhase::Idle => rest,
        KickPhase::Preparing => {
            FootPose::new(Vec2::new(rest.offset.x - push * p, rest.offset.y), rest.rotation)
        }
        KickPhase::Striking => {
            let dip = 4.0 * config.max_height * p * (p - 1.0);
            let x = rest.offset.x - push - config.forward_distance * p;
            let rotation = rest.rotation + config.rotation_amplitude * (p * PI).sin();
            FootPose::new(Vec2::new(x, rest.offset.y + dip), rotation)
        }
        KickPhase::Recovering => FootPose::new(
            Vec2::new(rest.offset.x - push * (1.0 - p), rest.offset.y),
            rest.rotation,
        ),
    }
}

/// Result of advancing the gesture by one or more frames
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KickFrame {
    /// Phase whose motion law produced `pose`
    pub phase: KickPhase,
    /// Progress within `phase`
    pub progress: f32,
    pub pose: FootPose,
    /// The gesture returned to `Idle` during this advance
    pub finished: bool,
}

impl KickFrame {
    /// Foot strikes may register this frame
    pub fn is_striking(&self) -> bool {
        self.phase == KickPhase::Striking
    }
}

/// Gesture state: active phase plus frames elapsed since entering it
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct KickGesture {
    phase: KickPhase,
    elapsed: u32,
    rest: FootPose,
}

impl KickGesture {
    pub fn new(rest: FootPose) -> Self {
        Self {
            phase: KickPhase::Idle,
            elapsed: 0,
            rest,
        }
    }

    pub fn phase(&self) -> KickPhase {
        self.phase
    }

    pub fn elapsed(&self) -> u32 {
        self.elapsed
    }

    pub fn rest(&self) -> FootPose {
        self.rest
    }

    pub fn is_idle(&self) -> bool {
        self.phase == KickPhase::Idle
    }

    /// Start a gesture. Ignored (returns false) while one is in flight.
    pub fn trigger(&mut self) -> bool {
        if !self.is_idle() {
            return false;
        }
        self.enter(KickPhase::Preparing);
        true
    }

    /// Advance by `frames` frames and report the last one
    pub fn advance(&mut self, config: &KickConfig, frames: u32) -> KickFrame {
        let mut frame = self.current(config);
        let mut finished = false;
        for _ in 0..frames {
            frame = self.step(config);
            finished |= frame.finished;
        }
        KickFrame { finished, ..frame }
    }

    /// Pose for the current state without advancing
    pub fn current(&self, config: &KickConfig) -> KickFrame {
        let progress = self.progress(config, self.phase);
        KickFrame {
            phase: self.phase,
            progress,
            pose: pose_at(config, self.rest, self.phase, progress),
            finished: false,
        }
    }

    fn step(&mut self, config: &KickConfig) -> KickFrame {
        let phase = self.phase;
        if phase == KickPhase::Idle {
            return self.current(config);
        }

        self.elapsed += 1;
        let progress = self.progress(config, phase);
        let mut pose = pose_at(config, self.rest, phase, progress);
        let mut finished = false;

        if self.elapsed >= phase.duration(config) {
            self.enter(phase.next());
            if self.is_idle() {
                pose = self.rest;
                finished = true;
            }
        }

        KickFrame {
            phase,
            progress,
            pose,
            finished,
        }
    }

    fn progress(&self, config: &KickConfig, phase: KickPhase) -> f32 {
        let duration = phase.duration(config);
        if duration == 0 {
            return 0.0;
        }
        (self.elapsed as f32 / duration as f32).clamp(0.0, 1.0)
    }

    fn enter(&mut self, phase: KickPhase) {
        log::debug!("Kick phase {:?} -> {:?}", self.phase, phase);
        self.phase = phase;
        self.elapsed = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn rest() -> FootPose {
        FootPose::new(Vec2::new(88.0, 119.0), 0.0)
    }

    fn config(prep: u32, kick: u32, restore: u32) -> KickConfig {
        KickConfig {
            preparation_frames: prep,
            kick_frames: kick,
            restoration_frames: restore,
            ..Default::default()
        }
    }

    #[test]
    fn test_phase_schedule() {
        let cfg = config(4, 20, 10);
        let mut gesture = KickGesture::new(rest());
        assert!(gesture.trigger());

        for tick in 1..=34 {
            let frame = gesture.advance(&cfg, 1);
            let expected = match tick {
                1..=4 => KickPhase::Preparing,
                5..=24 => KickPhase::Striking,
                _ => KickPhase::Recovering,
            };
            assert_eq!(frame.phase, expected, "tick {tick}");
            assert_eq!(frame.finished, tick == 34, "tick {tick}");
        }

        let frame = gesture.advance(&cfg, 1);
        assert_eq!(frame.phase, KickPhase::Idle);
        assert_eq!(frame.pose, rest());
    }

    #[test]
    fn test_counter_resets_on_transition() {
        let cfg = config(2, 3, 2);
        let mut gesture = KickGesture::new(rest());
        gesture.trigger();
        assert_eq!(gesture.elapsed(), 0);
        gesture.advance(&cfg, 1);
        assert_eq!(gesture.elapsed(), 1);
        gesture.advance(&cfg, 1);
        assert_eq!(gesture.phase(), KickPhase::Striking);
        assert_eq!(gesture.elapsed(), 0);
        gesture.advance(&cfg, 3);
        assert_eq!(gesture.phase(), KickPhase::Recovering);
        assert_eq!(gesture.elapsed(), 0);
    }

    #[test]
    fn test_retrigger_ignored() {
        let cfg = config(4, 20, 10);
        let mut a = KickGesture::new(rest());
        let mut b = KickGesture::new(rest());
        a.trigger();
        b.trigger();
        for _ in 0..10 {
            a.advance(&cfg, 1);
            b.advance(&cfg, 1);
        }
        assert!(!b.trigger());
        assert_eq!(a, b);
        assert_eq!(a.advance(&cfg, 1), b.advance(&cfg, 1));
    }

    #[test]
    fn test_round_trip_to_rest() {
        let cfg = KickConfig {
            rotation_amplitude: 1.3,
            ..config(3, 7, 5)
        };
        let start = FootPose::new(Vec2::new(17.3, -4.1), 0.25);
        let mut gesture = KickGesture::new(start);
        gesture.trigger();
        let frame = gesture.advance(&cfg, cfg.total_frames());
        assert!(frame.finished);
        assert_eq!(frame.pose, start);
        assert!(gesture.is_idle());
    }

    #[test]
    fn test_striking_shape() {
        let cfg = KickConfig::default();
        let mid = pose_at(&cfg, rest(), KickPhase::Striking, 0.5);
        assert!((mid.offset.y - (119.0 - cfg.max_height)).abs() < 1e-4);
        assert!((mid.offset.x - (88.0 - 45.0 - 5.0)).abs() < 1e-4);
        assert!((mid.rotation - cfg.rotation_amplitude).abs() < 1e-5);

        let end = pose_at(&cfg, rest(), KickPhase::Striking, 1.0);
        assert!((end.offset.y - 119.0).abs() < 1e-4);
        assert!(end.rotation.abs() < 1e-5);
    }

    #[test]
    fn test_progress_is_clamped() {
        let cfg = KickConfig::default();
        assert_eq!(
            pose_at(&cfg, rest(), KickPhase::Preparing, 3.0),
            pose_at(&cfg, rest(), KickPhase::Preparing, 1.0)
        );
        assert_eq!(
            pose_at(&cfg, rest(), KickPhase::Recovering, -1.0),
            pose_at(&cfg, rest(), KickPhase::Recovering, 0.0)
        );
    }

    #[test]
    fn test_multi_frame_advance_reports_finish() {
        let cfg = config(1, 1, 1);
        let mut gesture = KickGesture::new(rest());
        gesture.trigger();
        let frame = gesture.advance(&cfg, 10);
        assert!(frame.finished);
        assert_eq!(frame.phase, KickPhase::Idle);
    }

    proptest! {
        #[test]
        fn prop_one_cycle_per_trigger(prep in 1u32..30, kick in 1u32..60, restore in 1u32..30) {
            let cfg = config(prep, kick, restore);
            let mut gesture = KickGesture::new(rest());
            prop_assert!(gesture.trigger());

            let mut visited = vec![KickPhase::Idle];
            let mut ticks = 0;
            while !gesture.is_idle() {
                let frame = gesture.advance(&cfg, 1);
                ticks += 1;
                if visited.last() != Some(&frame.phase) {
                    visited.push(frame.phase);
                }
            }
            visited.push(KickPhase::Idle);

            prop_assert_eq!(ticks, prep + kick + restore);
            prop_assert_eq!(
                visited,
                vec![
                    KickPhase::Idle,
                    KickPhase::Preparing,
                    KickPhase::Striking,
                    KickPhase::Recovering,
                    KickPhase::Idle,
                ]
            );
            prop_assert_eq!(gesture.current(&cfg).pose, rest());
        }
    }
}
