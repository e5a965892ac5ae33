//! Scene output
//!
//! The simulation never draws. After each tick a presentation layer calls
//! [`present`] and receives one placement per visual.

use glam::Vec2;

use crate::sim::SimState;

/// Visuals the simulation positions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SceneNode {
    /// Character container (head and foot are drawn relative to it)
    Character,
    Head,
    Foot,
    Ball,
}

/// World-space placement
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub position: Vec2,
    pub rotation: f32,
    pub scale: f32,
}

/// Renderer-side sink for placements
pub trait Scene {
    fn place(&mut self, node: SceneNode, transform: Transform);
}

/// Push the current frame's placements into `scene`
pub fn present(state: &SimState, scene: &mut impl Scene) {
    let ch = &state.character;
    scene.place(
        SceneNode::Character,
        Transform {
            position: ch.pos,
            rotation: 0.0,
            scale: ch.scale,
        },
    );
    scene.place(
        SceneNode::Foot,
        Transform {
            position: ch.foot_world(),
            rotation: ch.foot.rotation,
            scale: ch.scale,
        },
    );
    scene.place(
        SceneNode::Head,
        Transform {
            position: ch.head_world(),
            rotation: 0.0,
            scale: ch.scale,
        },
    );
    scene.place(
        SceneNode::Ball,
        Transform {
            position: state.ball.pos,
            rotation: state.ball.rotation,
            scale: 1.0,
        },
    );
}

/// Keeps the latest placement of every node; logs each at trace level
#[derive(Debug, Default)]
pub struct RecordingScene {
    placements: Vec<(SceneNode, Transform)>,
}

impl RecordingScene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, node: SceneNode) -> Option<Transform> {
        self.placements
            .iter()
            .find(|(n, _)| *n == node)
            .map(|(_, t)| *t)
    }

    pub fn len(&self) -> usize {
        self.placements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.placements.is_empty()
    }
}

impl Scene for RecordingScene {
    fn place(&mut self, node: SceneNode, transform: Transform) {
        log::trace!(
            "{:?} at ({:.1}, {:.1}) rot {:.2}",
            node,
            transform.position.x,
            transform.position.y,
            transform.rotation
        );
        match self.placements.iter_mut().find(|(n, _)| *n == node) {
            Some(slot) => slot.1 = transform,
            None => self.placements.push((node, transform)),
        }
    }
}
