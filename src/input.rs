//! Logical controls and their pressed state
//!
//! The platform layer feeds key events into [`InputState`] whenever they
//! arrive; the simulation only ever sees the [`ControlSnapshot`] taken at the
//! start of a tick.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::config::MotionMode;

/// Logical controls understood by the simulation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Control {
    MoveLeft,
    MoveRight,
    MoveUp,
    MoveDown,
    Jump,
    Kick,
}

impl Control {
    pub const ALL: [Control; 6] = [
        Control::MoveLeft,
        Control::MoveRight,
        Control::MoveUp,
        Control::MoveDown,
        Control::Jump,
        Control::Kick,
    ];

    fn bit(self) -> u8 {
        1 << self as u8
    }
}

/// Immutable per-tick view of the controls
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ControlSnapshot {
    bits: u8,
}

impl ControlSnapshot {
    /// Build a snapshot with exactly the given controls held
    pub fn with(controls: &[Control]) -> Self {
        let bits = controls.iter().fold(0, |acc, c| acc | c.bit());
        Self { bits }
    }

    #[inline]
    pub fn held(&self, control: Control) -> bool {
        self.bits & control.bit() != 0
    }

    /// Net horizontal direction: -1, 0 or 1
    pub fn horizontal_axis(&self) -> f32 {
        let mut axis = 0.0;
        if self.held(Control::MoveLeft) {
            axis -= 1.0;
        }
        if self.held(Control::MoveRight) {
            axis += 1.0;
        }
        axis
    }

    /// Net vertical direction in screen space (down is positive)
    pub fn vertical_axis(&self) -> f32 {
        let mut axis = 0.0;
        if self.held(Control::MoveUp) {
            axis -= 1.0;
        }
        if self.held(Control::MoveDown) {
            axis += 1.0;
        }
        axis
    }
}

/// Pressed-state table, mutated by press/release events between ticks
#[derive(Debug, Clone, Default)]
pub struct InputState {
    current: ControlSnapshot,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn press(&mut self, control: Control) {
        self.current.bits |= control.bit();
    }

    pub fn release(&mut self, control: Control) {
        self.current.bits &= !control.bit();
    }

    pub fn set(&mut self, control: Control, pressed: bool) {
        if pressed {
            self.press(control);
        } else {
            self.release(control);
        }
    }

    pub fn is_held(&self, control: Control) -> bool {
        self.current.held(control)
    }

    /// Apply a raw key event through the given bindings. Unbound keys are ignored.
    pub fn handle_key(&mut self, bindings: &KeyBindings, code: &str, pressed: bool) -> bool {
        match bindings.control_for(code) {
            Some(control) => {
                self.set(control, pressed);
                true
            }
            None => false,
        }
    }

    /// Consistent copy for the coming tick
    pub fn snapshot(&self) -> ControlSnapshot {
        self.current
    }
}

/// Raw key code (DOM `KeyboardEvent.code` naming) to logical control
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeyBindings {
    map: HashMap<String, Control>,
}

impl KeyBindings {
    /// Arrow keys and space. `ArrowUp` jumps in jump mode and moves up otherwise.
    pub fn for_mode(mode: MotionMode) -> Self {
        let up = match mode {
            MotionMode::Jump => Control::Jump,
            MotionMode::FreeVertical => Control::MoveUp,
        };
        let map = [
            ("ArrowLeft", Control::MoveLeft),
            ("ArrowRight", Control::MoveRight),
            ("ArrowUp", up),
            ("ArrowDown", Control::MoveDown),
            ("Space", Control::Kick),
        ]
        .into_iter()
        .map(|(code, control)| (code.to_string(), control))
        .collect();
        Self { map }
    }

    /// Add a key, or move an existing key to another control
    pub fn bind(&mut self, code: impl Into<String>, control: Control) {
        self.map.insert(code.into(), control);
    }

    pub fn control_for(&self, code: &str) -> Option<Control> {
        self.map.get(code).copied()
    }
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self::for_mode(MotionMode::default())
    }
}
