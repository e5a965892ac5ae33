//! Fixed-timestep frame driver
//!
//! Turns variable wall-clock frame times into whole simulation ticks. Input is
//! snapshotted once per tick so events arriving mid-frame never tear a tick.

use crate::consts::{FRAME_DT, MAX_FRAME_SECONDS, MAX_SUBSTEPS, TICK_SECONDS};
use crate::input::InputState;
use crate::sim::{SimEvent, SimState, tick};

#[derive(Debug, Default)]
pub struct FrameDriver {
    accumulator: f32,
}

impl FrameDriver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run as many ticks as `elapsed` seconds of real time cover
    pub fn update(
        &mut self,
        state: &mut SimState,
        input: &InputState,
        elapsed: f32,
    ) -> Vec<SimEvent> {
        self.accumulator += elapsed.clamp(0.0, MAX_FRAME_SECONDS);

        let mut events = Vec::new();
        let mut substeps = 0;
        while self.accumulator >= TICK_SECONDS && substeps < MAX_SUBSTEPS {
            let snapshot = input.snapshot();
            events.extend(tick(state, &snapshot, FRAME_DT));
            self.accumulator -= TICK_SECONDS;
            substeps += 1;
        }
        events
    }

    /// Leftover fraction of a tick, for render interpolation
    pub fn alpha(&self) -> f32 {
        (self.accumulator / TICK_SECONDS).clamp(0.0, 1.0)
    }
}
