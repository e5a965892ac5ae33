//! Kick Sim entry point
//!
//! Runs a scripted headless session: walk up to the ball, kick it, jump for a
//! header, then let everything settle. Pass a JSON config path to override the
//! defaults. Set `RUST_LOG=debug` to follow phase changes.

use std::path::Path;

use kick_sim::consts::TICK_SECONDS;
use kick_sim::scene::{RecordingScene, SceneNode, present};
use kick_sim::sim::{SimEvent, SimState};
use kick_sim::{ConfigError, FrameDriver, InputState, KeyBindings, SimConfig};

/// (frame, key code, pressed)
const SCRIPT: &[(u32, &str, bool)] = &[
    (0, "ArrowLeft", true),
    (60, "ArrowLeft", false),
    (60, "Space", true),
    (62, "Space", false),
    (90, "ArrowUp", true),
    (94, "ArrowUp", false),
    (140, "ArrowRight", true),
    (170, "ArrowRight", false),
];

const FRAMES: u32 = 600;

fn main() {
    env_logger::init();
    log::info!("Kick Sim (headless) starting...");

    if let Err(e) = run() {
        log::error!("{e}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), ConfigError> {
    let config = match std::env::args().nth(1) {
        Some(path) => SimConfig::load(Path::new(&path))?,
        None => SimConfig::default(),
    };

    let bindings = KeyBindings::for_mode(config.motion.mode);
    let mut state = SimState::new(config)?;
    let mut input = InputState::new();
    let mut driver = FrameDriver::new();
    let mut scene = RecordingScene::new();
    let mut kicks = 0;
    let mut headers = 0;

    for frame in 0..FRAMES {
        for &(_, code, pressed) in SCRIPT.iter().filter(|(at, _, _)| *at == frame) {
            input.handle_key(&bindings, code, pressed);
        }

        for event in driver.update(&mut state, &input, TICK_SECONDS) {
            match event {
                SimEvent::BallKicked { .. } => kicks += 1,
                SimEvent::Header { .. } => headers += 1,
                _ => {}
            }
            log::info!("frame {frame}: {event:?}");
        }
        present(&state, &mut scene);
    }

    if let Some(ball) = scene.get(SceneNode::Ball) {
        log::info!(
            "Ball finished at ({:.1}, {:.1}) after {} ticks",
            ball.position.x,
            ball.position.y,
            state.time_ticks
        );
    }
    println!("kicks: {kicks}, headers: {headers}");
    println!("{}", serde_json::to_string_pretty(&state)?);
    Ok(())
}
