//! Astrograze entry point
//!
//! Headless demo driver: runs the simulation at a fixed ~60 Hz cadence with
//! a scripted input tape, logging score and level transitions. The render
//! surface is a command recorder; a real frontend would replay the recorded
//! commands against an actual canvas.
//!
//! Usage: `astrograze [seed] [--dump]`

use std::time::{Duration, Instant};

use astrograze::consts::TICK_HZ;
use astrograze::render::DrawList;
use astrograze::sim::{Direction, SimulationState, TickInput, tick};

const CANVAS_WIDTH: f32 = 800.0;
const CANVAS_HEIGHT: f32 = 600.0;
/// Demo session length in ticks (30 seconds)
const DEMO_TICKS: u64 = 30 * TICK_HZ as u64;
/// One scripted direction change every this many ticks
const TAPE_STEP: u64 = 90;
const TAPE: [Direction; 4] = [
    Direction::Right,
    Direction::Down,
    Direction::Left,
    Direction::Up,
];

fn main() {
    env_logger::init();

    let mut seed = None;
    let mut dump = false;
    for arg in std::env::args().skip(1) {
        if arg == "--dump" {
            dump = true;
        } else if let Ok(parsed) = arg.parse::<u64>() {
            seed = Some(parsed);
        }
    }
    // Tests inject seeds; a live run takes one from entropy
    let seed = seed.unwrap_or_else(rand::random);

    let mut state = SimulationState::new(CANVAS_WIDTH, CANVAS_HEIGHT, seed);
    let mut surface = DrawList::new();
    log::info!("starting demo run, seed {seed}");

    let tick_period = Duration::from_secs(1) / TICK_HZ;
    let started = Instant::now();
    let mut last_score = 0;
    let mut last_level = 1;

    for t in 0..DEMO_TICKS {
        let direction = (t % TAPE_STEP == 0).then(|| TAPE[(t / TAPE_STEP) as usize % TAPE.len()]);
        tick(&mut state, &TickInput { direction }, &mut surface);

        let commands = surface.take();
        log::trace!("tick {t}: {} draw commands", commands.len());

        if state.score != last_score {
            log::info!("score {}", state.score);
            last_score = state.score;
        }
        if state.level != last_level {
            log::info!("level {}", state.level);
            last_level = state.level;
        }

        // Best-effort pacing; the sim is frame-based and tolerates jitter
        let next = started + tick_period * (t as u32 + 1);
        if let Some(wait) = next.checked_duration_since(Instant::now()) {
            std::thread::sleep(wait);
        }
    }

    println!(
        "seed {seed}: score {} at level {} after {} ticks",
        state.score, state.level, state.time_ticks
    );

    if dump {
        match serde_json::to_string_pretty(&state) {
            Ok(json) => println!("{json}"),
            Err(err) => log::error!("snapshot failed: {err}"),
        }
    }
}
