//! Coin Pusher entry point
//!
//! Runs a headless demo session: the pointer sweeps across the launcher
//! and presses at a fixed rhythm until the round ends or time runs out.
//! Set `COIN_PUSHER_SETTINGS` to a JSON settings file to override defaults.

use coin_pusher::platform::{Clock, ManualClock, PointerState, SystemClock, dead_margin};
use coin_pusher::renderer::FrameSnapshot;
use coin_pusher::{Settings, SettingsError, Simulation, TickInput, tick};

const SIM_DT: f32 = 1.0 / 60.0;
/// Simulated seconds before the demo stops
const DEMO_SECONDS: f64 = 120.0;
/// Frames between presses
const PRESS_EVERY: u64 = 20;
const WINDOW_WIDTH: f32 = 1024.0;

/// Demo instance holding all state
struct Demo {
    sim: Simulation,
    clock: Box<dyn Clock>,
    input: TickInput,
    margin: f32,
    frame: u64,
}

impl Demo {
    fn new(settings: &Settings) -> Self {
        // A fixed seed gets a stepped clock so the placement budget is
        // reproducible too
        let clock: Box<dyn Clock> = match settings.seed {
            Some(_) => Box::new(ManualClock::with_step(0.0, 1e-5)),
            None => Box::new(SystemClock::new()),
        };
        let sim = Simulation::new(&settings.sim_config(), clock.as_ref());
        Self {
            sim,
            clock,
            input: TickInput::default(),
            margin: dead_margin(WINDOW_WIDTH, settings.view),
            frame: 0,
        }
    }

    fn step(&mut self) {
        let now = self.frame as f64 * f64::from(SIM_DT);
        // Triangle sweep across the window, one pass every four seconds
        let phase = (now / 4.0).fract() as f32;
        let sweep = if phase < 0.5 {
            phase * 2.0
        } else {
            2.0 - phase * 2.0
        };

        self.input.now = now;
        self.input.pointer = PointerState::new(sweep * WINDOW_WIDTH, WINDOW_WIDTH, self.margin);
        self.input.press = self.frame % PRESS_EVERY == 0;

        tick(&mut self.sim, &self.input, SIM_DT, self.clock.as_ref());
        for entry in &self.sim.last_entries {
            log::info!("slot {} -> {:?}: {:?}", entry.slot, entry.zone, entry.award);
        }
        self.frame += 1;
    }
}

fn load_settings() -> Result<Settings, SettingsError> {
    match std::env::var_os("COIN_PUSHER_SETTINGS") {
        Some(path) => Settings::load(path),
        None => Ok(Settings::default()),
    }
}

fn main() {
    env_logger::init();
    log::info!("Coin Pusher (headless) starting...");

    let settings = match load_settings() {
        Ok(settings) => settings,
        Err(e) => {
            log::error!("{}", e);
            std::process::exit(1);
        }
    };

    let mut demo = Demo::new(&settings);
    let start_round = demo.sim.round;
    while (demo.frame as f64) * f64::from(SIM_DT) < DEMO_SECONDS {
        demo.step();
        if demo.sim.is_game_over() || demo.sim.round != start_round {
            break;
        }
    }

    let now = demo.frame as f64 * f64::from(SIM_DT);
    let snap = FrameSnapshot::capture(&demo.sim, now, &demo.input.pointer);
    println!("{}", snap.title);
    println!(
        "after {:.1}s: gold {} silver {} trophies {:06b} disks {}{}",
        now,
        snap.gold,
        snap.silver,
        snap.trophies,
        snap.disks.len(),
        if snap.game_over_elapsed.is_some() {
            " (game over)"
        } else {
            ""
        }
    );
}
