//! Simulation state and round lifecycle
//!
//! Everything the frame driver mutates lives in one owned `Simulation`.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use glam::Vec2;

use super::collision::{ZoneEntry, resolve_pass};
use super::disk::{DiskKind, FigureId};
use super::economy::{Economy, TrophySet};
use super::registry::{Deadline, DiskRegistry};
use crate::consts::*;
use crate::platform::{Clock, PointerState};
use crate::settings::SimConfig;

/// Game-over state machine
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Session {
    /// Normal play
    Playing,
    /// Both stacks are empty; the round ends at `deadline` unless a stack
    /// refills first
    PendingOver { deadline: f64 },
    /// Round ended at `since`; the next press starts a new round
    Over { since: f64 },
}

impl Session {
    /// Absolute time at which the round ends or ended
    pub fn deadline(self) -> Option<f64> {
        match self {
            Session::Playing => None,
            Session::PendingOver { deadline } => Some(deadline),
            Session::Over { since } => Some(since),
        }
    }
}

/// Which stack a withdrawn coin came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Stack {
    Gold,
    Silver,
}

/// Push sub-machine: at most one disk moves at a time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Motion {
    Idle,
    /// Disk in `slot` is travelling up from the launcher. `spend` is set
    /// when it was withdrawn from a stack and must be paid for once it
    /// arrives.
    Pushing { slot: usize, spend: Option<Stack> },
}

/// RNG state wrapper, reseeded per round
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RngState {
    pub seed: u64,
    pub stream: u64,
}

impl RngState {
    pub fn new(seed: u64) -> Self {
        Self { seed, stream: 0 }
    }

    pub fn to_rng(&self) -> Pcg32 {
        Pcg32::seed_from_u64(self.seed ^ self.stream.wrapping_mul(0x9E37_79B9_7F4A_7C15))
    }
}

/// Complete simulation state: registry, economy and session
#[derive(Debug, Clone)]
pub struct Simulation {
    /// Seed and per-round stream
    pub rng_state: RngState,
    rng: Pcg32,
    pub disks: DiskRegistry,
    pub economy: Economy,
    pub session: Session,
    pub motion: Motion,
    /// Pitch units per second a pushed disk travels
    pub push_speed: f32,
    /// 1-based round counter
    pub round: u64,
    pub round_started_at: f64,
    /// Zone entries from the most recent tick, in encounter order
    pub last_entries: Vec<ZoneEntry>,
}

impl Simulation {
    /// Create a simulation and set up the first round
    pub fn new(config: &SimConfig, clock: &dyn Clock) -> Self {
        let seed = config.seed.unwrap_or_else(rand::random);
        let rng_state = RngState::new(seed);
        let mut sim = Self {
            rng: rng_state.to_rng(),
            rng_state,
            disks: DiskRegistry::new(),
            economy: Economy::new(),
            session: Session::Playing,
            motion: Motion::Idle,
            push_speed: config.clamped_push_speed(),
            round: 0,
            round_started_at: 0.0,
            last_entries: Vec::new(),
        };
        sim.new_game(clock);
        sim
    }

    /// Reset stacks, trophies and disks and lay out a fresh pitch.
    ///
    /// Figures are always placed. Plain coins fill the remaining slots in
    /// order until the placement budget runs out, so a round may start with
    /// fewer coins than the registry can hold.
    pub fn new_game(&mut self, clock: &dyn Clock) {
        self.round += 1;
        self.rng_state.stream = self.round;
        self.rng = self.rng_state.to_rng();

        self.economy = Economy::new();
        self.session = Session::Playing;
        self.motion = Motion::Idle;
        self.disks.clear();
        self.last_entries.clear();

        for slot in 0..FIGURE_SLOTS {
            let kind = DiskKind::Figure(self.random_figure());
            self.disks.place_random(slot, kind, &mut self.rng, None);
        }

        let deadline = Deadline::start(clock, PLACEMENT_BUDGET);
        for slot in FIGURE_SLOTS..MAX_DISKS {
            // One in five coins is gold
            let kind = if self.rng.random_range(0..5) == 1 {
                DiskKind::Gold
            } else {
                DiskKind::Silver
            };
            let budget = Some(&deadline);
            if !self.disks.place_random(slot, kind, &mut self.rng, budget) {
                log::debug!("placement budget exhausted at slot {}", slot);
                break;
            }
        }

        self.round_started_at = clock.now();
        log::info!(
            "Round {} started: {} disks on the pitch (seed {})",
            self.round,
            self.disks.active_count(),
            self.rng_state.seed
        );
    }

    fn random_figure(&mut self) -> FigureId {
        FigureId::wrapping(self.rng.random_range(0..FIGURE_COUNT))
    }

    pub fn gold(&self) -> i32 {
        self.economy.gold
    }

    pub fn silver(&self) -> i32 {
        self.economy.silver
    }

    pub fn trophies(&self) -> TrophySet {
        self.economy.trophies
    }

    pub fn in_motion(&self) -> bool {
        matches!(self.motion, Motion::Pushing { .. })
    }

    /// True once the grace period has run out
    pub fn is_game_over(&self) -> bool {
        matches!(self.session, Session::Over { .. })
    }

    /// Seconds since the round ended, for end-of-game effects
    pub fn game_over_elapsed(&self, now: f64) -> Option<f64> {
        match self.session {
            Session::Over { since } => Some(now - since),
            _ => None,
        }
    }

    /// Window-title style status
    pub fn status_line(&self) -> String {
        format!("TuxPusher [{:.1}]", self.push_speed)
    }

    /// Take a coin from the stacks and put it on the launcher at the
    /// pointer. Silver is played before gold. Returns false when nothing
    /// was launched: a disk is already moving, the round is ending, both
    /// stacks are empty, or every coin slot is taken.
    pub fn withdraw(&mut self, pointer: &PointerState) -> bool {
        if self.session != Session::Playing || self.in_motion() {
            return false;
        }

        let (stack, kind) = if self.economy.silver != 0 {
            (Stack::Silver, DiskKind::Silver)
        } else if self.economy.gold != 0 {
            (Stack::Gold, DiskKind::Gold)
        } else {
            return false;
        };

        let Some(slot) = self.disks.find_free_slot(FIGURE_SLOTS..MAX_DISKS) else {
            log::debug!("no free slot for a {:?} coin", stack);
            return false;
        };

        let pos = Vec2::new(pointer.launch_x(), LAUNCH_Y);
        self.disks.spawn(slot, kind, pos);
        self.motion = Motion::Pushing {
            slot,
            spend: Some(stack),
        };
        true
    }

    /// Launch a figure into the first empty figure slot, if any
    pub fn inject_figure(&mut self) -> bool {
        if self.in_motion() {
            return false;
        }
        let Some(slot) = self.disks.find_free_slot(0..FIGURE_SLOTS) else {
            return false;
        };

        let id = self.random_figure();
        let span = -LAUNCH_HALF_WIDTH..=LAUNCH_HALF_WIDTH;
        let pos = Vec2::new(self.rng.random_range(span), LAUNCH_Y);
        self.disks.spawn(slot, DiskKind::Figure(id), pos);
        self.motion = Motion::Pushing { slot, spend: None };
        log::debug!("figure {:?} injected into slot {}", id, slot);
        true
    }

    /// Start a new round after a game over and speed the pusher up
    pub fn restart(&mut self, clock: &dyn Clock) {
        self.new_game(clock);
        self.push_speed = (self.push_speed + PUSH_SPEED_STEP).min(MAX_PUSH_SPEED);
        log::info!("Restarted, push speed now {:.1}", self.push_speed);
    }

    /// Clamp the stacks and step the game-over machine.
    ///
    /// Any nonzero stack cancels a pending or finished game over.
    pub fn update_session(&mut self, now: f64) {
        self.economy.clamp();

        if self.session != Session::Playing && !self.economy.is_broke() {
            log::info!("Game over cancelled, stacks refilled");
            self.session = Session::Playing;
        } else if self.economy.is_broke() && self.session == Session::Playing {
            self.session = Session::PendingOver {
                deadline: now + GAME_OVER_GRACE,
            };
            log::info!("Stacks empty, game over in {}s", GAME_OVER_GRACE);
        }

        if let Session::PendingOver { deadline } = self.session
            && now > deadline
        {
            self.session = Session::Over { since: deadline };
            log::info!("Game over (round {})", self.round);
        }
    }

    /// Move the pushed disk and resolve collisions. The push ends once the
    /// disk rests a full radius above the floor, so coins and figures both
    /// finish inside the pitch. A withdrawn coin is paid for then.
    pub fn advance_motion(&mut self, dt: f32) {
        let Motion::Pushing { slot, spend } = self.motion else {
            return;
        };

        let disk = self.disks.get_mut(slot);
        if !disk.is_active() {
            self.motion = Motion::Idle;
            return;
        }

        if disk.pos.y < PITCH_FLOOR_Y + disk.radius {
            disk.pos.y += self.push_speed * dt;
            for _ in 0..RESOLVER_PASSES {
                let n = resolve_pass(
                    &mut self.disks,
                    &mut self.economy,
                    Some(slot),
                    &mut self.rng,
                    &mut self.last_entries,
                );
                log::trace!("resolver pass corrected {} pairs", n);
            }
        } else {
            self.motion = Motion::Idle;
            match spend {
                Some(Stack::Silver) => self.economy.silver -= 1,
                Some(Stack::Gold) => self.economy.gold -= 1,
                None => {}
            }
        }
    }
}
