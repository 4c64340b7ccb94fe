//! Per-frame snapshot handed to a renderer

use glam::Vec2;

use super::instance::DiskInstance;
use crate::consts::LAUNCH_Y;
use crate::platform::PointerState;
use crate::sim::{DiskKind, Simulation};

/// Everything needed to draw one frame, copied out of the simulation
#[derive(Debug, Clone, PartialEq)]
pub struct FrameSnapshot {
    /// Active disks in slot order
    pub disks: Vec<DiskInstance>,
    pub gold: i32,
    pub silver: i32,
    /// Stack heights to draw, excluding the coin waiting on the launcher
    pub gold_display: i32,
    pub silver_display: i32,
    /// Trophy bits, one per figure identity
    pub trophies: u8,
    /// Coin shown on the launcher at the pointer, when a press would launch
    pub aim: Option<DiskInstance>,
    /// Seconds since the round ended
    pub game_over_elapsed: Option<f32>,
    /// Seconds since the round started
    pub round_elapsed: f32,
    pub push_speed: f32,
    pub title: String,
}

/// Stack heights excluding the coin on the launcher
pub fn displayed_stacks(gold: i32, silver: i32) -> (i32, i32) {
    let silver_display = (silver - 1).max(0);
    let gold_display = (gold - i32::from(silver == 0)).max(0);
    (gold_display, silver_display)
}

impl FrameSnapshot {
    pub fn capture(sim: &Simulation, now: f64, pointer: &PointerState) -> Self {
        let gold = sim.gold();
        let silver = sim.silver();
        let (gold_display, silver_display) = displayed_stacks(gold, silver);

        let aim = (!sim.in_motion() && !sim.economy.is_broke()).then(|| {
            let kind = if silver > 0 {
                DiskKind::Silver
            } else {
                DiskKind::Gold
            };
            DiskInstance::from((kind, Vec2::new(pointer.launch_x(), LAUNCH_Y)))
        });

        Self {
            disks: sim
                .disks
                .iter_active()
                .filter_map(|(_, d)| DiskInstance::from_disk(d))
                .collect(),
            gold,
            silver,
            gold_display,
            silver_display,
            trophies: sim.trophies().bits(),
            aim,
            game_over_elapsed: sim.game_over_elapsed(now).map(|t| t as f32),
            round_elapsed: (now - sim.round_started_at) as f32,
            push_speed: sim.push_speed,
            title: sim.status_line(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::ManualClock;
    use crate::settings::SimConfig;
    use crate::sim::Session;

    fn sim() -> Simulation {
        let config = SimConfig {
            seed: Some(77),
            ..SimConfig::default()
        };
        Simulation::new(&config, &ManualClock::with_step(0.0, 0.0005))
    }

    #[test]
    fn test_displayed_stacks() {
        assert_eq!(displayed_stacks(64, 64), (64, 63));
        assert_eq!(displayed_stacks(5, 0), (4, 0));
        assert_eq!(displayed_stacks(0, 0), (0, 0));
        assert_eq!(displayed_stacks(0, 1), (0, 0));
    }

    #[test]
    fn test_capture_matches_registry() {
        let sim = sim();
        let pointer = PointerState::new(0.0, 800.0, 100.0);
        let snap = FrameSnapshot::capture(&sim, sim.round_started_at + 1.5, &pointer);

        assert_eq!(snap.disks.len(), sim.disks.active_count());
        assert_eq!((snap.gold, snap.silver), (64, 64));
        assert!((snap.round_elapsed - 1.5).abs() < 1e-4);
        assert_eq!(snap.game_over_elapsed, None);
        assert_eq!(snap.title, "TuxPusher [1.6]");

        let aim = snap.aim.unwrap();
        assert_eq!(aim.kind, 0);
        assert_eq!(aim.position[1], LAUNCH_Y);
        assert_eq!(aim.position[0], -crate::consts::LAUNCH_HALF_WIDTH);
    }

    #[test]
    fn test_aim_uses_gold_when_silver_empty() {
        let mut sim = sim();
        sim.economy.silver = 0;
        let snap = FrameSnapshot::capture(&sim, 0.0, &PointerState::default());
        assert_eq!(snap.aim.map(|a| a.kind), Some(1));

        sim.economy.gold = 0;
        let snap = FrameSnapshot::capture(&sim, 0.0, &PointerState::default());
        assert!(snap.aim.is_none());
    }

    #[test]
    fn test_game_over_elapsed() {
        let mut sim = sim();
        sim.session = Session::Over { since: 20.0 };
        let snap = FrameSnapshot::capture(&sim, 22.5, &PointerState::default());
        assert_eq!(snap.game_over_elapsed, Some(2.5));
    }
}
