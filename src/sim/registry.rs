//! Fixed-capacity disk registry
//!
//! Slot indices are stable for the whole round: retiring a disk leaves a
//! hole that the next spawn may reuse (lowest free index first), and slots
//! `[0, FIGURE_SLOTS)` only ever hold figures.

use std::ops::Range;

use glam::Vec2;
use rand::Rng;

use super::disk::{Disk, DiskKind};
use super::pitch::inside_pitch;
use crate::consts::*;
use crate::platform::Clock;

/// Wall-clock budget for a placement search
pub struct Deadline<'a> {
    clock: &'a dyn Clock,
    started: f64,
    budget: f64,
}

impl<'a> Deadline<'a> {
    /// Start the budget now
    pub fn start(clock: &'a dyn Clock, budget: f64) -> Self {
        Self {
            clock,
            started: clock.now(),
            budget,
        }
    }

    pub fn expired(&self) -> bool {
        self.clock.now() - self.started > self.budget
    }
}

/// Slot array owning every disk in the simulation
#[derive(Debug, Clone, PartialEq)]
pub struct DiskRegistry {
    slots: [Disk; MAX_DISKS],
}

impl Default for DiskRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl DiskRegistry {
    pub fn new() -> Self {
        Self {
            slots: [Disk::EMPTY; MAX_DISKS],
        }
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        MAX_DISKS
    }

    #[inline]
    pub fn get(&self, index: usize) -> &Disk {
        &self.slots[index]
    }

    #[inline]
    pub fn get_mut(&mut self, index: usize) -> &mut Disk {
        &mut self.slots[index]
    }

    /// Active disks in slot order
    pub fn iter_active(&self) -> impl Iterator<Item = (usize, &Disk)> {
        self.slots.iter().enumerate().filter(|(_, d)| d.is_active())
    }

    pub fn active_count(&self) -> usize {
        self.slots.iter().filter(|d| d.is_active()).count()
    }

    /// Lowest empty slot within `range`
    pub fn find_free_slot(&self, range: Range<usize>) -> Option<usize> {
        let end = range.end.min(MAX_DISKS);
        (range.start..end).find(|&i| !self.slots[i].is_active())
    }

    /// Put a disk of `kind` into slot `index`.
    ///
    /// Figures only go into `[0, FIGURE_SLOTS)` and coins only above it. A
    /// mismatched spawn is refused and returns `false`.
    pub fn spawn(&mut self, index: usize, kind: DiskKind, pos: Vec2) -> bool {
        if kind.is_figure() != (index < FIGURE_SLOTS) {
            log::warn!("refusing to spawn {:?} into slot {}", kind, index);
            return false;
        }
        self.slots[index] = Disk::new(kind, pos);
        true
    }

    /// Empty the slot. Other slots keep their indices.
    pub fn retire(&mut self, index: usize) {
        self.slots[index].kind = None;
    }

    /// Empty every slot
    pub fn clear(&mut self) {
        self.slots = [Disk::EMPTY; MAX_DISKS];
    }

    /// True if a disk of `radius` at `pos` overlaps any active disk other
    /// than slot `skip`
    pub fn overlaps_any(&self, skip: usize, pos: Vec2, radius: f32) -> bool {
        let candidate = Disk {
            pos,
            radius,
            kind: None,
        };
        self.iter_active()
            .filter(|&(i, _)| i != skip)
            .any(|(_, other)| other.overlaps(&candidate))
    }

    /// Sample uniform positions in the spawn rectangle until one is inside
    /// the pitch and clear of every other disk, then spawn `kind` there.
    ///
    /// Without a deadline the search runs until it succeeds. With one, it
    /// gives up once the deadline has expired and returns `false`, leaving
    /// the slot empty. A kind that does not belong in `index` is refused
    /// the same way.
    pub fn place_random<R: Rng + ?Sized>(
        &mut self,
        index: usize,
        kind: DiskKind,
        rng: &mut R,
        deadline: Option<&Deadline<'_>>,
    ) -> bool {
        let radius = kind.radius();
        let y_max = PITCH_WALL_TOP_Y - radius;

        let sample = |rng: &mut R| {
            Vec2::new(
                rng.random_range(-PITCH_HALF_WIDTH..=PITCH_HALF_WIDTH),
                rng.random_range(PITCH_FLOOR_Y..=y_max),
            )
        };

        let mut pos = sample(rng);
        while !inside_pitch(pos, radius) || self.overlaps_any(index, pos, radius) {
            pos = sample(rng);
            if deadline.is_some_and(|d| d.expired()) {
                return false;
            }
        }

        self.spawn(index, kind, pos)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::ManualClock;
    use crate::sim::disk::FigureId;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_find_free_slot_lowest_first() {
        let mut reg = DiskRegistry::new();
        assert_eq!(reg.find_free_slot(0..MAX_DISKS), Some(0));

        let figure = DiskKind::Figure(FigureId::new(0).unwrap());
        reg.spawn(0, figure, Vec2::ZERO);
        reg.spawn(1, figure, Vec2::new(1.0, 0.0));
        reg.spawn(2, figure, Vec2::new(2.0, 0.0));
        reg.spawn(3, DiskKind::Gold, Vec2::new(3.0, 0.0));
        assert_eq!(reg.find_free_slot(0..MAX_DISKS), Some(4));

        reg.retire(1);
        assert_eq!(reg.find_free_slot(0..MAX_DISKS), Some(1));
        assert_eq!(reg.find_free_slot(2..4), None);
    }

    #[test]
    fn test_retire_does_not_compact() {
        let mut reg = DiskRegistry::new();
        reg.spawn(4, DiskKind::Gold, Vec2::new(0.5, 0.5));
        reg.spawn(7, DiskKind::Silver, Vec2::new(-0.5, 0.5));
        reg.retire(4);

        let active: Vec<usize> = reg.iter_active().map(|(i, _)| i).collect();
        assert_eq!(active, vec![7]);
        assert_eq!(reg.get(7).pos, Vec2::new(-0.5, 0.5));
    }

    #[test]
    fn test_full_registry_has_no_free_slot() {
        let mut reg = DiskRegistry::new();
        let figure = DiskKind::Figure(FigureId::new(4).unwrap());
        for i in 0..MAX_DISKS {
            let kind = match i {
                0..FIGURE_SLOTS => figure,
                _ => DiskKind::Silver,
            };
            assert!(reg.spawn(i, kind, Vec2::new(i as f32, 0.0)));
        }
        assert_eq!(reg.find_free_slot(0..MAX_DISKS), None);
        assert_eq!(reg.active_count(), MAX_DISKS);
    }

    #[test]
    fn test_spawn_keeps_figure_slots_reserved() {
        let mut reg = DiskRegistry::new();
        let figure = DiskKind::Figure(FigureId::new(2).unwrap());

        assert!(!reg.spawn(0, DiskKind::Gold, Vec2::ZERO));
        assert!(!reg.spawn(FIGURE_SLOTS, figure, Vec2::ZERO));
        assert_eq!(reg.active_count(), 0);

        assert!(reg.spawn(FIGURE_SLOTS - 1, figure, Vec2::ZERO));
        assert!(reg.spawn(FIGURE_SLOTS, DiskKind::Silver, Vec2::ZERO));
        assert_eq!(reg.active_count(), 2);
    }

    #[test]
    fn test_overlaps_any_skips_own_slot() {
        let mut reg = DiskRegistry::new();
        reg.spawn(5, DiskKind::Silver, Vec2::ZERO);

        assert!(!reg.overlaps_any(5, Vec2::new(0.1, 0.0), COIN_RADIUS));
        assert!(reg.overlaps_any(6, Vec2::new(0.1, 0.0), COIN_RADIUS));
        // Touching exactly is not an overlap
        let touching = Vec2::new(2.0 * COIN_RADIUS, 0.0);
        assert!(!reg.overlaps_any(6, touching, COIN_RADIUS));
    }

    #[test]
    fn test_placement_is_valid() {
        let mut reg = DiskRegistry::new();
        let mut rng = Pcg32::seed_from_u64(7);
        let figure = DiskKind::Figure(FigureId::new(1).unwrap());

        for i in 0..FIGURE_SLOTS {
            assert!(reg.place_random(i, figure, &mut rng, None));
        }
        for (i, disk) in reg.iter_active() {
            assert!(inside_pitch(disk.pos, disk.radius));
            assert!(!reg.overlaps_any(i, disk.pos, disk.radius));
        }
    }

    #[test]
    fn test_placement_gives_up_after_deadline() {
        let mut reg = DiskRegistry::new();
        let mut rng = Pcg32::seed_from_u64(11);
        // Every clock read advances 10ms, so the 33ms budget runs out fast
        let clock = ManualClock::with_step(0.0, 0.01);
        let deadline = Deadline::start(&clock, PLACEMENT_BUDGET);

        // Far more coins than the pitch can hold
        let mut placed = 0;
        for i in 0..MAX_DISKS {
            let kind = if i < FIGURE_SLOTS {
                DiskKind::Figure(FigureId::wrapping(i as u8))
            } else {
                DiskKind::Silver
            };
            if !reg.place_random(i, kind, &mut rng, Some(&deadline)) {
                break;
            }
            placed += 1;
        }
        assert!(placed < MAX_DISKS);
        assert_eq!(reg.active_count(), placed);
    }
}
