//! Stacks, trophies and zone rewards

use serde::{Deserialize, Serialize};

use super::disk::{DiskKind, FigureId};
use super::pitch::Zone;
use crate::consts::*;

/// Figures banked this round, one bit per identity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TrophySet(u8);

impl TrophySet {
    pub fn contains(self, id: FigureId) -> bool {
        self.0 & (1 << id.index()) != 0
    }

    pub fn insert(&mut self, id: FigureId) {
        self.0 |= 1 << id.index();
    }

    pub fn clear(&mut self) {
        self.0 = 0;
    }

    pub fn bits(self) -> u8 {
        self.0
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn len(self) -> u32 {
        self.0.count_ones()
    }
}

/// What a zone entry paid out
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Award {
    /// Pass-through zone, nothing paid
    Nothing,
    /// First time this figure was banked this round
    FigureBanked(FigureId),
    /// Figure already banked: flat bonus to both stacks
    RepeatBonus(FigureId),
    Silver(i32),
    Gold(i32),
}

/// Gold and silver inventories plus the trophy set.
///
/// Stacks are signed so a spend can never wrap; `clamp` pulls them back to
/// zero once per tick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Economy {
    pub gold: i32,
    pub silver: i32,
    pub trophies: TrophySet,
}

impl Default for Economy {
    fn default() -> Self {
        Self::new()
    }
}

impl Economy {
    pub fn new() -> Self {
        Self {
            gold: STARTING_STACK as i32,
            silver: STARTING_STACK as i32,
            trophies: TrophySet::default(),
        }
    }

    /// Both stacks empty
    pub fn is_broke(&self) -> bool {
        self.gold == 0 && self.silver == 0
    }

    /// Apply the reward for a disk of `kind` falling into `zone`.
    /// Figures are only ever spawned into the reserved slots, so the kind
    /// alone decides the trophy rule.
    pub fn award(&mut self, kind: DiskKind, zone: Zone) -> Award {
        if let DiskKind::Figure(id) = kind {
            return if self.trophies.contains(id) {
                let bonus = REPEAT_FIGURE_BONUS as i32;
                self.gold += bonus;
                self.silver += bonus;
                Award::RepeatBonus(id)
            } else {
                self.trophies.insert(id);
                Award::FigureBanked(id)
            };
        }

        let doubled = kind == DiskKind::Gold;
        match zone {
            Zone::House1 | Zone::House2 => Award::Nothing,
            Zone::Silver => {
                let n = if doubled { 2 } else { 1 };
                self.silver += n;
                Award::Silver(n)
            }
            Zone::Gold { central: true } => {
                let n = if doubled { 2 } else { 1 };
                self.gold += n;
                Award::Gold(n)
            }
            // Missing the gold slot pays one silver whatever the coin
            Zone::Gold { central: false } => {
                self.silver += 1;
                Award::Silver(1)
            }
        }
    }

    pub fn clamp(&mut self) {
        self.gold = self.gold.max(0);
        self.silver = self.silver.max(0);
    }
}
