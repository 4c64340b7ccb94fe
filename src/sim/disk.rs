//! Disk entity: coins and figures on the pitch

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// One of the six collectible figure identities
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FigureId(u8);

impl FigureId {
    /// Returns `None` if `index` is not below `FIGURE_COUNT`
    pub fn new(index: u8) -> Option<Self> {
        (index < FIGURE_COUNT).then_some(Self(index))
    }

    /// Map any index onto a valid identity
    pub fn wrapping(index: u8) -> Self {
        Self(index % FIGURE_COUNT)
    }

    /// Bit position in the trophy set
    #[inline]
    pub fn index(self) -> u8 {
        self.0
    }

    pub fn all() -> impl Iterator<Item = FigureId> {
        (0..FIGURE_COUNT).map(FigureId)
    }
}

/// What a live disk is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DiskKind {
    /// Plain silver coin
    Silver,
    /// Plain gold coin
    Gold,
    /// Collectible figure
    Figure(FigureId),
}

impl DiskKind {
    /// Identity code shared with renderers: 0 silver, 1 gold, 2..=7 figures
    pub fn code(self) -> u32 {
        match self {
            DiskKind::Silver => 0,
            DiskKind::Gold => 1,
            DiskKind::Figure(id) => 2 + id.index() as u32,
        }
    }

    pub fn is_figure(self) -> bool {
        matches!(self, DiskKind::Figure(_))
    }

    /// Radius a disk of this kind spawns with
    pub fn radius(self) -> f32 {
        match self {
            DiskKind::Silver | DiskKind::Gold => COIN_RADIUS,
            DiskKind::Figure(_) => FIGURE_RADIUS,
        }
    }
}

/// A registry slot. `kind == None` marks an empty slot whose position is
/// meaningless and must be ignored.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Disk {
    pub pos: Vec2,
    pub radius: f32,
    pub kind: Option<DiskKind>,
}

impl Disk {
    pub const EMPTY: Disk = Disk {
        pos: Vec2::ZERO,
        radius: COIN_RADIUS,
        kind: None,
    };

    pub fn new(kind: DiskKind, pos: Vec2) -> Self {
        Self {
            pos,
            radius: kind.radius(),
            kind: Some(kind),
        }
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.kind.is_some()
    }

    /// Strict overlap test on squared distance
    #[inline]
    pub fn overlaps(&self, other: &Disk) -> bool {
        let reach = self.radius + other.radius;
        self.pos.distance_squared(other.pos) < reach * reach
    }
}

impl Default for Disk {
    fn default() -> Self {
        Self::EMPTY
    }
}
