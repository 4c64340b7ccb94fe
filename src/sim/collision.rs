//! Pairwise disk de-penetration
//!
//! The resolver is a position-only scheme: overlapping disks are pushed
//! apart along the line between their centres, the pushed disk is confined
//! to its band of the pitch, and a disk that goes over a zone edge is paid
//! out and retired. Running several passes per tick lets pushes propagate
//! through a pile.

use glam::Vec2;
use rand::Rng;

use super::disk::DiskKind;
use super::economy::{Award, Economy};
use super::pitch::{Confinement, Zone, confine};
use super::registry::DiskRegistry;
use crate::consts::COLLISION_JITTER;

/// A disk fell into a scoring zone during a pass
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoneEntry {
    pub slot: usize,
    pub kind: DiskKind,
    pub zone: Zone,
    /// Where the disk was when it went over the edge
    pub pos: Vec2,
    pub award: Award,
}

/// Separation for disk `j` pushed away from disk `i`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Separation {
    /// Unit vector from `j` toward `i`
    pub normal: Vec2,
    /// Signed overlap, negative while penetrating
    pub depth: f32,
}

/// Compute how far `j` must move to clear `i`.
///
/// `offset` is the vector from `j` to `i` (already jittered). Returns
/// `None` when the disks do not overlap, when their centres coincide, or
/// when `j` is not above `i`: only upward corrections are ever applied.
pub fn separation(offset: Vec2, reach: f32) -> Option<Separation> {
    let d2 = offset.length_squared();
    if d2 >= reach * reach || d2 == 0.0 {
        return None;
    }

    let d = d2.sqrt();
    let normal = offset * (1.0 / d);
    if normal.y >= 0.0 {
        return None;
    }

    Some(Separation {
        normal,
        depth: d - reach,
    })
}

/// One resolver pass over every ordered pair of active disks.
///
/// `moving` is the disk currently being pushed; it pushes others but is
/// never pushed itself. Zone entries are paid out through `economy` in
/// encounter order and appended to `entries`. Returns the number of pairs
/// that were corrected.
pub fn resolve_pass<R: Rng + ?Sized>(
    disks: &mut DiskRegistry,
    economy: &mut Economy,
    moving: Option<usize>,
    rng: &mut R,
    entries: &mut Vec<ZoneEntry>,
) -> u32 {
    let mut corrections = 0;
    let capacity = disks.capacity();

    for i in 0..capacity {
        if !disks.get(i).is_active() {
            continue;
        }

        for j in 0..capacity {
            if i == j || Some(j) == moving {
                continue;
            }
            let pusher = *disks.get(i);
            let pushed = disks.get_mut(j);
            let Some(kind) = pushed.kind else {
                continue;
            };

            let mut offset = pusher.pos - pushed.pos;
            offset.x += rng.random_range(-COLLISION_JITTER..=COLLISION_JITTER);

            let Some(sep) = separation(offset, pusher.radius + pushed.radius) else {
                continue;
            };

            pushed.pos += sep.normal * sep.depth;

            match confine(pushed.pos, pushed.radius) {
                Confinement::OnPitch(x) => pushed.pos.x = x,
                Confinement::Entered(zone) => {
                    let pos = pushed.pos;
                    disks.retire(j);
                    let award = economy.award(kind, zone);
                    log::debug!("disk {} ({:?}) entered {:?}: {:?}", j, kind, zone, award);
                    entries.push(ZoneEntry {
                        slot: j,
                        kind,
                        zone,
                        pos,
                        award,
                    });
                }
            }

            corrections += 1;
        }
    }

    corrections
}
