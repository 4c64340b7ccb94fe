//! Pitch geometry
//!
//! The pitch is symmetric about x = 0 and is described as a stack of
//! horizontal bands. The three lowest bands have walls that disks are
//! clamped against; the bands above them are scoring zones whose edges a
//! disk falls over instead.
//!
//! Every boundary is a half-width `h(y)`: the left edge is `-h` and the
//! right edge is `+h`. The formulas and constants below are gameplay-exact;
//! placement and rewards both depend on them.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Horizontal band of the pitch, bottom to top
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Band {
    /// Walls widen linearly away from the floor
    LowerWall,
    /// Walls keep widening at a gentler slope
    MiddleWall,
    /// Straight walls
    UpperWall,
    /// First house zone: pass-through, no reward
    House1,
    /// Second house zone: pass-through, no reward
    House2,
    /// Narrowing silver zone
    Silver,
    /// Flat ledge between the silver and gold zones; nothing happens here
    Ledge,
    /// Gold zone: everything that reaches it scores
    Gold,
}

/// Scoring zone a disk fell into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Zone {
    House1,
    House2,
    Silver,
    /// `central` is true inside the narrow gold interval
    Gold { central: bool },
}

/// Outcome of confining a pushed disk to the pitch
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Confinement {
    /// Disk is still on the pitch at this (possibly wall-clamped) x
    OnPitch(f32),
    /// Disk went over a zone edge
    Entered(Zone),
}

#[inline]
fn lower_wall(y: f32) -> f32 {
    2.22482 + 0.77267 * ((y - PITCH_FLOOR_Y).abs() * 0.553835588)
}

#[inline]
fn middle_wall(y: f32) -> f32 {
    2.99749 + 0.41114 * ((y - LOWER_BAND_TOP_Y).abs() * 0.516389426)
}

#[inline]
fn house1_edge(y: f32) -> f32 {
    PITCH_HALF_WIDTH - 0.41113 * ((y - PITCH_WALL_TOP_Y).abs() * 0.885284796)
}

#[inline]
fn house2_edge(y: f32) -> f32 {
    2.9975 - 1.34581 * ((y - HOUSE1_TOP_Y).abs() * 0.890908281)
}

#[inline]
fn silver_edge(y: f32) -> f32 {
    1.65169 - 1.067374 * ((y - HOUSE2_TOP_Y).abs() * 2.503692947)
}

impl Band {
    /// Half-width of the band's boundary at height `y` (disk centre, no
    /// radius applied). `None` for bands without side boundaries.
    pub fn half_width(self, y: f32) -> Option<f32> {
        match self {
            Band::LowerWall => Some(lower_wall(y)),
            Band::MiddleWall => Some(middle_wall(y)),
            Band::UpperWall => Some(PITCH_HALF_WIDTH),
            Band::House1 => Some(house1_edge(y)),
            Band::House2 => Some(house2_edge(y)),
            Band::Silver => Some(silver_edge(y)),
            Band::Ledge => None,
            Band::Gold => Some(GOLD_HALF_WIDTH),
        }
    }
}

/// Classify a height into the band the collision resolver applies
pub fn band_for_y(y: f32) -> Band {
    if y < LOWER_BAND_TOP_Y {
        Band::LowerWall
    } else if y < MIDDLE_BAND_TOP_Y {
        Band::MiddleWall
    } else if y < UPPER_BAND_TOP_Y {
        Band::UpperWall
    } else if y < HOUSE1_TOP_Y {
        Band::House1
    } else if y < HOUSE2_TOP_Y {
        Band::House2
    } else if y < SILVER_TOP_Y {
        Band::Silver
    } else if y < GOLD_BOTTOM_Y {
        Band::Ledge
    } else {
        Band::Gold
    }
}

/// True if a disk of `radius` centred at `pos` lies within the walled
/// part of the pitch. Heights at or above `PITCH_WALL_TOP_Y` have no side
/// walls and always pass.
pub fn inside_pitch(pos: Vec2, radius: f32) -> bool {
    let (x, y) = (pos.x, pos.y);

    if y < PITCH_FLOOR_Y + radius {
        return false;
    }

    let half = if y < LOWER_BAND_TOP_Y {
        lower_wall(y)
    } else if y < MIDDLE_BAND_TOP_Y {
        middle_wall(y)
    } else if y < PITCH_WALL_TOP_Y {
        PITCH_HALF_WIDTH
    } else {
        return true;
    };

    !(x < -half + radius || x > half - radius)
}

/// Clamp a pushed disk against the wall of its band, or report the zone it
/// fell into. Boundary equality counts as still on the pitch.
pub fn confine(pos: Vec2, radius: f32) -> Confinement {
    let band = band_for_y(pos.y);
    let x = pos.x;

    match band {
        Band::LowerWall | Band::MiddleWall | Band::UpperWall => {
            let half = band.half_width(pos.y).unwrap_or(PITCH_HALF_WIDTH);
            let left = -half + radius;
            let right = half - radius;
            if x < left {
                Confinement::OnPitch(left)
            } else if x > right {
                Confinement::OnPitch(right)
            } else {
                Confinement::OnPitch(x)
            }
        }
        Band::House1 | Band::House2 | Band::Silver => {
            let half = band.half_width(pos.y).unwrap_or(0.0);
            if x < -half || x > half {
                let zone = match band {
                    Band::House1 => Zone::House1,
                    Band::House2 => Zone::House2,
                    _ => Zone::Silver,
                };
                Confinement::Entered(zone)
            } else {
                Confinement::OnPitch(x)
            }
        }
        Band::Ledge => Confinement::OnPitch(x),
        Band::Gold => Confinement::Entered(Zone::Gold {
            central: (-GOLD_HALF_WIDTH..=GOLD_HALF_WIDTH).contains(&x),
        }),
    }
}

/// Launcher x for a normalised pointer position in `[0, 1]`
pub fn launch_x(t: f32) -> f32 {
    -LAUNCH_HALF_WIDTH + t * (2.0 * LAUNCH_HALF_WIDTH)
}
