//! Simulation module
//!
//! All gameplay logic lives here. Given a seed and a clock the simulation
//! is reproducible:
//! - Seeded RNG only, reseeded per round
//! - Stable iteration order (by registry slot)
//! - Time comes in through `TickInput` and the `Clock` trait
//! - No rendering or windowing dependencies

pub mod collision;
pub mod disk;
pub mod economy;
pub mod pitch;
pub mod registry;
pub mod state;
pub mod tick;

pub use collision::{Separation, ZoneEntry, resolve_pass, separation};
pub use disk::{Disk, DiskKind, FigureId};
pub use economy::{Award, Economy, TrophySet};
pub use pitch::{Band, Confinement, Zone, band_for_y, confine, inside_pitch};
pub use registry::{Deadline, DiskRegistry};
pub use state::{Motion, RngState, Session, Simulation, Stack};
pub use tick::{TickInput, tick};
