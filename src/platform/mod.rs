//! Platform abstraction layer
//!
//! Handles the pieces of the host environment the simulation reads:
//! - Time (monotonic seconds)
//! - Pointer input mapped onto the launcher

pub mod input;
pub mod time;

pub use input::{PointerState, dead_margin};
pub use time::{Clock, ManualClock, SystemClock};
