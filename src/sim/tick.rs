//! Frame driver
//!
//! Advances the simulation by one frame. Order within a frame is fixed:
//! player press, figure injection, stack clamp and game-over check, then
//! the push itself.

use super::state::Simulation;
use crate::platform::{Clock, PointerState};

/// Input for a single frame
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Frame time in seconds on the simulation clock
    pub now: f64,
    /// Pointer position, mapped onto the launcher on a press
    pub pointer: PointerState,
    /// Primary button pressed this frame
    pub press: bool,
}

/// Advance the simulation by one frame of `dt` seconds.
///
/// `clock` bounds the placement search when a press restarts the round.
pub fn tick(sim: &mut Simulation, input: &TickInput, dt: f32, clock: &dyn Clock) {
    sim.last_entries.clear();

    if input.press && !sim.in_motion() {
        sim.withdraw(&input.pointer);

        // A press after the round ended starts the next one
        if sim.session.deadline().is_some_and(|d| input.now > d) {
            sim.restart(clock);
            return;
        }
    }

    sim.inject_figure();
    sim.update_session(input.now);
    sim.advance_motion(dt);
}
