//! Coin Pusher - simulation core for a coin pusher arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (pitch geometry, disks, collisions, economy, session)
//! - `renderer`: Render-facing frame snapshot
//! - `platform`: Clock and pointer abstraction
//! - `settings`: User settings and validation

pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use settings::{Settings, SettingsError, SimConfig, ViewMode, VsyncMode};
pub use sim::{Simulation, TickInput, tick};

/// Game configuration constants
///
/// All lengths are in pitch-local units. +y points up the pitch, away from
/// the launcher and toward the scoring zones.
pub mod consts {
    /// Registry capacity
    pub const MAX_DISKS: usize = 130;
    /// Slots `[0, FIGURE_SLOTS)` are reserved for figure disks
    pub const FIGURE_SLOTS: usize = 3;
    /// Number of distinct figure identities
    pub const FIGURE_COUNT: u8 = 6;

    /// Disk radii
    pub const COIN_RADIUS: f32 = 0.3;
    pub const FIGURE_RADIUS: f32 = 0.36;

    /// Starting stack size for both gold and silver
    pub const STARTING_STACK: u32 = 64;
    /// Award for banking a figure that is already in the trophy set
    pub const REPEAT_FIGURE_BONUS: u32 = 6;

    /// Pitch floor (bottom edge of the playable area)
    pub const PITCH_FLOOR_Y: f32 = -4.03414;
    /// Widest wall half-width, also the spawn rectangle half-width
    pub const PITCH_HALF_WIDTH: f32 = 3.40863;
    /// Top of the walled section used for spawning and `inside_pitch`
    pub const PITCH_WALL_TOP_Y: f32 = 1.45439;

    /// Band boundaries
    pub const LOWER_BAND_TOP_Y: f32 = -2.22855;
    pub const MIDDLE_BAND_TOP_Y: f32 = -0.292027;
    /// The resolver keeps clamping against the straight walls a little past
    /// `PITCH_WALL_TOP_Y` before the first house zone begins.
    pub const UPPER_BAND_TOP_Y: f32 = 1.64;
    pub const HOUSE1_TOP_Y: f32 = 2.58397;
    pub const HOUSE2_TOP_Y: f32 = 3.70642;
    pub const SILVER_TOP_Y: f32 = 4.10583;
    pub const GOLD_BOTTOM_Y: f32 = 4.31457;
    /// Gold zone central interval half-width (inclusive)
    pub const GOLD_HALF_WIDTH: f32 = 0.584316;

    /// Launcher line and horizontal travel
    pub const LAUNCH_Y: f32 = -4.54055;
    pub const LAUNCH_HALF_WIDTH: f32 = 1.90433;

    /// Push speed defaults (pitch units per second)
    pub const DEFAULT_PUSH_SPEED: f32 = 1.6;
    pub const MAX_PUSH_SPEED: f32 = 32.0;
    pub const PUSH_SPEED_STEP: f32 = 1.0;

    /// Resolver passes per tick
    pub const RESOLVER_PASSES: usize = 6;
    /// Symmetric x-jitter applied to each separation vector
    pub const COLLISION_JITTER: f32 = 0.01;

    /// Seconds between both stacks emptying and the round ending
    pub const GAME_OVER_GRACE: f64 = 3.0;
    /// Wall-clock budget for filling plain disks at round setup (seconds)
    pub const PLACEMENT_BUDGET: f64 = 0.033;

    /// Dead margin ratios of the window width (pointer mapping)
    pub const PERSPECTIVE_MARGIN_RATIO: f32 = 0.2058590651;
    pub const ORTHO_MARGIN_RATIO: f32 = 0.3076923192;
}
