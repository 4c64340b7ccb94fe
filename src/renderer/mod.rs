//! Render-facing data
//!
//! The simulation does not draw. A front end captures a `FrameSnapshot`
//! each frame and uploads its `DiskInstance`s as instance data.

pub mod instance;
pub mod snapshot;

pub use instance::{DiskInstance, colors};
pub use snapshot::{FrameSnapshot, displayed_stacks};
