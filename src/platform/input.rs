//! Pointer input mapped onto the launcher line

use crate::consts::*;
use crate::settings::ViewMode;
use crate::sim::pitch::launch_x;

/// Width in pixels of the dead strip on each side of the window where the
/// pointer pins the launcher to its end stop
pub fn dead_margin(window_width: f32, view: ViewMode) -> f32 {
    let ratio = match view {
        ViewMode::Perspective => PERSPECTIVE_MARGIN_RATIO,
        ViewMode::Orthographic => ORTHO_MARGIN_RATIO,
    };
    window_width * ratio
}

/// Horizontal pointer position in window pixels
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PointerState {
    pub x: f32,
    pub window_width: f32,
    pub margin: f32,
}

impl PointerState {
    pub fn new(x: f32, window_width: f32, margin: f32) -> Self {
        Self {
            x,
            window_width,
            margin,
        }
    }

    /// Launcher x in pitch units
    pub fn launch_x(&self) -> f32 {
        if self.x < self.margin {
            return -LAUNCH_HALF_WIDTH;
        }
        if self.x > self.window_width - self.margin {
            return LAUNCH_HALF_WIDTH;
        }
        let span = self.window_width - self.margin * 2.0;
        if span <= 0.0 {
            return 0.0;
        }
        launch_x((self.x - self.margin) / span)
    }
}
