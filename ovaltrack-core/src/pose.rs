use glam::DVec2;
use serde::{Deserialize, Serialize};

// Pose is what the simulation hands back to whatever draws the car == where
// to render it. Heading is in radians, 0 along +x, increasing clockwise in
// screen coordinates; turning accumulates it without wrapping
#[derive(Copy, Clone, Debug, Serialize, Deserialize)]
pub struct Pose {
    pub position: DVec2,
    pub heading: f64,
}
