use glam::DVec2;

use crate::pose::Pose;
use crate::GLOBAL_CONFIG;

// angular checkpoint for lap counting: straight up from center, the top of
// the oval
pub const LAP_TRIGGER_ANGLE: f64 = -std::f64::consts::FRAC_PI_2;

// how far inside the outer edge the car starts, on the left straight
const SPAWN_INSET: f64 = 50.0;

// The one track in the game: an oval centered in the arena. The inner
// radius bounds the infield and only matters to whoever draws the track
#[derive(Copy, Clone, Debug)]
pub struct Track {
    pub center: DVec2,
    pub outer_radius: f64,
    pub inner_radius: f64,
}

impl Track {
    pub fn from_config() -> Track {
        Track {
            center: DVec2::new(
                GLOBAL_CONFIG.arena_width / 2.0,
                GLOBAL_CONFIG.arena_height / 2.0,
            ),
            outer_radius: GLOBAL_CONFIG.outer_radius,
            inner_radius: GLOBAL_CONFIG.inner_radius,
        }
    }

    // starting pose: on the left straight, pointing along +x
    pub fn spawn_pose(&self) -> Pose {
        Pose {
            position: DVec2::new(
                self.center.x - self.outer_radius + SPAWN_INSET,
                self.center.y,
            ),
            heading: 0.0,
        }
    }

    // angular position of a point about the track center, as atan2 gives it
    pub fn angular_position(&self, point: DVec2) -> f64 {
        (point.y - self.center.y).atan2(point.x - self.center.x)
    }
}
