use glam::DVec2;

use ovaltrack_core::controls::Controls;
use ovaltrack_core::pose::Pose;
use ovaltrack_core::track::Track;
use ovaltrack_core::GLOBAL_CONFIG;

// The one simulated vehicle: kinematic state plus the latest control
// snapshot. size only matters to whoever draws the body
#[derive(Copy, Clone, Debug)]
pub struct Car {
    pub controls: Controls,
    pub pose: Pose,
    pub speed: f64,
    pub size: DVec2,
}

impl Car {
    pub fn spawned_on(track: &Track) -> Car {
        Car {
            controls: Controls::default(),
            pose: track.spawn_pose(),
            speed: 0.0,
            size: DVec2::new(GLOBAL_CONFIG.car_width, GLOBAL_CONFIG.car_height),
        }
    }

    /* Given the held controls and this tick's time step, compute and return
     * what next tick's car state will be */
    pub fn do_physics_step(&self, dt: f64) -> Car {
        // a non-finite step would poison position; treat it as a skipped tick
        if !dt.is_finite() {
            return *self;
        }

        // throttle wins over reverse; with neither held, friction walks the
        // speed one fixed step toward zero without overshooting it
        let mut speed = if self.controls.forward {
            self.speed + GLOBAL_CONFIG.acceleration
        } else if self.controls.reverse {
            self.speed - GLOBAL_CONFIG.acceleration
        } else if self.speed > 0.0 {
            (self.speed - GLOBAL_CONFIG.friction).max(0.0)
        } else {
            (self.speed + GLOBAL_CONFIG.friction).min(0.0)
        };
        speed = speed.clamp(-GLOBAL_CONFIG.max_speed / 2.0, GLOBAL_CONFIG.max_speed);

        // turn rate scales with the speed ratio, but a zero ratio falls back
        // to a full-rate turn: the car steers at full lock from a standstill,
        // and the steering sense inverts while rolling backward
        let ratio = speed / GLOBAL_CONFIG.max_speed;
        let turn_scale = if ratio == 0.0 || ratio.is_nan() { 1.0 } else { ratio };

        let mut heading = self.pose.heading;
        if self.controls.turn_left {
            heading -= GLOBAL_CONFIG.turn_speed * turn_scale;
        }
        if self.controls.turn_right {
            heading += GLOBAL_CONFIG.turn_speed * turn_scale;
        }

        let mut position =
            self.pose.position + DVec2::new(heading.cos(), heading.sin()) * speed * dt;

        // torus arena: leaving one edge re-enters from the opposite one
        if position.x < 0.0 {
            position.x = GLOBAL_CONFIG.arena_width;
        }
        if position.x > GLOBAL_CONFIG.arena_width {
            position.x = 0.0;
        }
        if position.y < 0.0 {
            position.y = GLOBAL_CONFIG.arena_height;
        }
        if position.y > GLOBAL_CONFIG.arena_height {
            position.y = 0.0;
        }

        Car {
            controls: self.controls,
            pose: Pose { position, heading },
            speed,
            size: self.size,
        }
    }
}
