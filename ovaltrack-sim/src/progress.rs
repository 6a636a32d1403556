use std::f64::consts::{FRAC_PI_4, PI};
use std::time::Instant;

use ovaltrack_core::lap_info::LapProgress;
use ovaltrack_core::track::{Track, LAP_TRIGGER_ANGLE};
use ovaltrack_core::GLOBAL_CONFIG;

use crate::physics::car::Car;

// an angular step larger than this between consecutive ticks is a teleport
// (arena wrap), not driving; detection sits the tick out and re-syncs
const DISCONTINUITY_LIMIT: f64 = FRAC_PI_4;

// fold an angle into (-PI, PI]
pub fn normalize_angle(mut angle: f64) -> f64 {
    while angle <= -PI {
        angle += 2.0 * PI;
    }
    while angle > PI {
        angle -= 2.0 * PI;
    }
    angle
}

// signed shortest arc from one angle to the other, so 170deg -> -170deg is a
// 20deg step rather than 340
pub fn shortest_arc(from: f64, to: f64) -> f64 {
    (to - from).sin().atan2((to - from).cos())
}

// whether the arc swept from prev to next passes the target angle in the
// increasing direction, including sweeps that wrap past +-PI
pub fn crosses_forward(prev: f64, next: f64, target: f64) -> bool {
    let prev = normalize_angle(prev);
    let next = normalize_angle(next);
    let target = normalize_angle(target);

    if prev < target && next >= target {
        return true;
    }
    prev > next && (prev < target || next >= target)
}

/* Fold one tick's car state into the lap tally. The first observation only
 * seeds the reference angle; afterwards, a forward pass of the trigger angle
 * counts as a lap when the car is moving faster than the jitter threshold,
 * and the first counted lap starts the run clock. Returns whether the tally
 * changed. */
pub fn observe_car(progress: &mut LapProgress, track: &Track, car: &Car) -> bool {
    let angle = normalize_angle(track.angular_position(car.pose.position));

    let last = match progress.last_angle {
        Some(last) => last,
        None => {
            progress.last_angle = Some(angle);
            return false;
        }
    };

    let mut counted = false;
    if shortest_arc(last, angle).abs() <= DISCONTINUITY_LIMIT
        && crosses_forward(last, angle, LAP_TRIGGER_ANGLE)
        && car.speed > GLOBAL_CONFIG.min_lap_speed
    {
        progress.laps += 1;
        if progress.laps == 1 {
            progress.start_time = Some(Instant::now());
        }
        counted = true;
    }

    progress.last_angle = Some(angle);
    counted
}

#[cfg(test)]
mod tests {
    use std::f64::consts::{FRAC_PI_2, PI};

    use glam::DVec2;

    use ovaltrack_core::lap_info::LapProgress;
    use ovaltrack_core::track::Track;

    use crate::physics::car::Car;

    use super::{crosses_forward, normalize_angle, observe_car, shortest_arc};

    // park the car on a circle around the track center at the given angle
    fn car_at_angle(track: &Track, angle_deg: f64, speed: f64) -> Car {
        let angle = angle_deg.to_radians();
        let mut car = Car::spawned_on(track);
        car.pose.position = track.center + DVec2::new(angle.cos(), angle.sin()) * 200.0;
        car.speed = speed;
        car
    }

    fn observe_at(progress: &mut LapProgress, track: &Track, angle_deg: f64, speed: f64) -> bool {
        observe_car(progress, track, &car_at_angle(track, angle_deg, speed))
    }

    #[test]
    fn test_first_observation_only_seeds() {
        let track = Track::from_config();
        let mut progress = LapProgress::new();

        assert!(!observe_at(&mut progress, &track, -100.0, 1.0));
        assert_eq!(progress.laps, 0);
        assert!(progress.start_time.is_none());
        let seeded = progress.last_angle.expect("first observation should seed");
        assert!((seeded - (-100.0f64).to_radians()).abs() < 1e-9);
    }

    #[test]
    fn test_fast_forward_crossing_counts_a_lap() {
        let track = Track::from_config();
        let mut progress = LapProgress::new();

        observe_at(&mut progress, &track, -100.0, 1.0);
        assert!(observe_at(&mut progress, &track, -80.0, 1.0));
        assert_eq!(progress.laps, 1);
        assert!(progress.start_time.is_some());
    }

    #[test]
    fn test_slow_crossing_does_not_count() {
        let track = Track::from_config();
        let mut progress = LapProgress::new();

        observe_at(&mut progress, &track, -100.0, 0.3);
        assert!(!observe_at(&mut progress, &track, -80.0, 0.3));
        assert_eq!(progress.laps, 0);
        assert!(progress.start_time.is_none());
        // the reference angle still re-syncs
        let last = progress.last_angle.unwrap();
        assert!((last - (-80.0f64).to_radians()).abs() < 1e-9);
    }

    #[test]
    fn test_big_jump_is_skipped_but_resyncs() {
        let track = Track::from_config();
        let mut progress = LapProgress::new();

        // a 60deg jump straddling the trigger angle: too large to trust
        observe_at(&mut progress, &track, -100.0, 1.0);
        assert!(!observe_at(&mut progress, &track, -40.0, 1.0));
        assert_eq!(progress.laps, 0);
        let last = progress.last_angle.unwrap();
        assert!((last - (-40.0f64).to_radians()).abs() < 1e-9);
    }

    #[test]
    fn test_second_lap_leaves_the_clock_alone() {
        let track = Track::from_config();
        let mut progress = LapProgress::new();

        observe_at(&mut progress, &track, -100.0, 1.0);
        observe_at(&mut progress, &track, -80.0, 1.0);
        let started = progress.start_time;

        // back around to just short of the trigger, then across again
        progress.last_angle = Some((-100.0f64).to_radians());
        assert!(observe_at(&mut progress, &track, -80.0, 1.0));
        assert_eq!(progress.laps, 2);
        assert_eq!(progress.start_time, started);
    }

    #[test]
    fn test_wraparound_step_is_a_short_arc() {
        // 170deg -> -170deg is a 20deg step, not a 340deg discontinuity
        let arc = shortest_arc(170.0f64.to_radians(), (-170.0f64).to_radians());
        assert!((arc - 20.0f64.to_radians()).abs() < 1e-9);

        let track = Track::from_config();
        let mut progress = LapProgress::new();
        observe_at(&mut progress, &track, 170.0, 1.0);
        // evaluated normally: no trigger between those angles, so no lap,
        // but the step is not treated as a teleport
        assert!(!observe_at(&mut progress, &track, -170.0, 1.0));
        let last = progress.last_angle.unwrap();
        assert!((last - (-170.0f64).to_radians()).abs() < 1e-9);
    }

    #[test]
    fn test_normalize_angle_lands_in_half_open_range() {
        for angle in [0.0, 5.0, -5.0, 10.0 * PI + 0.5, -7.3, PI, -PI] {
            let normalized = normalize_angle(angle);
            assert!(normalized > -PI && normalized <= PI);
        }
        assert_eq!(normalize_angle(PI), PI);
        assert_eq!(normalize_angle(-PI), PI);
    }

    #[test]
    fn test_crossing_detection() {
        // plain forward pass over the trigger
        assert!(crosses_forward(-1.7, -1.4, -FRAC_PI_2));
        // backward pass does not count
        assert!(!crosses_forward(-1.4, -1.7, -FRAC_PI_2));
        // forward pass that wraps past the PI boundary
        assert!(crosses_forward(
            175.0f64.to_radians(),
            (-175.0f64).to_radians(),
            PI
        ));
        // wrapping step nowhere near the trigger
        assert!(!crosses_forward(
            170.0f64.to_radians(),
            (-170.0f64).to_radians(),
            -FRAC_PI_2
        ));
    }
}
