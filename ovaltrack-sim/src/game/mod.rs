use std::thread;
use std::time::{Duration, Instant};

use ovaltrack_core::lap_info::{format_elapsed, LapProgress};
use ovaltrack_core::track::Track;
use ovaltrack_core::GLOBAL_CONFIG;

use crate::input::ControlsSource;
use crate::physics::car::Car;
use crate::progress;

// one normalized step == one frame at the 60Hz baseline
const FRAME_BASELINE_MS: f64 = 16.6667;
// cap on the normalized step, so ticks resuming after a stall never feed one
// huge Euler step into the integration
const MAX_FRAME_STEP: f64 = 1.0 / 30.0;

pub struct SimulationLoop {
    track: Track,
    car: Car,
    progress: LapProgress,
    source: Box<dyn ControlsSource>,
}

impl SimulationLoop {
    pub fn new(source: Box<dyn ControlsSource>) -> SimulationLoop {
        let track = Track::from_config();
        let car = Car::spawned_on(&track);
        SimulationLoop {
            track,
            car,
            progress: LapProgress::new(),
            source,
        }
    }

    // WARNING: this function never returns
    pub fn start_loop(&mut self) {
        let tick_duration = Duration::from_millis(GLOBAL_CONFIG.tick_ms);
        let mut last_frame = Instant::now();

        loop {
            let start_time = Instant::now();
            let dt = normalized_step(last_frame.elapsed());
            last_frame = start_time;

            self.car.controls = self.source.sample();
            self.tick(dt);

            // wait until tick time has elapsed
            thread::sleep(
                tick_duration
                    .checked_sub(start_time.elapsed())
                    .unwrap_or(Duration::ZERO),
            );
        }
    }

    // advance the world by one pre-normalized step
    fn tick(&mut self, dt: f64) {
        self.car = self.car.do_physics_step(dt);
        if progress::observe_car(&mut self.progress, &self.track, &self.car) {
            let clock = self
                .progress
                .elapsed()
                .map(format_elapsed)
                .unwrap_or_else(|| "0.0".to_string());
            println!("lap {} at {}s", self.progress.laps, clock);
        }
    }
}

// the host loop's real frame time, normalized to the 60-updates-per-second
// baseline and clamped; the physics step takes the result as-is
fn normalized_step(frame: Duration) -> f64 {
    (frame.as_secs_f64() * 1000.0 / FRAME_BASELINE_MS).min(MAX_FRAME_STEP)
}
