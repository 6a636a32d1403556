use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};

pub type LapCount = u32;

// LapProgress is the running lap tally for one simulation run. last_angle is
// None until the tracker has seen the car once; start_time is None until the
// first lap is counted
#[derive(Serialize, Deserialize, Clone, Copy, Debug)]
pub struct LapProgress {
    pub laps: LapCount,
    pub last_angle: Option<f64>,
    #[serde(with = "serde_millis")]
    pub start_time: Option<Instant>,
}

impl LapProgress {
    pub fn new() -> Self {
        LapProgress {
            laps: 0,
            last_angle: None,
            start_time: None,
        }
    }

    // time since the first counted lap; None before then
    pub fn elapsed(&self) -> Option<Duration> {
        self.start_time.map(|start| start.elapsed())
    }
}

// running-clock format used by the lap display
pub fn format_elapsed(elapsed: Duration) -> String {
    format!("{:.1}", elapsed.as_secs_f64())
}
