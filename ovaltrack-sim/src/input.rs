use ovaltrack_core::controls::Controls;

// the seam for the input collaborator: the loop asks for a fresh snapshot of
// held inputs once per tick and never sees key events
pub trait ControlsSource {
    fn sample(&mut self) -> Controls;
}

// scripted stand-in for a real input device: holds the throttle and steers
// right, which takes the car around the arena clockwise
pub struct CircuitDriver;

impl CircuitDriver {
    pub fn new() -> CircuitDriver {
        CircuitDriver
    }
}

impl ControlsSource for CircuitDriver {
    fn sample(&mut self) -> Controls {
        Controls {
            forward: true,
            turn_right: true,
            ..Controls::default()
        }
    }
}
