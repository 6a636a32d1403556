use ovaltrack_core::GLOBAL_CONFIG;

mod game;
mod input;
mod physics;
mod progress;

fn main() {
    // kick off the simulation loop
    println!("simulation ticking every {}ms", GLOBAL_CONFIG.tick_ms);
    game::SimulationLoop::new(Box::new(input::CircuitDriver::new())).start_loop();
}
