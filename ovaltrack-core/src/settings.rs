use config::{Config, ConfigError, File};
use lazy_static::lazy_static;
use serde::Deserialize;

#[derive(Deserialize)]
pub struct Settings {
    pub arena_width: f64,
    pub arena_height: f64,
    pub max_speed: f64,
    pub acceleration: f64,
    pub friction: f64,
    pub turn_speed: f64,
    pub car_width: f64,
    pub car_height: f64,
    pub outer_radius: f64,
    pub inner_radius: f64,
    pub min_lap_speed: f64,
    pub tick_ms: u64,
}

impl Settings {
    fn new() -> Result<Settings, ConfigError> {
        let config = Config::builder()
            .set_default("arena_width", 800.0)?
            .set_default("arena_height", 600.0)?
            .set_default("max_speed", 3.0)?
            .set_default("acceleration", 0.06)?
            .set_default("friction", 0.02)?
            .set_default("turn_speed", 0.04)?
            .set_default("car_width", 24.0)?
            .set_default("car_height", 12.0)?
            .set_default("outer_radius", 250.0)?
            .set_default("inner_radius", 140.0)?
            .set_default("min_lap_speed", 0.6)?
            .set_default("tick_ms", 16)?
            .add_source(File::with_name("config.yaml").required(false))
            .build()?;

        config.try_deserialize()
    }
}

lazy_static! {
    pub static ref GLOBAL_CONFIG: Settings = Settings::new().expect("failed to read config file");
}
