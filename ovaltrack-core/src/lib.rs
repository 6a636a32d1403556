pub mod controls;
pub mod lap_info;
pub mod pose;
pub mod track;
mod settings;

pub use settings::GLOBAL_CONFIG;
