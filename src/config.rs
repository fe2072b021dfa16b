use log::Level;

/// Fraction of a section that has to be on screen before it counts as visible.
pub const INTERSECTION_THRESHOLD: f64 = 0.3;

pub const SPLASH_TICK_MS: u32 = 100;
pub const SPLASH_FADE_OUT_MS: u32 = 800;

pub const PARTICLE_COUNT: usize = 50;
pub const PARTICLE_REFRESH_MS: u32 = 2000;

#[cfg(debug_assertions)]
pub fn loading_time_ms() -> u32 {
    1000 // Short splash while developing locally
}

#[cfg(not(debug_assertions))]
pub fn loading_time_ms() -> u32 {
    4000
}

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}
