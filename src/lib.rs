//! Orrery - animated solar system model
//!
//! Everything the binary assembles lives here as plugins, so the orbit
//! model, frame driver, input handling and picking can run in headless apps.

pub mod camera;
pub mod config;
pub mod frame;
pub mod input;
pub mod orbit;
pub mod picking;
pub mod render;
pub mod types;
pub mod ui;

#[cfg(test)]
pub mod test_utils;
