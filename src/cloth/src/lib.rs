//! Verlet cloth: a grid of point masses held together by distance springs.

pub mod cloth;
pub mod config;
pub mod controller_message;
pub mod error;
pub mod particle;
pub mod posbox;
pub mod spring;
pub mod world;

pub type V2 = nalgebra::Vector2<f32>;
