pub mod input;
pub mod renderer;
pub mod time_manager;
