pub mod constants;
pub mod grid;
pub mod input;
pub mod math;
pub mod pellet;
pub mod render;
pub mod session;
pub mod snake;
pub mod types;
