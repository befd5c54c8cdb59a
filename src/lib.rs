pub mod game;

pub use game::render::{compose_frame, Frame, FrameSink, Viewport};
pub use game::session::{GameSession, Phase};
