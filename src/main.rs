use anyhow::Context;
use globe_snake::game::constants::FIXED_DELTA_MS;
use globe_snake::game::input::{InputSource, InputState, ScriptedInput};
use globe_snake::game::render::compose_frame;
use globe_snake::{Frame, FrameSink, GameSession, Phase, Viewport};
use std::env;
use tracing_subscriber::EnvFilter;

struct LogSink {
  presented: usize,
}

impl FrameSink for LogSink {
  fn present(&mut self, frame: &Frame) {
    self.presented += 1;
    if self.presented % 120 == 0 {
      tracing::debug!(
        frames = self.presented,
        circles = frame.circles.len(),
        score = frame.score,
        status = frame.status,
        "frame"
      );
    }
  }
}

fn main() -> anyhow::Result<()> {
  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::from_default_env())
    .init();

  let frames: usize = env::var("GLOBE_SNAKE_FRAMES")
    .ok()
    .and_then(|value| value.parse().ok())
    .unwrap_or(600);
  let view = env::var("GLOBE_SNAKE_VIEW").unwrap_or_else(|_| "960x720".to_string());
  let viewport = parse_viewport(&view)?;

  let mut session = GameSession::new();
  session.start();

  let steer_left = InputState {
    left: true,
    right: false,
  };
  let steer_right = InputState {
    left: false,
    right: true,
  };
  let mut script = ScriptedInput::new(vec![
    (90, InputState::default()),
    (45, steer_left),
    (120, InputState::default()),
    (45, steer_right),
  ]);

  let mut sink = LogSink { presented: 0 };
  for _ in 0..frames {
    session.set_input(script.poll());
    session.advance(FIXED_DELTA_MS);
    let frame = compose_frame(&session, &viewport);
    sink.present(&frame);
    if session.phase() == Phase::GameOver {
      break;
    }
  }

  tracing::info!(
    score = session.score(),
    status = session.status(),
    frames = sink.presented,
    "session finished"
  );

  let last = compose_frame(&session, &viewport);
  println!("{}", serde_json::to_string(&last)?);
  Ok(())
}

fn parse_viewport(spec: &str) -> anyhow::Result<Viewport> {
  let (width, height) = spec
    .split_once('x')
    .context("expected GLOBE_SNAKE_VIEW as WIDTHxHEIGHT")?;
  let width: f64 = width.trim().parse().context("viewport width")?;
  let height: f64 = height.trim().parse().context("viewport height")?;
  Ok(Viewport::new(width, height))
}
