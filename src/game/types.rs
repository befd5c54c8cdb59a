use super::constants::HISTORY_SIZE;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Point {
  pub x: f64,
  pub y: f64,
  pub z: f64,
}

/// Fixed-size shift register of a node's recent positions. Slots start unset;
/// every `record` writes the newest entry over the oldest slot and hands the
/// evicted value back as the carry for the next node down the chain.
#[derive(Debug, Clone)]
pub struct PositionHistory {
  slots: [Option<Point>; HISTORY_SIZE],
  newest: usize,
}

impl PositionHistory {
  pub fn new() -> Self {
    Self {
      slots: [None; HISTORY_SIZE],
      newest: 0,
    }
  }

  pub fn record(&mut self, position: Point) -> Option<Point> {
    let slot = (self.newest + HISTORY_SIZE - 1) % HISTORY_SIZE;
    let evicted = self.slots[slot].replace(position);
    self.newest = slot;
    evicted
  }

  pub fn oldest(&self) -> Option<Point> {
    self.slots[(self.newest + HISTORY_SIZE - 1) % HISTORY_SIZE]
  }

  pub fn populated(&self) -> usize {
    self.slots.iter().flatten().count()
  }

  pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Point> {
    self.slots.iter_mut().flatten()
  }
}

impl Default for PositionHistory {
  fn default() -> Self {
    Self::new()
  }
}

#[derive(Debug, Clone)]
pub struct SnakeNode {
  pub pos: Point,
  pub history: PositionHistory,
}
