#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SteerDirection {
    Left,
    Right,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputState {
    pub left: bool,
    pub right: bool,
}

/// Seam for whatever produces steering state each frame: keyboard handlers,
/// on-screen buttons, pointer halves or a script. The simulation only ever
/// sees the polled flags.
pub trait InputSource {
    fn poll(&mut self) -> InputState;
}

/// Tick-indexed steering script, used by the demo binary and tests. Each
/// segment holds a state for a number of polls; past the last segment the
/// script reports idle input.
pub struct ScriptedInput {
    segments: Vec<(usize, InputState)>,
    cursor: usize,
    remaining: usize,
}

impl ScriptedInput {
    pub fn new(segments: Vec<(usize, InputState)>) -> Self {
        let remaining = segments.first().map(|(ticks, _)| *ticks).unwrap_or(0);
        Self {
            segments,
            cursor: 0,
            remaining,
        }
    }
}

impl InputSource for ScriptedInput {
    fn poll(&mut self) -> InputState {
        loop {
            match self.segments.get(self.cursor) {
                None => return InputState::default(),
                Some((_, state)) => {
                    if self.remaining == 0 {
                        self.cursor += 1;
                        self.remaining = self
                            .segments
                            .get(self.cursor)
                            .map(|(ticks, _)| *ticks)
                            .unwrap_or(0);
                        continue;
                    }
                    self.remaining -= 1;
                    return *state;
                }
            }
        }
    }
}
