use super::constants::{
    BASE_SPEED, COLLISION_DISTANCE, FIXED_DELTA_MS, GLOBE_GROWTH_PER_ORB, GLOBE_SCALE_LERP,
    INITIAL_GLOBE_SCALE, MAX_CATCHUP_STEPS, MAX_GLOBE_SCALE, MAX_SPEED_BOOST,
    SCORE_BOOST_PER_POINT, STARTING_DIRECTION, TURN_RATE,
};
use super::grid::build_grid;
use super::input::{InputState, SteerDirection};
use super::math::{distance, rotate_about_heading};
use super::pellet::spawn_pellet;
use super::snake::{add_snake_node, apply_snake_step, create_snake};
use super::types::{Point, SnakeNode};
use tracing::{debug, info};


#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Ready,
    Running,
    Paused,
    GameOver,
}

#[derive(Debug, Clone, Copy)]
enum Collision {
    Tail,
    Pellet,
}

/// The whole single-threaded game state: snake, pellet, grid, heading, score,
/// the smoothed globe scale and the fixed-step accumulator. Everything is
/// driven from one frame callback; nothing here blocks or suspends.
#[derive(Debug)]
pub struct GameSession {
    pub(crate) snake: Vec<SnakeNode>,
    pub(crate) pellet: Option<Point>,
    pub(crate) grid: Vec<Point>,
    pub(crate) heading: f64,
    pub(crate) score: u32,
    pub(crate) globe_scale: f64,
    pub(crate) target_globe_scale: f64,
    pub(crate) input: InputState,
    pub(crate) phase: Phase,
    accumulator: f64,
}

impl GameSession {
    pub fn new() -> Self {
        Self {
            snake: Vec::new(),
            pellet: None,
            grid: Vec::new(),
            heading: STARTING_DIRECTION,
            score: 0,
            globe_scale: INITIAL_GLOBE_SCALE,
            target_globe_scale: INITIAL_GLOBE_SCALE,
            input: InputState::default(),
            phase: Phase::Ready,
            accumulator: 0.0,
        }
    }

    pub fn reset(&mut self) {
        self.snake = create_snake();
        self.heading = STARTING_DIRECTION;
        self.score = 0;
        self.globe_scale = INITIAL_GLOBE_SCALE;
        self.target_globe_scale = INITIAL_GLOBE_SCALE;
        self.grid = build_grid();
        self.pellet = Some(spawn_pellet(&self.snake));
        self.input = InputState::default();
        self.accumulator = 0.0;
    }

    /// Start or resume. A session that has not run yet, or that already ended,
    /// is reset first; a paused one keeps its state.
    pub fn start(&mut self) {
        if matches!(self.phase, Phase::Ready | Phase::GameOver) {
            self.reset();
        }
        self.phase = Phase::Running;
        self.accumulator = 0.0;
        info!(score = self.score, length = self.snake.len(), "session live");
    }

    pub fn pause(&mut self) {
        if self.phase == Phase::Running {
            self.phase = Phase::Paused;
            debug!("session paused");
        }
    }

    pub fn toggle_pause(&mut self) {
        match self.phase {
            Phase::Running => self.pause(),
            Phase::Paused | Phase::Ready => self.start(),
            Phase::GameOver => {}
        }
    }

    pub fn restart(&mut self) {
        self.reset();
        self.phase = Phase::Running;
    }

    pub fn steer(&mut self, direction: SteerDirection, pressed: bool) {
        match direction {
            SteerDirection::Left => self.input.left = pressed,
            SteerDirection::Right => self.input.right = pressed,
        }
    }

    pub fn set_input(&mut self, input: InputState) {
        self.input = input;
    }

    /// Per displayed frame: smooth the globe scale, then consume the wall
    /// clock delta in fixed steps. The accumulator is clamped so a stalled
    /// frame (a backgrounded tab, say) never triggers unbounded catch-up.
    pub fn advance(&mut self, delta_ms: f64) {
        if self.phase != Phase::Running {
            return;
        }

        self.globe_scale += (self.target_globe_scale - self.globe_scale) * GLOBE_SCALE_LERP;

        self.accumulator += delta_ms;
        let limit = FIXED_DELTA_MS * MAX_CATCHUP_STEPS;
        if self.accumulator > limit {
            self.accumulator = limit;
        }

        while self.accumulator >= FIXED_DELTA_MS {
            self.accumulator -= FIXED_DELTA_MS;
            self.step();
            if self.phase != Phase::Running {
                break;
            }
        }
    }

    /// One fixed simulation tick.
    fn step(&mut self) {
        if self.input.left {
            self.heading -= TURN_RATE;
        }
        if self.input.right {
            self.heading += TURN_RATE;
        }

        let velocity = self.current_speed();
        apply_snake_step(&mut self.snake, self.heading, velocity);
        // Counter-rotate everything so the head stays camera-anchored and the
        // sphere appears to roll underneath it.
        self.rotate_world(self.heading, -velocity);

        match self.check_collisions() {
            Some(Collision::Tail) => self.end(),
            Some(Collision::Pellet) => self.eat_pellet(),
            None => {}
        }
    }

    fn current_speed(&self) -> f64 {
        let boost = (self.score as f64 * SCORE_BOOST_PER_POINT).min(MAX_SPEED_BOOST);
        BASE_SPEED * (1.0 + boost)
    }

    fn rotate_world(&mut self, heading: f64, angle: f64) {
        if let Some(pellet) = self.pellet.as_mut() {
            rotate_about_heading(pellet, heading, angle);
        }
        for point in self.grid.iter_mut() {
            rotate_about_heading(point, heading, angle);
        }
        for node in self.snake.iter_mut() {
            rotate_about_heading(&mut node.pos, heading, angle);
            for queued in node.history.iter_mut() {
                rotate_about_heading(queued, heading, angle);
            }
        }
    }

    fn check_collisions(&self) -> Option<Collision> {
        let head = self.snake.first()?.pos;

        // Index 1 is always within collision range of the head by
        // construction, so the self check starts at index 2.
        for node in self.snake.iter().skip(2) {
            if distance(head, node.pos) < COLLISION_DISTANCE {
                return Some(Collision::Tail);
            }
        }

        if let Some(pellet) = self.pellet {
            if distance(head, pellet) < COLLISION_DISTANCE {
                return Some(Collision::Pellet);
            }
        }

        None
    }

    fn eat_pellet(&mut self) {
        add_snake_node(&mut self.snake);
        self.score += 1;
        self.target_globe_scale =
            (self.target_globe_scale + GLOBE_GROWTH_PER_ORB).min(MAX_GLOBE_SCALE);
        self.pellet = Some(spawn_pellet(&self.snake));
        debug!(score = self.score, length = self.snake.len(), "pellet eaten");
    }

    fn end(&mut self) {
        self.phase = Phase::GameOver;
        info!(score = self.score, length = self.snake.len(), "game over");
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn heading(&self) -> f64 {
        self.heading
    }

    pub fn globe_scale(&self) -> f64 {
        self.globe_scale
    }

    pub fn snake(&self) -> &[SnakeNode] {
        &self.snake
    }

    pub fn grid(&self) -> &[Point] {
        &self.grid
    }

    pub fn pellet(&self) -> Option<Point> {
        self.pellet
    }

    pub fn status(&self) -> &'static str {
        match self.phase {
            Phase::Ready => "Ready",
            Phase::Running => "Live",
            Phase::Paused => "Paused",
            Phase::GameOver => "Game Over",
        }
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}
