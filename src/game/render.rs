use super::constants::{CAMERA_Z, FOCAL_FACTOR, GRID_DOT_RADIUS, NODE_ANGLE, PELLET_RADIUS_FACTOR};
use super::session::GameSession;
use super::types::Point;
use serde::Serialize;

pub const GRID_COLOR: Color = Color {
    r: 74,
    g: 110,
    b: 120,
};
pub const SNAKE_COLOR: Color = Color {
    r: 42,
    g: 157,
    b: 143,
};
pub const PELLET_COLOR: Color = Color {
    r: 255,
    g: 138,
    b: 76,
};

#[derive(Debug, Clone, Copy)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn center_x(&self) -> f64 {
        self.width / 2.0
    }

    pub fn center_y(&self) -> f64 {
        self.height / 2.0
    }

    pub fn focal_length(&self) -> f64 {
        self.width.min(self.height) * FOCAL_FACTOR
    }
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Projected {
    pub x: f64,
    pub y: f64,
    pub scale: f64,
    pub depth: f64,
}

/// Perspective-divide projection from sphere space to screen space. The depth
/// value runs from 1.0 at the near face to 0.0 at the far face and drives the
/// alpha shading.
pub fn project(point: Point, viewport: &Viewport, globe_scale: f64) -> Projected {
    let z = point.z + CAMERA_Z;
    let scale = viewport.focal_length() * globe_scale / z;
    Projected {
        x: viewport.center_x() + point.x * scale,
        y: viewport.center_y() + point.y * scale,
        scale,
        depth: 1.0 - (z - (CAMERA_Z - 1.0)) / 2.0,
    }
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

#[derive(Debug, Clone, Serialize)]
pub struct Circle {
    pub x: f64,
    pub y: f64,
    pub radius: f64,
    pub color: Color,
    pub alpha: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct Frame {
    pub circles: Vec<Circle>,
    pub score: u32,
    pub status: &'static str,
}

/// Consumer of composed frames; the drawable-2D-context seam.
pub trait FrameSink {
    fn present(&mut self, frame: &Frame);
}

fn circle(point: Point, radius: f64, color: Color, viewport: &Viewport, globe_scale: f64) -> Circle {
    let projected = project(point, viewport, globe_scale);
    Circle {
        x: projected.x,
        y: projected.y,
        radius: radius * projected.scale,
        color,
        alpha: projected.depth.clamp(0.05, 1.0),
    }
}

/// Builds the per-frame draw list: grid dots first, snake nodes tail to head,
/// then the pellet on top.
pub fn compose_frame(session: &GameSession, viewport: &Viewport) -> Frame {
    let globe_scale = session.globe_scale();
    let mut circles = Vec::with_capacity(session.grid().len() + session.snake().len() + 1);

    for point in session.grid() {
        circles.push(circle(*point, GRID_DOT_RADIUS, GRID_COLOR, viewport, globe_scale));
    }
    for node in session.snake().iter().rev() {
        circles.push(circle(node.pos, NODE_ANGLE, SNAKE_COLOR, viewport, globe_scale));
    }
    if let Some(pellet) = session.pellet() {
        circles.push(circle(
            pellet,
            NODE_ANGLE * PELLET_RADIUS_FACTOR,
            PELLET_COLOR,
            viewport,
            globe_scale,
        ));
    }

    Frame {
        circles,
        score: session.score(),
        status: session.status(),
    }
}
