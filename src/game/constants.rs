use std::f64::consts::PI;

pub const NODE_ANGLE: f64 = PI / 60.0;
pub const HISTORY_SIZE: usize = 10;
pub const STARTING_DIRECTION: f64 = PI / 4.0;
pub const STARTING_LENGTH: usize = 9;
pub const GRID_SIZE: usize = 36;
pub const FIXED_DELTA_MS: f64 = 16.0;
pub const MAX_CATCHUP_STEPS: f64 = 5.0;
pub const CAMERA_Z: f64 = 2.4;
pub const TURN_RATE: f64 = 0.08;
pub const BASE_SPEED: f64 = (NODE_ANGLE * 2.0) / ((HISTORY_SIZE + 1) as f64);
pub const SCORE_BOOST_PER_POINT: f64 = 0.03;
pub const MAX_SPEED_BOOST: f64 = 0.6;
// 2 * sin(NODE_ANGLE)
pub const COLLISION_DISTANCE: f64 = 0.10467191248588766;
pub const PELLET_CLEARANCE: f64 = COLLISION_DISTANCE * 1.4;
pub const MAX_SPAWN_ATTEMPTS: usize = 200;
pub const INITIAL_GLOBE_SCALE: f64 = 0.85;
pub const GLOBE_GROWTH_PER_ORB: f64 = 0.015;
pub const GLOBE_SCALE_LERP: f64 = 0.04;
pub const MAX_GLOBE_SCALE: f64 = 1.15;
pub const FOCAL_FACTOR: f64 = 0.7;
pub const GRID_DOT_RADIUS: f64 = 0.005;
pub const PELLET_RADIUS_FACTOR: f64 = 1.15;
