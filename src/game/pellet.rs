use super::constants::{MAX_SPAWN_ATTEMPTS, PELLET_CLEARANCE};
use super::math::{distance, point_from_spherical};
use super::types::{Point, SnakeNode};
use rand::Rng;
use std::f64::consts::PI;

fn random_surface_point(rng: &mut impl Rng) -> Point {
    point_from_spherical(rng.gen::<f64>() * PI * 2.0, rng.gen::<f64>() * PI)
}

/// Rejection-samples a pellet position clear of every snake node. After the
/// attempt budget runs out the last resort is an unconditional draw, accepting
/// a possibly overlapping placement rather than failing.
pub fn spawn_pellet_with_rng(rng: &mut impl Rng, snake: &[SnakeNode]) -> Point {
    for _ in 0..MAX_SPAWN_ATTEMPTS {
        let candidate = random_surface_point(rng);
        let clear = snake
            .iter()
            .all(|node| distance(candidate, node.pos) >= PELLET_CLEARANCE);
        if clear {
            return candidate;
        }
    }
    random_surface_point(rng)
}

pub fn spawn_pellet(snake: &[SnakeNode]) -> Point {
    spawn_pellet_with_rng(&mut rand::thread_rng(), snake)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::snake::create_snake;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn spawn_always_yields_a_surface_point() {
        let mut rng = StdRng::seed_from_u64(7);
        let pellet = spawn_pellet_with_rng(&mut rng, &[]);
        let norm = (pellet.x * pellet.x + pellet.y * pellet.y + pellet.z * pellet.z).sqrt();
        assert!((norm - 1.0).abs() < 1e-12);
    }

    #[test]
    fn spawn_keeps_clearance_from_every_node() {
        let mut rng = StdRng::seed_from_u64(42);
        let snake = create_snake();
        for _ in 0..50 {
            let pellet = spawn_pellet_with_rng(&mut rng, &snake);
            for node in &snake {
                assert!(distance(pellet, node.pos) >= PELLET_CLEARANCE);
            }
        }
    }
}
