use super::constants::{NODE_ANGLE, STARTING_DIRECTION, STARTING_LENGTH};
use super::math::rotate_about_heading;
use super::types::{Point, PositionHistory, SnakeNode};

/// Appends one node at the tail. The seed position is the tail's delayed
/// history entry when one exists; before any history has accumulated the tail
/// position is instead rotated two node-angles backwards along the starting
/// heading, which places the node a plausible arc-distance behind the tail.
pub fn add_snake_node(snake: &mut Vec<SnakeNode>) {
    let mut node = SnakeNode {
        pos: Point {
            x: 0.0,
            y: 0.0,
            z: -1.0,
        },
        history: PositionHistory::new(),
    };

    if let Some(tail) = snake.last() {
        if let Some(delayed) = tail.history.oldest() {
            node.pos = delayed;
        } else {
            node.pos = tail.pos;
            rotate_about_heading(&mut node.pos, STARTING_DIRECTION, -NODE_ANGLE * 2.0);
        }
    }

    snake.push(node);
}

/// One movement tick. The head rotates about the current heading axis; every
/// trailing node adopts the carry evicted from its predecessor's history, or
/// keeps rotating along the starting heading while that history is still
/// filling up. Each node records its pre-step position afterwards, so a
/// trailing node replays its predecessor's path with a fixed delay.
pub fn apply_snake_step(snake: &mut [SnakeNode], heading: f64, velocity: f64) {
    let mut carry: Option<Point> = None;

    for (index, node) in snake.iter_mut().enumerate() {
        let old_position = node.pos;

        if index == 0 {
            rotate_about_heading(&mut node.pos, heading, velocity);
        } else if let Some(next) = carry {
            node.pos = next;
        } else {
            rotate_about_heading(&mut node.pos, STARTING_DIRECTION, velocity);
        }

        carry = node.history.record(old_position);
    }
}

pub fn create_snake() -> Vec<SnakeNode> {
    let mut snake = Vec::with_capacity(STARTING_LENGTH);
    for _ in 0..STARTING_LENGTH {
        add_snake_node(&mut snake);
    }
    snake
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::constants::{BASE_SPEED, HISTORY_SIZE};
    use crate::game::math::distance;

    #[test]
    fn add_snake_node_offsets_the_new_node_behind_the_tail() {
        let mut snake = Vec::new();
        add_snake_node(&mut snake);
        add_snake_node(&mut snake);

        assert_eq!(snake.len(), 2);
        let gap = distance(snake[0].pos, snake[1].pos);
        assert!(gap > 1e-6);
        // Chord of a 2 * NODE_ANGLE arc on the unit sphere.
        let expected = 2.0 * (NODE_ANGLE).sin();
        assert!((gap - expected).abs() < 1e-9);
    }

    #[test]
    fn add_snake_node_prefers_the_tail_history_entry() {
        let mut snake = create_snake();
        for _ in 0..(HISTORY_SIZE + 1) {
            apply_snake_step(&mut snake, STARTING_DIRECTION, BASE_SPEED);
        }
        let delayed = snake
            .last()
            .and_then(|tail| tail.history.oldest())
            .expect("tail history full after warm-up");

        add_snake_node(&mut snake);

        let added = snake.last().expect("node appended");
        assert!(distance(added.pos, delayed) < 1e-12);
        assert_eq!(added.history.populated(), 0);
    }

    #[test]
    fn head_step_rotates_by_the_requested_angle() {
        let mut snake = Vec::new();
        add_snake_node(&mut snake);
        let before = snake[0].pos;

        apply_snake_step(&mut snake, 0.9, BASE_SPEED);

        let after = snake[0].pos;
        let dot = before.x * after.x + before.y * after.y + before.z * after.z;
        let moved = dot.clamp(-1.0, 1.0).acos();
        assert!((moved - BASE_SPEED).abs() < 1e-9);
    }

    #[test]
    fn trailing_node_replays_the_head_with_history_delay() {
        let mut snake = Vec::new();
        add_snake_node(&mut snake);
        add_snake_node(&mut snake);

        let mut head_track = Vec::new();
        let mut follower_track = Vec::new();
        for _ in 0..40 {
            apply_snake_step(&mut snake, 0.6, 0.01);
            head_track.push(snake[0].pos);
            follower_track.push(snake[1].pos);
        }

        // The carry popped at tick t was pushed HISTORY_SIZE ticks earlier and
        // holds the head position after tick t - HISTORY_SIZE - 1.
        for tick in (HISTORY_SIZE + 1)..head_track.len() {
            let replayed = follower_track[tick];
            let source = head_track[tick - HISTORY_SIZE - 1];
            assert!(distance(replayed, source) < 1e-12);
        }
    }

    #[test]
    fn create_snake_has_starting_length_and_unset_histories() {
        let snake = create_snake();
        assert_eq!(snake.len(), STARTING_LENGTH);
        for node in &snake {
            assert_eq!(node.history.populated(), 0);
        }
    }
}
