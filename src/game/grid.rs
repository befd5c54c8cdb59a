use super::constants::GRID_SIZE;
use super::math::point_from_spherical;
use super::types::Point;
use std::f64::consts::PI;

/// Static lattice sampling the sphere, rebuilt wholesale at each reset and
/// used only as a rendering reference.
pub fn build_grid() -> Vec<Point> {
    let n = GRID_SIZE;
    let mut points = Vec::with_capacity(n * n);
    for i in 0..n {
        for j in 0..n {
            points.push(point_from_spherical(
                (i as f64 / n as f64) * PI * 2.0,
                (j as f64 / n as f64) * PI,
            ));
        }
    }
    points
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_covers_the_full_lattice() {
        let grid = build_grid();
        assert_eq!(grid.len(), GRID_SIZE * GRID_SIZE);
        for point in &grid {
            let norm = (point.x * point.x + point.y * point.y + point.z * point.z).sqrt();
            assert!((norm - 1.0).abs() < 1e-12);
        }
    }
}
