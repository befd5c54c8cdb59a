use super::types::Point;

pub fn point_from_spherical(theta: f64, phi: f64) -> Point {
  let sin_phi = phi.sin();
  Point {
    x: theta.cos() * sin_phi,
    y: theta.sin() * sin_phi,
    z: phi.cos(),
  }
}

pub fn rotate_z(point: &mut Point, angle: f64) {
  let cos_a = angle.cos();
  let sin_a = angle.sin();
  let x = point.x;
  let y = point.y;
  point.x = cos_a * x - sin_a * y;
  point.y = sin_a * x + cos_a * y;
}

pub fn rotate_y(point: &mut Point, angle: f64) {
  let cos_a = angle.cos();
  let sin_a = angle.sin();
  let x = point.x;
  let z = point.z;
  point.x = cos_a * x + sin_a * z;
  point.z = -sin_a * x + cos_a * z;
}

/// Rotation about the axis selected by a heading angle: the frame is swung by
/// `-heading` around Z, stepped by `angle` around Y, then swung back.
pub fn rotate_about_heading(point: &mut Point, heading: f64, angle: f64) {
  rotate_z(point, -heading);
  rotate_y(point, angle);
  rotate_z(point, heading);
}

pub fn distance(a: Point, b: Point) -> f64 {
  let dx = a.x - b.x;
  let dy = a.y - b.y;
  let dz = a.z - b.z;
  (dx * dx + dy * dy + dz * dz).sqrt()
}

#[cfg(test)]
mod tests {
  use super::*;

  const EPSILON: f64 = 1e-12;

  #[test]
  fn rotate_z_inverse_restores_point() {
    let original = point_from_spherical(0.7, 1.9);
    let mut point = original;
    rotate_z(&mut point, 1.234);
    rotate_z(&mut point, -1.234);
    assert!(distance(point, original) < EPSILON);
  }

  #[test]
  fn heading_rotation_inverse_restores_point() {
    let original = point_from_spherical(2.3, 0.4);
    let mut point = original;
    rotate_about_heading(&mut point, 0.85, 0.31);
    rotate_about_heading(&mut point, 0.85, -0.31);
    assert!(distance(point, original) < EPSILON);
  }

  #[test]
  fn rotations_preserve_norm_over_many_ticks() {
    let mut point = point_from_spherical(1.1, 2.6);
    for _ in 0..1000 {
      rotate_about_heading(&mut point, 0.42, 0.01);
    }
    let norm = (point.x * point.x + point.y * point.y + point.z * point.z).sqrt();
    assert!((norm - 1.0).abs() < 1e-9);
  }

  #[test]
  fn distance_to_self_is_zero() {
    let point = point_from_spherical(0.2, 2.8);
    assert_eq!(distance(point, point), 0.0);
  }

  #[test]
  fn distance_is_symmetric() {
    let a = point_from_spherical(0.5, 1.0);
    let b = point_from_spherical(4.0, 2.0);
    assert_eq!(distance(a, b), distance(b, a));
  }
}
