//! Scalar fields for isosurface extraction.
//!
//! Extraction pulls samples on demand: the marcher asks for `f(x, y, z)`
//! at cell corners and never stores a volume. Any implementor of
//! [`ScalarField`] plugs in unchanged; the built-in fields are
//! deterministic analytic surfaces that are easy to verify in tests and
//! demos.

use glam::Vec3A;

/// A scalar field `f(x, y, z)` over world space.
///
/// The surface is the zero level set: `f < 0` is inside, `f >= 0` is
/// outside (zero itself counts as outside). Implementations must be
/// pure so extraction stays deterministic, and `Send + Sync` so one
/// field can be shared across extraction workers.
pub trait ScalarField: Send + Sync {
  /// Sample the field at a world-space point.
  fn evaluate(&self, x: f32, y: f32, z: f32) -> f32;
}

impl ScalarField for Box<dyn ScalarField> {
  fn evaluate(&self, x: f32, y: f32, z: f32) -> f32 {
    (**self).evaluate(x, y, z)
  }
}

/// Plain functions and closures are fields:
/// `|x, y, z| x * x + y * y + z * z - 1.0`.
impl<F> ScalarField for F
where
  F: Fn(f32, f32, f32) -> f32 + Send + Sync,
{
  fn evaluate(&self, x: f32, y: f32, z: f32) -> f32 {
    self(x, y, z)
  }
}

/// Sphere field, the default demo surface.
///
/// Uses the squared form `|p - center|² - radius²`. Its zero set is the
/// same sphere as the true signed distance; only the gradient magnitude
/// differs, which extraction does not depend on.
#[derive(Clone)]
pub struct SphereField {
  /// Center of the sphere in world coordinates
  pub center: [f32; 3],
  /// Radius of the sphere
  pub radius: f32,
}

impl Default for SphereField {
  fn default() -> Self {
    Self {
      center: [0.0, 0.0, 0.0],
      radius: 0.6,
    }
  }
}

impl SphereField {
  pub fn new(radius: f32) -> Self {
    Self {
      center: [0.0, 0.0, 0.0],
      radius,
    }
  }

  pub fn with_center(mut self, center: [f32; 3]) -> Self {
    self.center = center;
    self
  }

  pub fn with_radius(mut self, radius: f32) -> Self {
    self.radius = radius;
    self
  }
}

impl ScalarField for SphereField {
  fn evaluate(&self, x: f32, y: f32, z: f32) -> f32 {
    let d = Vec3A::new(x, y, z) - Vec3A::from_array(self.center);
    d.length_squared() - self.radius * self.radius
  }
}

/// Tilted plane field.
///
/// A plane tilted around the Z axis, passing through `y = height` at
/// `x = 0`. Useful for predictable, cell-spanning surfaces in tests.
///
/// Field: `(y - height) * cos(angle) - x * sin(angle)`
#[derive(Clone)]
pub struct PlaneField {
  /// Height offset of the plane (default: 0.0)
  pub height: f32,
  /// Tilt angle in radians (default: π/4 = 45°)
  pub angle: f32,
}

impl Default for PlaneField {
  fn default() -> Self {
    Self {
      height: 0.0,
      angle: std::f32::consts::FRAC_PI_4, // 45 degrees
    }
  }
}

impl PlaneField {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn with_height(mut self, height: f32) -> Self {
    self.height = height;
    self
  }

  pub fn with_angle_degrees(mut self, degrees: f32) -> Self {
    self.angle = degrees.to_radians();
    self
  }
}

impl ScalarField for PlaneField {
  fn evaluate(&self, x: f32, y: f32, _z: f32) -> f32 {
    (y - self.height) * self.angle.cos() - x * self.angle.sin()
  }
}

/// Axis-aligned box field (exact signed distance).
#[derive(Clone)]
pub struct BoxField {
  /// Center of the box
  pub center: [f32; 3],
  /// Half-extents (half-size in each dimension)
  pub half_extents: [f32; 3],
}

impl Default for BoxField {
  fn default() -> Self {
    Self {
      center: [0.0, 0.0, 0.0],
      half_extents: [0.5, 0.5, 0.5],
    }
  }
}

impl BoxField {
  pub fn new(half_extents: [f32; 3]) -> Self {
    Self {
      center: [0.0, 0.0, 0.0],
      half_extents,
    }
  }

  pub fn with_center(mut self, center: [f32; 3]) -> Self {
    self.center = center;
    self
  }
}

impl ScalarField for BoxField {
  fn evaluate(&self, x: f32, y: f32, z: f32) -> f32 {
    let p = Vec3A::new(x, y, z) - Vec3A::from_array(self.center);
    let q = p.abs() - Vec3A::from_array(self.half_extents);

    let outside = q.max(Vec3A::ZERO).length();
    let inside = q.max_element().min(0.0);
    outside + inside
  }
}

/// Metaball (blobby) field.
///
/// Organic blob shapes from summed spherical influences. Each ball
/// contributes `strength * radius² / distance²`; the surface sits where
/// the combined influence equals the threshold.
#[derive(Clone)]
pub struct MetaballsField {
  /// Individual metaballs
  pub balls: Vec<Metaball>,
  /// Influence threshold for the surface (default: 1.0)
  pub threshold: f32,
}

/// A single metaball influence.
#[derive(Clone, Copy)]
pub struct Metaball {
  /// Center position in world coordinates
  pub center: [f32; 3],
  /// Radius of influence
  pub radius: f32,
  /// Strength of the influence (typically 1.0)
  pub strength: f32,
}

impl MetaballsField {
  /// Create a metaballs field with the given balls and threshold.
  pub fn new(balls: Vec<Metaball>, threshold: f32) -> Self {
    Self { balls, threshold }
  }

  /// Create a random arrangement of metaballs using a seed.
  /// Generates `count` metaballs scattered within `[-extent, extent]³`.
  pub fn random(seed: u32, count: usize, extent: f32) -> Self {
    let mut balls = Vec::with_capacity(count);
    let mut rng = XorShift32::new(seed);

    for _ in 0..count {
      let x = (rng.next_f32() * 2.0 - 1.0) * extent;
      let y = (rng.next_f32() * 2.0 - 1.0) * extent;
      let z = (rng.next_f32() * 2.0 - 1.0) * extent;

      // Random radius [extent * 0.1, extent * 0.4]
      let radius = extent * (0.1 + rng.next_f32() * 0.3);

      balls.push(Metaball {
        center: [x, y, z],
        radius,
        strength: 1.0,
      });
    }

    Self {
      balls,
      threshold: 1.0,
    }
  }
}

impl ScalarField for MetaballsField {
  fn evaluate(&self, x: f32, y: f32, z: f32) -> f32 {
    let p = Vec3A::new(x, y, z);

    let mut influence = 0.0;
    for ball in &self.balls {
      let dist_sq = (p - Vec3A::from_array(ball.center)).length_squared();
      let r_sq = ball.radius * ball.radius;

      // Near the center the falloff blows up; clamp to a large finite
      // contribution instead of dividing by ~zero
      if dist_sq < r_sq * 0.01 {
        influence += ball.strength * 100.0;
      } else {
        influence += ball.strength * r_sq / dist_sq;
      }
    }

    // Negative inside (influence above threshold), positive outside
    self.threshold - influence
  }
}

/// Simple xorshift32 PRNG for deterministic random generation.
struct XorShift32 {
  state: u32,
}

impl XorShift32 {
  fn new(seed: u32) -> Self {
    // Ensure non-zero state
    Self {
      state: if seed == 0 { 1 } else { seed },
    }
  }

  fn next(&mut self) -> u32 {
    let mut x = self.state;
    x ^= x << 13;
    x ^= x >> 17;
    x ^= x << 5;
    self.state = x;
    x
  }

  fn next_f32(&mut self) -> f32 {
    self.next() as f32 / u32::MAX as f32
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  // Evaluate through the trait to exercise the blanket impls
  fn eval<F: ScalarField>(field: &F, x: f32, y: f32, z: f32) -> f32 {
    field.evaluate(x, y, z)
  }

  fn crosses_default_grid<F: ScalarField>(field: &F) -> bool {
    let mut has_positive = false;
    let mut has_negative = false;
    for xi in 0..8 {
      for yi in 0..8 {
        for zi in 0..8 {
          let to_world = |i: i32| i as f32 / 3.5 - 1.0;
          let v = field.evaluate(to_world(xi), to_world(yi), to_world(zi));
          has_positive |= v > 0.0;
          has_negative |= v < 0.0;
        }
      }
    }
    has_positive && has_negative
  }

  #[test]
  fn sphere_sign_convention() {
    let sphere = SphereField::default();

    assert!(sphere.evaluate(0.0, 0.0, 0.0) < 0.0, "Center should be inside");
    assert!(sphere.evaluate(1.0, 1.0, 1.0) > 0.0, "Far corner should be outside");
    assert!(sphere.evaluate(0.59, 0.0, 0.0) < 0.0);
    assert!(sphere.evaluate(0.61, 0.0, 0.0) > 0.0);
  }

  #[test]
  fn sphere_surface_exists() {
    assert!(crosses_default_grid(&SphereField::default()));
  }

  #[test]
  fn sphere_off_center() {
    let sphere = SphereField::new(0.3).with_center([0.5, 0.0, 0.0]);

    assert!(sphere.evaluate(0.5, 0.0, 0.0) < 0.0);
    assert!(sphere.evaluate(0.0, 0.0, 0.0) > 0.0);
  }

  #[test]
  fn tilted_plane_splits_grid() {
    let plane = PlaneField::default();

    assert!(crosses_default_grid(&plane));
    // 45° tilt through the origin: y = x on the surface
    assert!(plane.evaluate(0.0, 0.5, 0.0) > 0.0);
    assert!(plane.evaluate(0.0, -0.5, 0.0) < 0.0);
  }

  #[test]
  fn box_sign_convention() {
    let field = BoxField::default();

    assert!(field.evaluate(0.0, 0.0, 0.0) < 0.0, "Center should be inside");
    assert!(field.evaluate(0.9, 0.9, 0.9) > 0.0, "Corner should be outside");
    assert!(crosses_default_grid(&field));
  }

  #[test]
  fn metaballs_creates_surface() {
    let field = MetaballsField::random(42, 5, 0.6);

    assert!(crosses_default_grid(&field));
    // Inside any ball center the influence dwarfs the threshold
    let center = field.balls[0].center;
    assert!(field.evaluate(center[0], center[1], center[2]) < 0.0);
    assert!(field.evaluate(50.0, 50.0, 50.0) > 0.0);
  }

  #[test]
  fn metaballs_deterministic() {
    // Same seed should produce the same arrangement
    let field1 = MetaballsField::random(123, 3, 1.0);
    let field2 = MetaballsField::random(123, 3, 1.0);

    assert_eq!(field1.balls.len(), field2.balls.len());
    for (b1, b2) in field1.balls.iter().zip(field2.balls.iter()) {
      assert_eq!(b1.center, b2.center);
      assert_eq!(b1.radius, b2.radius);
    }
  }

  #[test]
  fn closures_are_fields() {
    let field = |x: f32, y: f32, z: f32| x + y + z - 0.5;

    assert_eq!(eval(&field, 0.5, 0.0, 0.0), 0.0);
    assert!(eval(&field, 1.0, 1.0, 1.0) > 0.0);
  }

  #[test]
  fn boxed_fields_sample_through_the_box() {
    let boxed: Box<dyn ScalarField> = Box::new(SphereField::default());

    assert!(eval(&boxed, 0.0, 0.0, 0.0) < 0.0);
    assert!(eval(&boxed, 1.0, 1.0, 1.0) > 0.0);
  }
}
