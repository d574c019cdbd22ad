//! Rotation-aware intrinsic width heuristic
//!
//! A rotated element's width on the page depends on the unrotated width it
//! is laid out at. Modeling the element's occupied area as invariant to
//! that choice (a good approximation for non-reflowing content), the
//! on-page width of unrotated width `x` is
//!
//! ```text
//! w(x) = x·cos(θ) + (area / x)·sin(θ)
//! ```
//!
//! which on `(0, ∞)` has a single minimum at `x0 = sqrt(area·sin/cos)`.
//! [`RotationMinMaxWidth::calculate`] analyzes this curve over the
//! element's own unrotated width interval, optionally intersected with the
//! interval where `w(x)` stays under an available-width ceiling, and
//! reports the reachable min/max rotated widths together with the
//! unrotated widths and rotated heights that produce them.
//!
//! All arithmetic here is `f64`: the quadratic branch selection is
//! sensitive to noise, and trig values within `1e-10` of 0 or 1 are
//! snapped exactly so near-axis angles take the cheap linear paths.

use crate::geometry::Size;
use crate::layout::min_max_width::MinMaxWidth;

const TRIG_EPSILON: f64 = 1.0e-10;

/// Width of an already-sized rectangle after rotation by `angle` radians.
pub fn rotated_width(size: Size, angle: f64) -> f64 {
  let (sin, cos) = snapped_trig(angle);
  f64::from(size.width) * cos + f64::from(size.height) * sin
}

fn snapped_trig(angle: f64) -> (f64, f64) {
  (snap(angle.sin().abs()), snap(angle.cos().abs()))
}

fn snap(value: f64) -> f64 {
  if value < TRIG_EPSILON {
    0.0
  } else if (value - 1.0).abs() < TRIG_EPSILON {
    1.0
  } else {
    value
  }
}

// The curve w(x) = x·cos + (area/x)·sin and its companions.
struct WidthCurve {
  sin: f64,
  cos: f64,
  area: f64,
}

impl WidthCurve {
  fn new(angle: f64, area: f64) -> Self {
    let (sin, cos) = snapped_trig(angle);
    Self { sin, cos, area }
  }

  fn width(&self, x: f64) -> f64 {
    x * self.cos + (self.area / x) * self.sin
  }

  fn height(&self, x: f64) -> f64 {
    x * self.sin + (self.area / x) * self.cos
  }

  /// The unique minimum of the curve on (0, ∞). The degenerate angles are
  /// folded in as interval endpoints: `sin = 0` makes the curve strictly
  /// increasing (minimum at the left edge of any interval), `cos = 0`
  /// strictly decreasing (minimum at the right edge).
  fn critical_point(&self) -> f64 {
    if self.sin == 0.0 {
      0.0
    } else if self.cos == 0.0 {
      f64::INFINITY
    } else {
      (self.area * self.sin / self.cos).sqrt()
    }
  }

  /// The interval of unrotated widths for which `w(x) <= available`, from
  /// the roots of `cos·x² − available·x + area·sin = 0`. `None` when no
  /// unrotated width satisfies the ceiling.
  fn ceiling_interval(&self, available: f64) -> Option<(f64, f64)> {
    if self.cos == 0.0 {
      // w(x) = (area/x)·sin: ceiling satisfied from a lower bound up.
      return Some((self.area * self.sin / available, f64::INFINITY));
    }
    if self.sin == 0.0 {
      // w(x) = x·cos: ceiling satisfied up to an upper bound.
      return Some((0.0, available / self.cos));
    }

    let discriminant = available * available - 4.0 * self.cos * self.area * self.sin;
    if discriminant < 0.0 {
      return None;
    }
    let sqrt_d = discriminant.sqrt();
    Some((
      (available - sqrt_d) / (2.0 * self.cos),
      (available + sqrt_d) / (2.0 * self.cos),
    ))
  }
}

/// Min/max rotated widths of an element, with the unrotated widths that
/// realize them.
///
/// # Examples
///
/// ```
/// use pageflow::{MinMaxWidth, RotationMinMaxWidth};
///
/// let unrotated = MinMaxWidth::new(50.0, 200.0, 0.0, f32::INFINITY);
/// let rotated = RotationMinMaxWidth::calculate(0.0, 10_000.0, &unrotated);
/// // Rotation by zero is a no-op on width.
/// assert_eq!(rotated.widths.min_width(), 50.0);
/// assert_eq!(rotated.widths.max_width(), 200.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct RotationMinMaxWidth {
  /// The reachable rotated widths, min and max
  pub widths: MinMaxWidth,
  /// Unrotated width producing the minimum rotated width
  pub min_width_origin: f64,
  /// Unrotated width producing the maximum rotated width
  pub max_width_origin: f64,
  /// Rotated height at the min-width origin
  pub min_width_height: f64,
  /// Rotated height at the max-width origin
  pub max_width_height: f64,
}

impl RotationMinMaxWidth {
  /// Analyzes the rotated-width curve over the element's own unrotated
  /// width interval.
  ///
  /// `angle` is in radians; `area` is the element's occupied area, assumed
  /// invariant to the chosen unrotated width.
  pub fn calculate(angle: f64, area: f64, unrotated: &MinMaxWidth) -> Self {
    let curve = WidthCurve::new(angle, area);
    let x_min = f64::from(unrotated.min_width());
    let x_max = f64::from(unrotated.max_width());
    Self::from_interval(&curve, x_min, x_max)
  }

  /// Like [`RotationMinMaxWidth::calculate`], but additionally constrains
  /// the unrotated width to values whose rotated width stays at or under
  /// `available_width`. Returns `None` when no unrotated width can satisfy
  /// the ceiling at all; when the ceiling interval and the element's own
  /// interval merely fail to overlap, the result degenerates to the single
  /// boundary point instead, since a slightly-too-wide approximation beats
  /// a hard failure.
  pub fn calculate_with_available_width(
    angle: f64,
    area: f64,
    unrotated: &MinMaxWidth,
    available_width: f64,
  ) -> Option<Self> {
    let curve = WidthCurve::new(angle, area);
    let (ceiling_lo, ceiling_hi) = curve.ceiling_interval(available_width)?;

    let x_min = f64::from(unrotated.min_width()).max(ceiling_lo);
    let x_max = f64::from(unrotated.max_width()).min(ceiling_hi);

    if x_max < x_min {
      return Some(Self::from_interval(&curve, x_min, x_min));
    }
    Some(Self::from_interval(&curve, x_min, x_max))
  }

  fn from_interval(curve: &WidthCurve, x_min: f64, x_max: f64) -> Self {
    let x0 = curve.critical_point();

    let min_origin = if x0 < x_min {
      // Minimum lies left of the interval: the curve only climbs here.
      x_min
    } else if x0 > x_max {
      // Minimum lies right of the interval: the curve only falls here.
      x_max
    } else {
      x0
    };

    let max_origin = if curve.width(x_min) >= curve.width(x_max) {
      x_min
    } else {
      x_max
    };

    let min_width = curve.width(min_origin);
    let max_width = curve.width(max_origin);

    Self {
      widths: MinMaxWidth::new(min_width as f32, max_width as f32, 0.0, f32::INFINITY),
      min_width_origin: min_origin,
      max_width_origin: max_origin,
      min_width_height: curve.height(min_origin),
      max_width_height: curve.height(max_origin),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  const AREA: f64 = 10_000.0;

  fn unrotated(min: f32, max: f32) -> MinMaxWidth {
    MinMaxWidth::new(min, max, 0.0, f32::INFINITY)
  }

  // Loose enough to absorb the f32 round-trip on stored widths.
  fn assert_close(a: f64, b: f64) {
    assert!((a - b).abs() < 1e-3, "{a} !~ {b}");
  }

  #[test]
  fn zero_rotation_is_a_no_op_on_width() {
    let result = RotationMinMaxWidth::calculate(0.0, AREA, &unrotated(50.0, 200.0));
    assert_close(f64::from(result.widths.min_width()), 50.0);
    assert_close(f64::from(result.widths.max_width()), 200.0);
    assert_close(result.min_width_origin, 50.0);
    assert_close(result.max_width_origin, 200.0);
  }

  #[test]
  fn quarter_turn_swaps_width_for_height() {
    // cos = 0: width comes entirely from area/x, so the curve falls with x.
    let result = RotationMinMaxWidth::calculate(std::f64::consts::FRAC_PI_2, AREA, &unrotated(50.0, 200.0));
    assert_close(result.min_width_origin, 200.0);
    assert_close(f64::from(result.widths.min_width()), AREA / 200.0);
    assert_close(result.max_width_origin, 50.0);
    assert_close(f64::from(result.widths.max_width()), AREA / 50.0);
  }

  #[test]
  fn interior_critical_point_is_the_minimum() {
    // At 45° the critical point is sqrt(area) = 100, inside [50, 400].
    let result =
      RotationMinMaxWidth::calculate(std::f64::consts::FRAC_PI_4, AREA, &unrotated(50.0, 400.0));
    assert_close(result.min_width_origin, 100.0);
    assert_close(f64::from(result.widths.min_width()), 100.0 * std::f64::consts::SQRT_2);
    // Max sits at the endpoint with the larger width, here x = 400.
    assert_close(result.max_width_origin, 400.0);
  }

  #[test]
  fn critical_point_left_of_interval_means_min_at_left_edge() {
    // x0 = 100 < 150: the curve is increasing across [150, 400].
    let result =
      RotationMinMaxWidth::calculate(std::f64::consts::FRAC_PI_4, AREA, &unrotated(150.0, 400.0));
    assert_close(result.min_width_origin, 150.0);
    assert_close(result.max_width_origin, 400.0);
  }

  #[test]
  fn ceiling_narrows_the_interval_to_the_quadratic_roots() {
    let result = RotationMinMaxWidth::calculate_with_available_width(
      std::f64::consts::FRAC_PI_4,
      AREA,
      &unrotated(50.0, 400.0),
      160.0,
    )
    .expect("ceiling is satisfiable");

    // Both roots of the quadratic realize exactly the ceiling width.
    assert_close(f64::from(result.widths.max_width()), 160.0);
    // The critical point stays inside the narrowed interval.
    assert_close(result.min_width_origin, 100.0);
    assert_close(f64::from(result.widths.min_width()), 100.0 * std::f64::consts::SQRT_2);
  }

  #[test]
  fn unsatisfiable_ceiling_reports_no_solution() {
    // The curve's global minimum at 45° is ~141.42, above a 100pt ceiling.
    let result = RotationMinMaxWidth::calculate_with_available_width(
      std::f64::consts::FRAC_PI_4,
      AREA,
      &unrotated(50.0, 400.0),
      100.0,
    );
    assert!(result.is_none());
  }

  #[test]
  fn disjoint_intervals_degenerate_to_the_boundary_point() {
    // Ceiling interval is roughly [60, 166]; the element demands [300, 400].
    let result = RotationMinMaxWidth::calculate_with_available_width(
      std::f64::consts::FRAC_PI_4,
      AREA,
      &unrotated(300.0, 400.0),
      160.0,
    )
    .expect("degenerate, not absent");

    assert_close(result.min_width_origin, 300.0);
    assert_close(result.max_width_origin, 300.0);
    assert_eq!(result.widths.min_width(), result.widths.max_width());
  }

  #[test]
  fn rotated_width_of_a_known_rect() {
    let size = Size::new(100.0, 50.0);
    assert_close(rotated_width(size, 0.0), 100.0);
    assert_close(rotated_width(size, std::f64::consts::FRAC_PI_2), 50.0);
    let diag = rotated_width(size, std::f64::consts::FRAC_PI_4);
    assert_close(diag, (100.0 + 50.0) * std::f64::consts::FRAC_1_SQRT_2);
  }
}
