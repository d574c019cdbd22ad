//! Intrinsic width bounds for shrink-to-fit sizing
//!
//! A renderer's intrinsic widths answer two questions: how narrow can this
//! content get before it must overflow (min), and how wide would it like to
//! be if nothing wrapped (max). Both are clamped against the width actually
//! available, so the derived accessors always satisfy
//! `min_width() <= max_width() <= available_width` by construction.

use crate::error::LayoutError;
use crate::geometry::Rect;
use crate::layout::area::LayoutArea;
use crate::layout::context::LayoutContext;
use crate::layout::renderer::Renderer;

// Stand-in for an unbounded probe height. Tall enough that no real page
// content runs out of room, small enough to stay far from f32 overflow in
// the arithmetic downstream.
const INFINITE_HEIGHT: f32 = 1.0e9;

/// Intrinsic min/max width record.
///
/// `children_*` are the raw content widths; `additional_width` is the
/// chrome the box model adds around the content (borders, padding,
/// margins); `available_width` is the hard ceiling of the containing area.
/// The clamping lives in the accessors, never in caller discipline.
///
/// # Examples
///
/// ```
/// use pageflow::MinMaxWidth;
///
/// let w = MinMaxWidth::new(50.0, 200.0, 10.0, 100.0);
/// assert_eq!(w.max_width(), 100.0); // 210 clamped to available
/// assert_eq!(w.min_width(), 60.0);  // 60 fits under max
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MinMaxWidth {
  /// Narrowest width the content can be laid out in
  pub children_min_width: f32,
  /// Width the content would take with no wrapping
  pub children_max_width: f32,
  /// Border/padding/margin width added around the content
  pub additional_width: f32,
  /// Width of the containing area
  pub available_width: f32,
}

impl MinMaxWidth {
  /// Creates a record from raw components.
  pub const fn new(
    children_min_width: f32,
    children_max_width: f32,
    additional_width: f32,
    available_width: f32,
  ) -> Self {
    Self {
      children_min_width,
      children_max_width,
      additional_width,
      available_width,
    }
  }

  /// Like [`MinMaxWidth::new`], but rejects components a layout pass could
  /// never have produced: negative, NaN, or infinite content widths.
  /// `available_width` may be infinite (an unconstrained probe).
  pub fn try_new(
    children_min_width: f32,
    children_max_width: f32,
    additional_width: f32,
    available_width: f32,
  ) -> Result<Self, LayoutError> {
    for (name, value) in [
      ("children_min_width", children_min_width),
      ("children_max_width", children_max_width),
      ("additional_width", additional_width),
    ] {
      if !value.is_finite() || value < 0.0 {
        return Err(LayoutError::InvalidConstraints {
          message: format!("{name} must be finite and non-negative, got {value}"),
        });
      }
    }
    if available_width.is_nan() || available_width < 0.0 {
      return Err(LayoutError::InvalidConstraints {
        message: format!("available_width must be non-negative, got {available_width}"),
      });
    }
    Ok(Self::new(
      children_min_width,
      children_max_width,
      additional_width,
      available_width,
    ))
  }

  /// A record that contributes nothing: all four components zero.
  pub const fn zero() -> Self {
    Self::new(0.0, 0.0, 0.0, 0.0)
  }

  /// The preferred width: content max plus chrome, clamped to available.
  pub fn max_width(&self) -> f32 {
    (self.children_max_width + self.additional_width).min(self.available_width)
  }

  /// The minimum width: content min plus chrome, clamped so it never
  /// exceeds [`MinMaxWidth::max_width`].
  pub fn min_width(&self) -> f32 {
    (self.children_min_width + self.additional_width).min(self.max_width())
  }

  /// Measures a renderer that has no cheaper way to report its intrinsic
  /// widths: one layout pass at `available_width` and effectively infinite
  /// height, reading the occupied width back as both bounds. A probe that
  /// fits nothing yields [`MinMaxWidth::zero`].
  pub fn from_probe<R: Renderer + ?Sized>(
    renderer: &mut R,
    available_width: f32,
    additional_width: f32,
  ) -> Self {
    let probe_area = LayoutArea::new(
      1,
      Rect::from_xywh(0.0, 0.0, available_width, INFINITE_HEIGHT),
    );
    let result = renderer.layout(&LayoutContext::new(probe_area));

    match result.occupied_area() {
      Some(area) => {
        let width = area.b_box.width();
        Self::new(width, width, additional_width, available_width)
      }
      None => Self::zero(),
    }
  }
}
