//! Page-addressed layout areas

use crate::geometry::Rect;
use std::fmt;

/// A rectangular region on a specific page.
///
/// The input and output currency of every layout call: a renderer receives
/// the area it may occupy and reports back the area it did occupy.
///
/// `LayoutArea` is a `Copy` value type. Speculative layout (trying a
/// narrower column before falling back to the full width, say) works on its
/// own copy, so a discarded attempt cannot corrupt the area it was derived
/// from.
///
/// # Examples
///
/// ```
/// use pageflow::{LayoutArea, Rect};
///
/// let area = LayoutArea::new(1, Rect::from_xywh(0.0, 0.0, 100.0, 100.0));
/// let mut candidate = area;
/// candidate.b_box.size.width = 50.0;
/// assert_eq!(area.b_box.width(), 100.0); // original untouched
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutArea {
  /// 1-based page number this area lives on
  pub page_number: u32,
  /// Bounding rectangle in page coordinates
  pub b_box: Rect,
  /// True while no content has been placed on this area yet. A forced page
  /// break onto a still-empty area is free; onto a used one it costs a page.
  pub empty: bool,
}

impl LayoutArea {
  /// Creates an area that has not received content yet.
  pub const fn new(page_number: u32, b_box: Rect) -> Self {
    Self {
      page_number,
      b_box,
      empty: true,
    }
  }

  /// Creates the page-level root area. Identical semantics to
  /// [`LayoutArea::new`]; the distinction is documentary.
  pub const fn root(page_number: u32, b_box: Rect) -> Self {
    Self::new(page_number, b_box)
  }

  /// Returns a copy marked as having received content.
  pub fn with_content_placed(mut self) -> Self {
    self.empty = false;
    self
  }

  /// Returns a copy with a different bounding box, keeping page and
  /// emptiness.
  pub fn with_b_box(mut self, b_box: Rect) -> Self {
    self.b_box = b_box;
    self
  }
}

impl fmt::Display for LayoutArea {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(
      f,
      "page {} [{} {} {}×{}]",
      self.page_number,
      self.b_box.x(),
      self.b_box.y(),
      self.b_box.width(),
      self.b_box.height()
    )
  }
}
