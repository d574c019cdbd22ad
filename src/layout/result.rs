//! Layout results: the output side of a layout call
//!
//! Every layout attempt ends in one of three states: the whole subtree fit
//! (FULL), part of it fit and the rest must be retried in a later area
//! (PARTIAL), or nothing fit at all (NOTHING). The shape invariant is
//! enforced by construction: PARTIAL carries both a split and an overflow
//! handle, NOTHING carries an overflow and a cause but never a split, and
//! FULL carries neither overflow nor cause. [`LayoutResult`] has no public
//! fields and only the three shaped constructors.

use crate::layout::area::LayoutArea;
use crate::layout::min_max_width::MinMaxWidth;
use crate::layout::renderer::{AreaBreak, RendererHandle};

/// Tri-state outcome of a layout attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutStatus {
  /// The entire subtree fit in the area
  Full,
  /// Part of the subtree fit; the remainder must go to a later area
  Partial,
  /// Nothing fit in this area
  Nothing,
}

/// Outcome of a layout attempt.
///
/// A NOTHING result is data, not an error: the caller inspects `cause()` to
/// find the renderer that made zero progress and decides whether to retry
/// in a bigger area or report an unsatisfiable constraint. Without the
/// cause, a caller retrying NOTHING results in fresh areas would recurse
/// forever on content that can never fit.
///
/// # Examples
///
/// ```
/// use pageflow::{LayoutArea, LayoutResult, LayoutStatus, Rect, RendererHandle};
///
/// let area = LayoutArea::new(1, Rect::from_xywh(0.0, 0.0, 100.0, 40.0));
/// let result = LayoutResult::partial(area, RendererHandle(1), RendererHandle(2));
/// assert_eq!(result.status(), LayoutStatus::Partial);
/// assert!(result.split_renderer().is_some());
/// assert!(result.overflow_renderer().is_some());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutResult {
  status: LayoutStatus,
  occupied_area: Option<LayoutArea>,
  split_renderer: Option<RendererHandle>,
  overflow_renderer: Option<RendererHandle>,
  cause: Option<RendererHandle>,
  area_break: Option<AreaBreak>,
}

impl LayoutResult {
  /// The entire subtree fit, occupying `occupied_area`.
  pub fn full(occupied_area: LayoutArea) -> Self {
    Self {
      status: LayoutStatus::Full,
      occupied_area: Some(occupied_area),
      split_renderer: None,
      overflow_renderer: None,
      cause: None,
      area_break: None,
    }
  }

  /// Part of the subtree fit. `split` names the renderer covering the
  /// fitted portion and `overflow` the renderer to retry in a later area.
  pub fn partial(occupied_area: LayoutArea, split: RendererHandle, overflow: RendererHandle) -> Self {
    Self {
      status: LayoutStatus::Partial,
      occupied_area: Some(occupied_area),
      split_renderer: Some(split),
      overflow_renderer: Some(overflow),
      cause: None,
      area_break: None,
    }
  }

  /// Nothing fit. `overflow` is the renderer to retry and `cause` the
  /// renderer responsible for the zero progress.
  pub fn nothing(overflow: RendererHandle, cause: RendererHandle) -> Self {
    Self {
      status: LayoutStatus::Nothing,
      occupied_area: None,
      split_renderer: None,
      overflow_renderer: Some(overflow),
      cause: Some(cause),
      area_break: None,
    }
  }

  /// Returns a copy carrying an area-break request.
  pub fn with_area_break(mut self, area_break: AreaBreak) -> Self {
    self.area_break = Some(area_break);
    self
  }

  /// The outcome status.
  pub fn status(&self) -> LayoutStatus {
    self.status
  }

  /// True when the whole subtree fit.
  pub fn is_full(&self) -> bool {
    self.status == LayoutStatus::Full
  }

  /// True when nothing fit.
  pub fn is_nothing(&self) -> bool {
    self.status == LayoutStatus::Nothing
  }

  /// The area the fitted content occupies. `None` only for NOTHING.
  pub fn occupied_area(&self) -> Option<LayoutArea> {
    self.occupied_area
  }

  /// The renderer covering the fitted portion of a PARTIAL result.
  pub fn split_renderer(&self) -> Option<RendererHandle> {
    self.split_renderer
  }

  /// The renderer to retry in a later area (PARTIAL and NOTHING).
  pub fn overflow_renderer(&self) -> Option<RendererHandle> {
    self.overflow_renderer
  }

  /// The renderer responsible for zero progress (NOTHING only).
  pub fn cause(&self) -> Option<RendererHandle> {
    self.cause
  }

  /// The area-break request, if the renderer made one.
  pub fn area_break(&self) -> Option<AreaBreak> {
    self.area_break
  }
}

/// A layout result paired with the intrinsic width bounds measured during
/// the same pass, so shrink-to-fit callers get both in one call.
#[derive(Debug, Clone, PartialEq)]
pub struct MinMaxWidthLayoutResult {
  /// The layout outcome
  pub result: LayoutResult,
  /// Intrinsic width bounds of the laid-out content
  pub min_max_width: MinMaxWidth,
}

/// Result of laying out one line of inline content.
#[derive(Debug, Clone, PartialEq)]
pub struct LineLayoutResult {
  /// The layout outcome
  pub result: LayoutResult,
  /// True when an embedded literal newline, not the width constraint,
  /// caused the split
  pub split_forced_by_newline: bool,
  /// Floated renderers that overflowed to the next page, so the caller
  /// keeps float placement consistent across the paragraph's lines
  pub floats_overflowed_to_next_page: Vec<RendererHandle>,
}

impl LineLayoutResult {
  /// Wraps a layout outcome with no newline force and no overflowed floats.
  pub fn new(result: LayoutResult) -> Self {
    Self {
      result,
      split_forced_by_newline: false,
      floats_overflowed_to_next_page: Vec::new(),
    }
  }
}

/// Result of laying out a run of text.
#[derive(Debug, Clone, PartialEq)]
pub struct TextLayoutResult {
  /// The layout outcome
  pub result: LayoutResult,
  /// True when a single word had to be broken mid-word to fit
  pub word_has_been_split: bool,
  /// True when an embedded literal newline caused the split
  pub split_forced_by_newline: bool,
}

impl TextLayoutResult {
  /// Wraps a layout outcome with both flags unset.
  pub fn new(result: LayoutResult) -> Self {
    Self {
      result,
      word_has_been_split: false,
      split_forced_by_newline: false,
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::geometry::Rect;
  use crate::layout::renderer::AreaBreakKind;

  fn area() -> LayoutArea {
    LayoutArea::new(1, Rect::from_xywh(0.0, 0.0, 100.0, 40.0))
  }

  #[test]
  fn full_carries_no_overflow_and_no_cause() {
    let result = LayoutResult::full(area());
    assert_eq!(result.status(), LayoutStatus::Full);
    assert!(result.occupied_area().is_some());
    assert!(result.split_renderer().is_none());
    assert!(result.overflow_renderer().is_none());
    assert!(result.cause().is_none());
  }

  #[test]
  fn partial_carries_both_handles() {
    let result = LayoutResult::partial(area(), RendererHandle(1), RendererHandle(2));
    assert_eq!(result.status(), LayoutStatus::Partial);
    assert_eq!(result.split_renderer(), Some(RendererHandle(1)));
    assert_eq!(result.overflow_renderer(), Some(RendererHandle(2)));
    assert!(result.cause().is_none());
  }

  #[test]
  fn nothing_carries_cause_and_no_split() {
    let result = LayoutResult::nothing(RendererHandle(3), RendererHandle(7));
    assert_eq!(result.status(), LayoutStatus::Nothing);
    assert!(result.occupied_area().is_none());
    assert!(result.split_renderer().is_none());
    assert_eq!(result.overflow_renderer(), Some(RendererHandle(3)));
    assert_eq!(result.cause(), Some(RendererHandle(7)));
  }

  #[test]
  fn area_break_attaches_to_any_shape() {
    let result =
      LayoutResult::full(area()).with_area_break(AreaBreak::new(AreaBreakKind::NextPage));
    assert_eq!(
      result.area_break().map(|b| b.kind),
      Some(AreaBreakKind::NextPage)
    );
  }

  #[test]
  fn wrappers_start_with_flags_unset() {
    let line = LineLayoutResult::new(LayoutResult::full(area()));
    assert!(!line.split_forced_by_newline);
    assert!(line.floats_overflowed_to_next_page.is_empty());

    let text = TextLayoutResult::new(LayoutResult::full(area()));
    assert!(!text.word_has_been_split);
    assert!(!text.split_forced_by_newline);
  }
}
