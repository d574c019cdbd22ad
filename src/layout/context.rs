//! Layout contexts: the input side of a layout call
//!
//! A context bundles the area a renderer may occupy with the ambient state
//! the box model threads through the tree: margin-collapse bookkeeping,
//! rectangles already claimed by floated content, and a clipped-height flag.
//! Specialized contexts are built by composition, not inheritance: each
//! wraps a [`LayoutContext`] and adds its own payload.

use crate::geometry::Rect;
use crate::layout::area::LayoutArea;

/// Margin-collapse bookkeeping threaded through block layout.
///
/// Tracks the running collapsed margin at the current flow position so
/// adjacent vertical margins merge instead of stacking. This core only
/// carries the values; the collapsing arithmetic lives with the box-model
/// collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MarginsCollapseInfo {
  /// Margin still pending collapse from the element above
  pub collapse_before: f32,
  /// Margin this element will offer to the element below
  pub collapse_after: f32,
  /// True while the element has produced no content that would stop the
  /// before-margin from collapsing through it
  pub is_self_collapsing: bool,
}

impl MarginsCollapseInfo {
  /// Creates collapse info with the given pending margins.
  pub const fn new(collapse_before: f32, collapse_after: f32) -> Self {
    Self {
      collapse_before,
      collapse_after,
      is_self_collapsing: true,
    }
  }
}

/// Input to a layout call: the available area plus ambient state.
///
/// # Examples
///
/// ```
/// use pageflow::{LayoutArea, LayoutContext, Rect};
///
/// let area = LayoutArea::new(1, Rect::from_xywh(0.0, 0.0, 400.0, 600.0));
/// let context = LayoutContext::new(area);
/// assert!(context.float_areas.is_empty());
/// assert!(!context.clipped_height);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutContext {
  /// The area the renderer may occupy
  pub area: LayoutArea,
  /// Margin-collapse state at the current flow position, if block layout is
  /// collapsing margins through this call
  pub margins_collapse: Option<MarginsCollapseInfo>,
  /// Rectangles already occupied by floated content; line layout flows
  /// around these
  pub float_areas: Vec<Rect>,
  /// True when the area's height was clipped by an enclosing fixed-height
  /// box, so overflow here is discarded rather than moved to the next area
  pub clipped_height: bool,
}

impl LayoutContext {
  /// Creates a context over an area with no ambient state.
  pub fn new(area: LayoutArea) -> Self {
    Self {
      area,
      margins_collapse: None,
      float_areas: Vec::new(),
      clipped_height: false,
    }
  }

  /// Returns a copy with the given float exclusion rectangles.
  pub fn with_float_areas(mut self, float_areas: Vec<Rect>) -> Self {
    self.float_areas = float_areas;
    self
  }

  /// Returns a copy with margin-collapse state attached.
  pub fn with_margins_collapse(mut self, info: MarginsCollapseInfo) -> Self {
    self.margins_collapse = Some(info);
    self
  }

  /// Returns a copy with the clipped-height flag set.
  pub fn with_clipped_height(mut self) -> Self {
    self.clipped_height = true;
    self
  }
}

/// Context for laying out a single line of inline content.
///
/// Adds one piece of state to [`LayoutContext`]: a sticky flag recording
/// that a float already overflowed to the next page while this paragraph
/// placed nothing for it. Once set, later lines of the same paragraph see
/// it and keep their float-overflow decisions consistent; it can never be
/// cleared.
#[derive(Debug, Clone, PartialEq)]
pub struct LineLayoutContext {
  /// The shared context fields
  pub base: LayoutContext,
  float_overflowed_to_next_page_with_nothing: bool,
}

impl LineLayoutContext {
  /// Creates a fresh line context over an area.
  pub fn new(area: LayoutArea) -> Self {
    Self {
      base: LayoutContext::new(area),
      float_overflowed_to_next_page_with_nothing: false,
    }
  }

  /// Creates a line context from an existing context, copying its area,
  /// margin-collapse state, float areas, and clipped-height flag. The
  /// sticky flag starts unset.
  pub fn from_context(context: &LayoutContext) -> Self {
    Self {
      base: context.clone(),
      float_overflowed_to_next_page_with_nothing: false,
    }
  }

  /// Records that a float overflowed to the next page with nothing placed.
  /// The flag is sticky: there is no way to clear it.
  pub fn mark_float_overflowed_to_next_page_with_nothing(&mut self) {
    self.float_overflowed_to_next_page_with_nothing = true;
  }

  /// Returns the sticky float-overflow flag.
  pub fn float_overflowed_to_next_page_with_nothing(&self) -> bool {
    self.float_overflowed_to_next_page_with_nothing
  }
}

/// Context for laying out absolutely or fixed-positioned content.
///
/// Carries the parent's occupied area alongside the usual context, since
/// positioned content resolves its offsets against the parent rather than
/// against the flow area.
#[derive(Debug, Clone, PartialEq)]
pub struct PositionedLayoutContext {
  /// The shared context fields
  pub base: LayoutContext,
  /// The area the parent renderer occupied, used as the positioning
  /// reference
  pub parent_occupied_area: LayoutArea,
}

impl PositionedLayoutContext {
  /// Creates a positioned context from a base context and the parent's
  /// occupied area.
  pub fn new(base: LayoutContext, parent_occupied_area: LayoutArea) -> Self {
    Self {
      base,
      parent_occupied_area,
    }
  }
}
