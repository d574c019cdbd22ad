//! Child-sequence composition rule
//!
//! The protocol a container renderer follows when laying out its children
//! in order: the first child that does not come back FULL fixes the
//! container's own status. [`ChildSequenceLayout`] is the accumulator a
//! container drives: report each child's outcome in order, stop at the
//! first non-FULL one, then call [`ChildSequenceLayout::finish`] with the
//! unattempted suffix. The resulting [`SequenceOutcome`] tells the
//! container what to return:
//!
//! - PARTIAL: the fitted part is the fully-fit prefix plus the deciding
//!   child's split, the overflow part is the child's overflow plus every
//!   unattempted child.
//! - NOTHING (with nothing placed at all): the deciding child's cause is
//!   forwarded unchanged. A cause identified deep in the tree is never
//!   overwritten on the way up, so the caller can always name the exact
//!   renderer that made zero progress.
//! - A child NOTHING after earlier children already fit demotes to PARTIAL:
//!   the prefix is the fitted part and the deciding child heads the
//!   overflow.

use crate::geometry::Rect;
use crate::layout::area::LayoutArea;
use crate::layout::renderer::RendererHandle;
use crate::layout::result::LayoutResult;
use log::debug;

/// What a container should return after sequencing its children.
#[derive(Debug, Clone, PartialEq)]
pub enum SequenceOutcome {
  /// Every child fit
  Full {
    /// Union of the children's occupied areas
    occupied_area: LayoutArea,
  },
  /// A prefix fit, the rest must be retried in a later area
  Partial {
    /// Union of the fitted children's occupied areas (including the
    /// deciding child's fitted part, when it had one)
    occupied_area: LayoutArea,
    /// Fully-fit prefix plus the deciding child's split handle
    fitted: Vec<RendererHandle>,
    /// The deciding child's overflow handle plus the unattempted suffix
    overflow: Vec<RendererHandle>,
  },
  /// Nothing fit at all
  Nothing {
    /// The deciding child's overflow handle plus the unattempted suffix
    overflow: Vec<RendererHandle>,
    /// The renderer responsible for zero progress, forwarded unchanged
    /// from the deciding child's result
    cause: RendererHandle,
  },
}

enum Decision {
  Partial {
    child_split: Option<RendererHandle>,
    child_overflow: RendererHandle,
  },
  Nothing {
    child_overflow: RendererHandle,
    cause: RendererHandle,
  },
}

/// Accumulator for laying out an ordered child sequence.
///
/// # Examples
///
/// ```
/// use pageflow::{ChildSequenceLayout, LayoutArea, Rect, RendererHandle, SequenceOutcome};
///
/// let area = LayoutArea::new(1, Rect::from_xywh(0.0, 0.0, 100.0, 100.0));
/// let mut seq = ChildSequenceLayout::new(RendererHandle(0), area);
///
/// let child_area = area.with_b_box(Rect::from_xywh(0.0, 0.0, 100.0, 40.0));
/// seq.child_full(RendererHandle(1), child_area);
/// assert!(matches!(seq.finish(vec![]), SequenceOutcome::Full { .. }));
/// ```
pub struct ChildSequenceLayout {
  container: RendererHandle,
  input_area: LayoutArea,
  fitted: Vec<RendererHandle>,
  occupied: Option<Rect>,
  decision: Option<Decision>,
}

impl ChildSequenceLayout {
  /// Starts a sequence for `container` laying out into `area`.
  pub fn new(container: RendererHandle, area: LayoutArea) -> Self {
    Self {
      container,
      input_area: area,
      fitted: Vec::new(),
      occupied: None,
      decision: None,
    }
  }

  /// True once a child has fixed the container's status; the driver stops
  /// laying out further children and calls [`ChildSequenceLayout::finish`].
  pub fn is_decided(&self) -> bool {
    self.decision.is_some()
  }

  /// Records a child that fit completely.
  pub fn child_full(&mut self, child: RendererHandle, occupied_area: LayoutArea) {
    debug_assert!(self.decision.is_none());
    self.fitted.push(child);
    self.absorb(occupied_area);
  }

  /// Records the child that came back PARTIAL. Its split handle joins the
  /// fitted prefix; its overflow handle will head the overflow suffix.
  pub fn child_partial(&mut self, result: &LayoutResult) {
    debug_assert!(self.decision.is_none());
    if let Some(area) = result.occupied_area() {
      self.absorb(area);
    }
    self.decision = Some(Decision::Partial {
      child_split: result.split_renderer(),
      child_overflow: result
        .overflow_renderer()
        .expect("partial result always carries an overflow handle"),
    });
  }

  /// Records the child that came back NOTHING. Its cause is forwarded
  /// unchanged; the child's own handle stands in only if the result lost
  /// it.
  pub fn child_nothing(&mut self, child: RendererHandle, result: &LayoutResult) {
    debug_assert!(self.decision.is_none());
    let child_overflow = result.overflow_renderer().unwrap_or(child);
    let cause = result.cause().unwrap_or(child);
    self.decision = Some(Decision::Nothing {
      child_overflow,
      cause,
    });
  }

  /// Closes the sequence. `unattempted` is the suffix of children the
  /// driver never laid out because an earlier child decided the status.
  pub fn finish(self, unattempted: Vec<RendererHandle>) -> SequenceOutcome {
    let occupied_area = self
      .input_area
      .with_b_box(self.occupied.unwrap_or_else(|| {
        Rect::new(self.input_area.b_box.origin, crate::geometry::Size::ZERO)
      }))
      .with_content_placed();

    match self.decision {
      None => {
        debug_assert!(unattempted.is_empty());
        SequenceOutcome::Full { occupied_area }
      }
      Some(Decision::Partial {
        child_split,
        child_overflow,
      }) => {
        let mut fitted = self.fitted;
        fitted.extend(child_split);
        let mut overflow = vec![child_overflow];
        overflow.extend(unattempted);
        debug!(
          "{}: partial after {} fitted children, {} overflowing",
          self.container,
          fitted.len(),
          overflow.len()
        );
        SequenceOutcome::Partial {
          occupied_area,
          fitted,
          overflow,
        }
      }
      Some(Decision::Nothing {
        child_overflow,
        cause,
      }) => {
        let mut overflow = vec![child_overflow];
        overflow.extend(unattempted);
        if self.fitted.is_empty() && self.occupied.is_none() {
          debug!("{}: nothing fit, cause {}", self.container, cause);
          SequenceOutcome::Nothing { overflow, cause }
        } else {
          // Earlier children already placed content, so the container as a
          // whole made progress: the deciding child just moves whole into
          // the overflow part.
          debug!(
            "{}: child {} fit nothing after {} fitted children, demoting to partial",
            self.container,
            child_overflow,
            self.fitted.len()
          );
          SequenceOutcome::Partial {
            occupied_area,
            fitted: self.fitted,
            overflow,
          }
        }
      }
    }
  }

  fn absorb(&mut self, area: LayoutArea) {
    self.occupied = Some(match self.occupied {
      Some(rect) => rect.union(area.b_box),
      None => area.b_box,
    });
  }
}
