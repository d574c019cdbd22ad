//! Renderer interface and area breaks
//!
//! The renderer tree itself is external to this crate; layout results refer
//! to renderers through opaque [`RendererHandle`]s so a split or overflow
//! part can be retried against a later area without this core knowing what
//! the renderer draws.

use crate::geometry::Size;
use crate::layout::context::LayoutContext;
use crate::layout::result::LayoutResult;
use std::fmt;

/// Opaque identifier for a renderer node.
///
/// Handles are assigned by the tree owner and are stable across layout
/// attempts: the overflow handle returned by one attempt names the renderer
/// to lay out against the next area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RendererHandle(pub u64);

impl fmt::Display for RendererHandle {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "renderer#{}", self.0)
  }
}

/// Why a renderer requested an area break.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AreaBreakKind {
  /// Move to the next available area on the same or next page
  NextArea,
  /// Force a new page
  NextPage,
  /// Force a new page and make it the last one
  LastPage,
}

/// A renderer-requested break out of the current area.
///
/// Carried on a [`LayoutResult`] when the renderer wants subsequent content
/// to start in a fresh area rather than continuing in the current one. A
/// break onto an area that is still empty is free; onto a used area it
/// consumes the remainder.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AreaBreak {
  /// What kind of break was requested
  pub kind: AreaBreakKind,
  /// Requested size for the new page, when the break starts one
  pub page_size: Option<Size>,
}

impl AreaBreak {
  /// Creates a break of the given kind with no page-size request.
  pub const fn new(kind: AreaBreakKind) -> Self {
    Self {
      kind,
      page_size: None,
    }
  }

  /// Creates a page break requesting a specific page size.
  pub const fn with_page_size(kind: AreaBreakKind, page_size: Size) -> Self {
    Self {
      kind,
      page_size: Some(page_size),
    }
  }
}

/// A node capable of laying itself out into an area.
///
/// Implemented outside this crate by the renderer tree; the core only
/// defines the calling convention. `layout` takes `&mut self` because a
/// renderer may cache measurements between attempts.
pub trait Renderer {
  /// The stable handle identifying this renderer.
  fn handle(&self) -> RendererHandle;

  /// Attempts to lay this renderer out into the context's area.
  fn layout(&mut self, context: &LayoutContext) -> LayoutResult;
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn handles_are_comparable_and_hashable() {
    use std::collections::HashSet;

    let a = RendererHandle(1);
    let b = RendererHandle(2);
    assert_ne!(a, b);

    let set: HashSet<RendererHandle> = [a, b, RendererHandle(1)].into_iter().collect();
    assert_eq!(set.len(), 2);
  }

  #[test]
  fn area_break_carries_optional_page_size() {
    let plain = AreaBreak::new(AreaBreakKind::NextArea);
    assert_eq!(plain.page_size, None);

    let sized = AreaBreak::with_page_size(AreaBreakKind::NextPage, Size::new(595.0, 842.0));
    assert_eq!(sized.page_size, Some(Size::new(595.0, 842.0)));
  }
}
