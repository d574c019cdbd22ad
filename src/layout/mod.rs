//! Layout currency types and geometry heuristics
//!
//! Layout of a renderer tree is recursive, synchronous, and depth-first:
//! each node's `layout(context) -> result` call consumes a
//! [`LayoutContext`] (a page-addressed area plus ambient state) and produces
//! a [`LayoutResult`] (the tri-state FULL/PARTIAL/NOTHING outcome). This
//! module owns those currency types, the intrinsic sizing records
//! ([`MinMaxWidth`] and the rotation-aware [`RotationMinMaxWidth`]), and the
//! child-sequence composition rule containers follow.
//!
//! All currency values are immutable after construction and cheap to copy;
//! speculative layout attempts each get their own copy, so a discarded
//! attempt can never corrupt the area it was tried against.

pub mod area;
pub mod compose;
pub mod context;
pub mod min_max_width;
pub mod renderer;
pub mod result;
pub mod rotation;

pub use area::LayoutArea;
pub use compose::{ChildSequenceLayout, SequenceOutcome};
pub use context::{LayoutContext, LineLayoutContext, MarginsCollapseInfo, PositionedLayoutContext};
pub use min_max_width::MinMaxWidth;
pub use renderer::{AreaBreak, AreaBreakKind, Renderer, RendererHandle};
pub use result::{
  LayoutResult, LayoutStatus, LineLayoutResult, MinMaxWidthLayoutResult, TextLayoutResult,
};
pub use rotation::{rotated_width, RotationMinMaxWidth};
