//! Text-shaping runs and box-model layout core for fixed-page typesetting.
//!
//! This crate is the layout kernel of a fixed-page document engine. It owns
//! two tightly coupled concerns:
//!
//! - **Font run segmentation**: partitioning arbitrary Unicode text into
//!   maximal runs, each bound to exactly one font from a ranked candidate
//!   set, respecting script continuity and diacritic attachment
//!   ([`text::segment_runs`]).
//! - **Layout currency**: the value types every renderer's
//!   `layout(context) -> result` call consumes and produces: page-addressed
//!   areas, ambient context, the tri-state FULL/PARTIAL/NOTHING outcome, and
//!   intrinsic min/max width bounds including a rotation-aware heuristic
//!   ([`layout`]).
//!
//! The renderer tree itself, font-file parsing, and drawing are external
//! collaborators; they plug in through the [`font::FontProgram`] and
//! [`layout::Renderer`] traits.

pub mod error;
pub mod font;
pub mod geometry;
pub mod layout;
pub mod text;

pub use error::{Error, FontError, LayoutError, Result};
pub use font::{
  FontCharacteristics, FontProgram, FontProvider, FontRef, FontSelector, Glyph, GlyphLine,
};
pub use geometry::{EdgeOffsets, Point, Rect, Size};
pub use layout::{
  rotated_width, AreaBreak, AreaBreakKind, ChildSequenceLayout, LayoutArea, LayoutContext,
  LayoutResult, LayoutStatus, LineLayoutContext, LineLayoutResult, MarginsCollapseInfo,
  MinMaxWidth, MinMaxWidthLayoutResult, PositionedLayoutContext, Renderer, RendererHandle,
  RotationMinMaxWidth, SequenceOutcome, TextLayoutResult,
};
pub use text::{segment_runs, MatchPolicy, Script, ShapedRun};
