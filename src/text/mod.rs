//! Text-to-font-run segmentation
//!
//! Text renderers call [`segment_runs`] before any geometric layout: the
//! input text is partitioned into maximal runs, each bound to exactly one
//! font from the ranked candidate set, and only then are the shaped runs
//! measured and placed. Segmentation is where script continuity, diacritic
//! attachment, and font fallback decisions are made.

pub mod classify;
pub mod script;
mod segmenter;

pub use script::Script;
pub use segmenter::{segment_runs, MatchPolicy, ShapedRun};
