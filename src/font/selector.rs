//! Ranked font candidate sets
//!
//! A [`FontSelector`] is the per-text-run view of the engine's font
//! configuration: an ordered list of candidate fonts, best first. Resolution
//! walks the list and takes the first font that both claims a character and
//! has a renderable glyph for it; range containment alone is not enough,
//! since fonts routinely claim blocks they only partially populate.
//!
//! Resolution results are memoized per selector. A selector lives for one
//! layout pass over one styled text, so the memo is keyed by codepoint only.

use crate::error::FontError;
use crate::font::{FontCharacteristics, FontRef};
use rustc_hash::FxHashMap;
use std::cell::RefCell;

/// Ordered, non-empty candidate font list with cached resolution.
#[derive(Debug)]
pub struct FontSelector {
  candidates: Vec<FontRef>,
  resolution_cache: RefCell<FxHashMap<char, Option<usize>>>,
}

impl FontSelector {
  /// Creates a selector from a ranked candidate list, best match first.
  ///
  /// Errors with [`FontError::EmptyCandidateSet`] when the list is empty:
  /// the segmenter's final fallback requires a designated best-overall font.
  pub fn new(candidates: Vec<FontRef>) -> Result<Self, FontError> {
    if candidates.is_empty() {
      return Err(FontError::EmptyCandidateSet);
    }
    Ok(Self {
      candidates,
      resolution_cache: RefCell::new(FxHashMap::default()),
    })
  }

  /// The ranked candidate list.
  pub fn candidates(&self) -> &[FontRef] {
    &self.candidates
  }

  /// Returns the candidate at `index`.
  ///
  /// # Panics
  ///
  /// Panics if `index` is out of bounds; indices come from
  /// [`FontSelector::resolve`] and are always valid.
  pub fn candidate(&self, index: usize) -> &FontRef {
    &self.candidates[index]
  }

  /// The designated best-overall font: the top-ranked candidate. Used as the
  /// final fallback for characters no candidate can render.
  pub fn best_overall(&self) -> &FontRef {
    &self.candidates[0]
  }

  /// Resolves the first candidate that can render `c`, by index.
  ///
  /// Returns `None` when no candidate claims the character with a renderable
  /// glyph.
  pub fn resolve(&self, c: char) -> Option<usize> {
    if let Some(cached) = self.resolution_cache.borrow().get(&c) {
      return *cached;
    }
    let resolved = self
      .candidates
      .iter()
      .position(|font| font.can_render(c));
    self.resolution_cache.borrow_mut().insert(c, resolved);
    resolved
  }
}

/// Collaborator that turns a family list plus characteristics into a ranked
/// candidate set. Implemented by the engine's font layer.
pub trait FontProvider {
  /// Builds the ranked candidate list for the given families and style.
  fn select(
    &self,
    families: &[String],
    characteristics: &FontCharacteristics,
  ) -> Result<FontSelector, FontError>;
}
