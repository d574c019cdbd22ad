//! Font collaborator contracts
//!
//! The layout core never parses font files. Everything it needs from a font
//! is expressed by the [`FontProgram`] trait: a Unicode coverage predicate, a
//! glyph-existence query, and the two shaping appends the segmenter drives
//! (`append_glyphs` for a mapped range, `append_any_glyph` as the guaranteed
//! forward-progress escape hatch). Concrete implementations live in the
//! engine's font layer; tests use lightweight mocks.
//!
//! [`FontSelector`] wraps the ranked candidate list produced by the engine's
//! font provider for one piece of styled text.

mod selector;

pub use selector::{FontProvider, FontSelector};

use crate::text::classify::is_special_space;
use std::fmt;
use std::sync::Arc;

/// A single positioned glyph produced by shaping.
///
/// `code` is the glyph index inside its font program; code 0 is the missing
/// glyph (.notdef). `unicode` is the source character when the mapping is
/// 1:1, `None` for glyphs synthesized by multi-character clusters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Glyph {
  /// Glyph index in the font program (0 = .notdef)
  pub code: u32,
  /// Advance width in font units
  pub width: f32,
  /// Source character, when a 1:1 mapping exists
  pub unicode: Option<char>,
}

impl Glyph {
  /// Creates a glyph record.
  pub const fn new(code: u32, width: f32, unicode: Option<char>) -> Self {
    Self {
      code,
      width,
      unicode,
    }
  }

  /// Returns true if this glyph is renderable (not the missing glyph).
  pub fn is_renderable(&self) -> bool {
    self.code != 0
  }
}

/// An ordered buffer of glyphs, appended to by [`FontProgram`] shaping calls.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GlyphLine {
  glyphs: Vec<Glyph>,
}

impl GlyphLine {
  /// Creates an empty glyph line.
  pub fn new() -> Self {
    Self::default()
  }

  /// Appends a glyph.
  pub fn push(&mut self, glyph: Glyph) {
    self.glyphs.push(glyph);
  }

  /// Number of glyphs in the line.
  pub fn len(&self) -> usize {
    self.glyphs.len()
  }

  /// Returns true if the line holds no glyphs.
  pub fn is_empty(&self) -> bool {
    self.glyphs.is_empty()
  }

  /// Immutable view of the glyphs.
  pub fn glyphs(&self) -> &[Glyph] {
    &self.glyphs
  }

  /// Mutable iterator, used by whitespace normalization.
  pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, Glyph> {
    self.glyphs.iter_mut()
  }
}

/// Contract every font must satisfy for the layout core.
///
/// Glyph lookups are assumed served from memory; a cache miss triggering
/// font-file loading is the provider's problem, not this core's.
pub trait FontProgram: fmt::Debug {
  /// Font name, used in diagnostics only.
  fn name(&self) -> &str;

  /// Unicode range predicate: whether this font claims the character.
  ///
  /// Claiming a character does not imply a renderable glyph exists for it;
  /// resolution always double-checks with [`FontProgram::glyph`].
  fn covers(&self, c: char) -> bool;

  /// Glyph lookup. `None`, or a glyph with code 0, means the character has
  /// no renderable glyph in this font.
  fn glyph(&self, c: char) -> Option<Glyph>;

  /// Shapes a prefix of `text` into `out`, returning the number of chars
  /// consumed. A font consumes as many leading characters as it can render;
  /// it may stop early and may consume a different count than the caller's
  /// scan suggested (multi-glyph clusters).
  fn append_glyphs(&self, text: &str, out: &mut GlyphLine) -> usize;

  /// Appends a glyph for the first character of `text` no matter what,
  /// substituting the missing glyph if necessary. Must consume at least one
  /// char whenever `text` is non-empty.
  fn append_any_glyph(&self, text: &str, out: &mut GlyphLine) -> usize;

  /// Returns true if the font both claims the character and has a renderable
  /// glyph for it. This is the test font resolution uses.
  fn can_render(&self, c: char) -> bool {
    self.covers(c) && self.glyph(c).is_some_and(|g| g.is_renderable())
  }

  /// Replaces special Unicode space glyphs (no-break space, en/em spaces,
  /// ideographic space, ...) with this font's standard space glyph. Advances
  /// are taken from the space glyph; the recorded unicode is preserved so
  /// downstream stages still see the original character.
  fn replace_special_whitespace(&self, line: &mut GlyphLine) {
    let Some(space) = self.glyph(' ') else {
      return;
    };
    for glyph in line.iter_mut() {
      if glyph.unicode.is_some_and(is_special_space) {
        glyph.code = space.code;
        glyph.width = space.width;
      }
    }
  }
}

/// Style characteristics a font provider matches candidates against.
///
/// Mirrors the usual weight/style axes; extend as the engine grows.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FontCharacteristics {
  /// Weight on the 100–900 scale (400 = normal, 700 = bold)
  pub weight: u16,
  /// Italic or oblique style requested
  pub italic: bool,
}

impl Default for FontCharacteristics {
  fn default() -> Self {
    Self {
      weight: 400,
      italic: false,
    }
  }
}

impl FontCharacteristics {
  /// Normal upright text at weight 400.
  pub fn normal() -> Self {
    Self::default()
  }

  /// Sets the weight.
  pub fn with_weight(mut self, weight: u16) -> Self {
    self.weight = weight;
    self
  }

  /// Sets the italic flag.
  pub fn with_italic(mut self, italic: bool) -> Self {
    self.italic = italic;
    self
  }
}

/// Shared handle to a font program.
pub type FontRef = Arc<dyn FontProgram>;

#[cfg(test)]
mod tests {
  use super::*;

  #[derive(Debug)]
  struct SpacesFont;

  impl FontProgram for SpacesFont {
    fn name(&self) -> &str {
      "Spaces"
    }

    fn covers(&self, c: char) -> bool {
      c.is_ascii()
    }

    fn glyph(&self, c: char) -> Option<Glyph> {
      self
        .covers(c)
        .then(|| Glyph::new(c as u32, if c == ' ' { 250.0 } else { 500.0 }, Some(c)))
    }

    fn append_glyphs(&self, text: &str, out: &mut GlyphLine) -> usize {
      let mut consumed = 0;
      for c in text.chars() {
        match self.glyph(c) {
          Some(g) => out.push(g),
          None => out.push(Glyph::new(0, 500.0, Some(c))),
        }
        consumed += 1;
      }
      consumed
    }

    fn append_any_glyph(&self, text: &str, out: &mut GlyphLine) -> usize {
      match text.chars().next() {
        Some(c) => {
          out.push(self.glyph(c).unwrap_or(Glyph::new(0, 500.0, Some(c))));
          1
        }
        None => 0,
      }
    }
  }

  #[test]
  fn can_render_requires_nonzero_glyph_code() {
    #[derive(Debug)]
    struct NotdefFont;
    impl FontProgram for NotdefFont {
      fn name(&self) -> &str {
        "Notdef"
      }
      fn covers(&self, _: char) -> bool {
        true
      }
      fn glyph(&self, c: char) -> Option<Glyph> {
        // Claims everything, renders nothing.
        Some(Glyph::new(0, 0.0, Some(c)))
      }
      fn append_glyphs(&self, _: &str, _: &mut GlyphLine) -> usize {
        0
      }
      fn append_any_glyph(&self, text: &str, out: &mut GlyphLine) -> usize {
        match text.chars().next() {
          Some(c) => {
            out.push(Glyph::new(0, 0.0, Some(c)));
            1
          }
          None => 0,
        }
      }
    }

    assert!(!NotdefFont.can_render('a'));
    assert!(SpacesFont.can_render('a'));
  }

  #[test]
  fn special_whitespace_is_replaced_with_the_space_glyph() {
    let mut line = GlyphLine::new();
    SpacesFont.append_glyphs("a b", &mut line);
    // Smuggle in a no-break space glyph with a bogus code.
    line.push(Glyph::new(9999, 999.0, Some('\u{00A0}')));

    SpacesFont.replace_special_whitespace(&mut line);

    let nbsp = line.glyphs().last().unwrap();
    assert_eq!(nbsp.code, ' ' as u32);
    assert_eq!(nbsp.width, 250.0);
    assert_eq!(nbsp.unicode, Some('\u{00A0}'));
    // Ordinary glyphs untouched.
    assert_eq!(line.glyphs()[0].code, 'a' as u32);
  }
}
