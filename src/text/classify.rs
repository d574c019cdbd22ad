//! Character classification helpers for segmentation
//!
//! Three questions the segmenter keeps asking: is this character significant
//! (drives run-start detection), is it a combining mark (diacritic
//! attachment), and is it one of the special Unicode spaces (whitespace-glyph
//! normalization).

/// Returns true for whitespace and non-printable characters.
///
/// Non-significant characters never start a run and never participate in
/// font resolution; they ride along inside whichever run surrounds them.
pub fn is_whitespace_or_non_printable(c: char) -> bool {
  if c.is_whitespace() || c.is_control() {
    return true;
  }
  matches!(
    c,
    '\u{00AD}'            // soft hyphen
      | '\u{200B}'..='\u{200F}' // zero-width space/joiners, directional marks
      | '\u{2028}'..='\u{202E}' // line/para separators, directional embeddings
      | '\u{2060}'          // word joiner
      | '\u{FEFF}' // zero-width no-break space / BOM
  )
}

/// Returns true for significant characters: those that are neither
/// whitespace nor non-printable.
#[inline]
pub fn is_significant(c: char) -> bool {
  !is_whitespace_or_non_printable(c)
}

/// Returns true for combining marks (diacritics).
///
/// A diacritic normally inherits the font of the base character it attaches
/// to; the segmenter only separates it when its own best-matched font
/// differs and is renderable.
pub fn is_combining_mark(c: char) -> bool {
  let cp = c as u32;
  (0x0300..=0x036F).contains(&cp)      // Combining Diacritical Marks
    || (0x0483..=0x0489).contains(&cp) // Cyrillic combining
    || (0x0591..=0x05BD).contains(&cp) // Hebrew points
    || (0x0610..=0x061A).contains(&cp) // Arabic marks
    || (0x064B..=0x065F).contains(&cp) // Arabic harakat
    || (0x1AB0..=0x1AFF).contains(&cp) // Combining Diacritical Marks Extended
    || (0x1DC0..=0x1DFF).contains(&cp) // Combining Diacritical Marks Supplement
    || (0x20D0..=0x20FF).contains(&cp) // Combining Marks for Symbols
    || (0xFE20..=0xFE2F).contains(&cp) // Combining Half Marks
}

/// Returns true for the special Unicode space characters that get their
/// glyphs replaced with the font's standard space glyph after shaping.
pub fn is_special_space(c: char) -> bool {
  matches!(
    c,
    '\u{00A0}'                // no-break space
      | '\u{2000}'..='\u{200A}' // en quad .. hair space
      | '\u{202F}'              // narrow no-break space
      | '\u{205F}'              // medium mathematical space
      | '\u{3000}' // ideographic space
  )
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn ordinary_letters_are_significant() {
    assert!(is_significant('a'));
    assert!(is_significant('中'));
    assert!(is_significant('\u{0301}')); // a combining mark is significant
  }

  #[test]
  fn whitespace_and_controls_are_not_significant() {
    assert!(!is_significant(' '));
    assert!(!is_significant('\t'));
    assert!(!is_significant('\n'));
    assert!(!is_significant('\u{00AD}'));
    assert!(!is_significant('\u{200B}'));
    assert!(!is_significant('\u{FEFF}'));
  }

  #[test]
  fn combining_marks_are_detected() {
    assert!(is_combining_mark('\u{0301}'));
    assert!(is_combining_mark('\u{0302}'));
    assert!(is_combining_mark('\u{064B}'));
    assert!(!is_combining_mark('a'));
    assert!(!is_combining_mark(' '));
  }

  #[test]
  fn special_spaces_are_detected() {
    assert!(is_special_space('\u{00A0}'));
    assert!(is_special_space('\u{2003}'));
    assert!(is_special_space('\u{3000}'));
    assert!(!is_special_space(' '));
    assert!(!is_special_space('x'));
  }
}
