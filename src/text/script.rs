//! Unicode script detection
//!
//! Script classification per Unicode Standard Annex #24, reduced to the
//! range-table form the segmenter needs: identify the significant script of
//! a run and notice when a later character belongs to a different one.
//! `Common` and `Inherited` never count as significant and never force a
//! run break.

/// Unicode script category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Script {
  /// Common script (punctuation, digits, shared symbols)
  Common,
  /// Inherited script (combining marks)
  Inherited,
  /// Unknown/unassigned
  Unknown,
  /// Latin
  #[default]
  Latin,
  /// Greek
  Greek,
  /// Cyrillic
  Cyrillic,
  /// Hebrew
  Hebrew,
  /// Arabic
  Arabic,
  /// Devanagari
  Devanagari,
  /// Bengali
  Bengali,
  /// Tamil
  Tamil,
  /// Thai
  Thai,
  /// Han (Chinese hanzi, Japanese kanji, Korean hanja)
  Han,
  /// Hiragana
  Hiragana,
  /// Katakana
  Katakana,
  /// Hangul
  Hangul,
}

impl Script {
  /// Detects the script of a character using Unicode block ranges.
  pub fn detect(c: char) -> Self {
    let cp = c as u32;

    // ASCII and Basic Latin
    if (0x0000..=0x007F).contains(&cp) {
      if c.is_ascii_alphabetic() {
        return Self::Latin;
      }
      return Self::Common;
    }

    // Latin Extended
    if (0x0080..=0x024F).contains(&cp) || (0x1E00..=0x1EFF).contains(&cp) {
      return Self::Latin;
    }

    // Combining marks (Inherited)
    if (0x0300..=0x036F).contains(&cp)
      || (0x1AB0..=0x1AFF).contains(&cp)
      || (0x1DC0..=0x1DFF).contains(&cp)
      || (0x20D0..=0x20FF).contains(&cp)
      || (0xFE20..=0xFE2F).contains(&cp)
    {
      return Self::Inherited;
    }

    // Greek
    if (0x0370..=0x03FF).contains(&cp) || (0x1F00..=0x1FFF).contains(&cp) {
      return Self::Greek;
    }

    // Cyrillic
    if (0x0400..=0x052F).contains(&cp)
      || (0x2DE0..=0x2DFF).contains(&cp)
      || (0xA640..=0xA69F).contains(&cp)
    {
      return Self::Cyrillic;
    }

    // Hebrew
    if (0x0590..=0x05FF).contains(&cp) || (0xFB1D..=0xFB4F).contains(&cp) {
      return Self::Hebrew;
    }

    // Arabic
    if (0x0600..=0x06FF).contains(&cp)
      || (0x0750..=0x077F).contains(&cp)
      || (0x08A0..=0x08FF).contains(&cp)
      || (0xFB50..=0xFDFF).contains(&cp)
      || (0xFE70..=0xFEFF).contains(&cp)
    {
      return Self::Arabic;
    }

    // Devanagari
    if (0x0900..=0x097F).contains(&cp) || (0xA8E0..=0xA8FF).contains(&cp) {
      return Self::Devanagari;
    }

    // Bengali
    if (0x0980..=0x09FF).contains(&cp) {
      return Self::Bengali;
    }

    // Tamil
    if (0x0B80..=0x0BFF).contains(&cp) {
      return Self::Tamil;
    }

    // Thai
    if (0x0E00..=0x0E7F).contains(&cp) {
      return Self::Thai;
    }

    // Hangul
    if (0x1100..=0x11FF).contains(&cp)
      || (0x3130..=0x318F).contains(&cp)
      || (0xA960..=0xA97F).contains(&cp)
      || (0xAC00..=0xD7FF).contains(&cp)
    {
      return Self::Hangul;
    }

    // Hiragana
    if (0x3040..=0x309F).contains(&cp) {
      return Self::Hiragana;
    }

    // Katakana
    if (0x30A0..=0x30FF).contains(&cp) || (0x31F0..=0x31FF).contains(&cp) {
      return Self::Katakana;
    }

    // Han
    if (0x4E00..=0x9FFF).contains(&cp)
      || (0x3400..=0x4DBF).contains(&cp)
      || (0x20000..=0x2A6DF).contains(&cp)
      || (0xF900..=0xFAFF).contains(&cp)
      || (0x2F800..=0x2FA1F).contains(&cp)
    {
      return Self::Han;
    }

    // General punctuation, super/subscripts, currency, letterlike symbols
    if (0x2000..=0x214F).contains(&cp) {
      return Self::Common;
    }

    Self::Unknown
  }

  /// Returns true for scripts that never start or break a run on their own:
  /// `Common`, `Inherited`, and `Unknown` merge with surrounding scripts.
  #[inline]
  pub fn is_neutral(self) -> bool {
    matches!(self, Self::Common | Self::Inherited | Self::Unknown)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn detects_latin() {
    assert_eq!(Script::detect('A'), Script::Latin);
    assert_eq!(Script::detect('z'), Script::Latin);
    assert_eq!(Script::detect('é'), Script::Latin);
  }

  #[test]
  fn detects_non_latin_majors() {
    assert_eq!(Script::detect('م'), Script::Arabic);
    assert_eq!(Script::detect('ש'), Script::Hebrew);
    assert_eq!(Script::detect('Ω'), Script::Greek);
    assert_eq!(Script::detect('я'), Script::Cyrillic);
    assert_eq!(Script::detect('中'), Script::Han);
    assert_eq!(Script::detect('あ'), Script::Hiragana);
    assert_eq!(Script::detect('カ'), Script::Katakana);
    assert_eq!(Script::detect('한'), Script::Hangul);
  }

  #[test]
  fn punctuation_and_digits_are_common() {
    assert_eq!(Script::detect(' '), Script::Common);
    assert_eq!(Script::detect('1'), Script::Common);
    assert_eq!(Script::detect('.'), Script::Common);
  }

  #[test]
  fn combining_marks_are_inherited() {
    assert_eq!(Script::detect('\u{0301}'), Script::Inherited);
    assert_eq!(Script::detect('\u{0302}'), Script::Inherited);
  }

  #[test]
  fn neutral_scripts() {
    assert!(Script::Common.is_neutral());
    assert!(Script::Inherited.is_neutral());
    assert!(Script::Unknown.is_neutral());
    assert!(!Script::Latin.is_neutral());
    assert!(!Script::Arabic.is_neutral());
  }
}
