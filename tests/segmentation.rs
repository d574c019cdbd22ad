//! Segmentation integration tests: partition and forward-progress
//! guarantees over adversarial inputs, driven through the public API only.

use pageflow::{
  segment_runs, FontProgram, FontRef, FontSelector, Glyph, GlyphLine, MatchPolicy, ShapedRun,
};
use proptest::prelude::*;
use std::sync::Arc;

/// Font whose coverage is an arbitrary predicate. Shapes covered characters
/// and whitespace, stopping at the first character it cannot render.
#[derive(Debug)]
struct PredicateFont {
  name: &'static str,
  covers: fn(char) -> bool,
}

impl PredicateFont {
  fn appendable(&self, c: char) -> bool {
    (self.covers)(c) || c.is_whitespace() || c.is_control()
  }
}

impl FontProgram for PredicateFont {
  fn name(&self) -> &str {
    self.name
  }

  fn covers(&self, c: char) -> bool {
    (self.covers)(c)
  }

  fn glyph(&self, c: char) -> Option<Glyph> {
    (self.covers)(c).then(|| Glyph::new(c as u32, 500.0, Some(c)))
  }

  fn append_glyphs(&self, text: &str, out: &mut GlyphLine) -> usize {
    let mut consumed = 0;
    for c in text.chars() {
      if !self.appendable(c) {
        break;
      }
      out.push(self.glyph(c).unwrap_or(Glyph::new(' ' as u32, 250.0, Some(c))));
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

fn font(name: &'static str, covers: fn(char) -> bool) -> FontRef {
  Arc::new(PredicateFont { name, covers })
}

fn assert_exact_partition(runs: &[ShapedRun], source: &str) {
  let mut cursor = 0;
  for run in runs {
    assert_eq!(
      run.range.start, cursor,
      "gap or overlap at byte {cursor} of {source:?}"
    );
    assert!(run.range.end > run.range.start, "empty run in {source:?}");
    cursor = run.range.end;
  }
  assert_eq!(cursor, source.len(), "runs do not cover {source:?}");
}

// A candidate set that renders almost nothing: ASCII lowercase only. Every
// other codepoint goes through the append_any_glyph escape hatch.
fn stingy_selector() -> FontSelector {
  FontSelector::new(vec![font("Stingy", |c| c.is_ascii_lowercase())]).unwrap()
}

fn generous_selector() -> FontSelector {
  FontSelector::new(vec![
    font("Ascii", |c| c.is_ascii_graphic()),
    font("Rest", |c| !c.is_ascii()),
  ])
  .unwrap()
}

proptest! {
  // Concatenating the run slices in order must reproduce the input exactly,
  // for any input and either policy.
  #[test]
  fn partition_is_exact(text in "\\PC{0,64}") {
    for policy in [MatchPolicy::FirstMatch, MatchPolicy::BestMatch] {
      let runs = segment_runs(&text, &generous_selector(), policy);
      assert_exact_partition(&runs, &text);
    }
  }

  // Same property under a near-empty font set: unmapped codepoints must be
  // carried by the fallback, never dropped, and segmentation must terminate.
  #[test]
  fn stingy_fonts_still_partition_exactly(text in "\\PC{0,64}") {
    for policy in [MatchPolicy::FirstMatch, MatchPolicy::BestMatch] {
      let runs = segment_runs(&text, &stingy_selector(), policy);
      assert_exact_partition(&runs, &text);
    }
  }

  // Adversarial mix of combining marks, controls, and astral-plane
  // codepoints around ordinary letters.
  #[test]
  fn adversarial_codepoints_terminate(
    pieces in prop::collection::vec(
      prop_oneof![
        Just("a"), Just(" "), Just("\u{0301}"), Just("\u{0302}"),
        Just("\u{200B}"), Just("\u{12000}"), Just("中"), Just("م"),
        Just("\u{FEFF}"), Just("\t"),
      ],
      0..32,
    )
  ) {
    let text: String = pieces.concat();
    for policy in [MatchPolicy::FirstMatch, MatchPolicy::BestMatch] {
      let runs = segment_runs(&text, &stingy_selector(), policy);
      assert_exact_partition(&runs, &text);
    }
  }

  // Every character produces at least one glyph somewhere: with 1:1 mock
  // fonts the total glyph count equals the char count.
  #[test]
  fn no_character_is_dropped(text in "\\PC{0,48}") {
    let runs = segment_runs(&text, &stingy_selector(), MatchPolicy::BestMatch);
    let glyphs: usize = runs.iter().map(|r| r.glyphs.len()).sum();
    assert_eq!(glyphs, text.chars().count());
  }
}

#[test]
fn diacritic_cluster_policies_diverge() {
  let selector = FontSelector::new(vec![
    font("Base", |c| c.is_ascii() && !c.is_whitespace() && !c.is_control()),
    font("Marks", |c| ('\u{0300}'..='\u{036F}').contains(&c)),
  ])
  .unwrap();
  let text = "L with accent: O\u{0302}\u{0301} abc";

  let best = segment_runs(text, &selector, MatchPolicy::BestMatch);
  assert_exact_partition(&best, text);
  assert!(
    best.iter().any(|r| r.text(text) == "O"),
    "best-match must isolate the base character"
  );
  assert!(
    best
      .iter()
      .any(|r| r.text(text).starts_with('\u{0302}') && r.font.name() == "Marks"),
    "best-match must bind the cluster to the marks font"
  );

  let first = segment_runs(text, &selector, MatchPolicy::FirstMatch);
  assert_exact_partition(&first, text);
  assert_eq!(
    first[0].text(text),
    "L with accent: O",
    "first-match must keep the base inside the long run"
  );
}

#[test]
fn whitespace_only_input_is_one_run() {
  let text = "   \t\n  ";
  for policy in [MatchPolicy::FirstMatch, MatchPolicy::BestMatch] {
    let runs = segment_runs(text, &stingy_selector(), policy);
    assert_eq!(runs.len(), 1);
    assert_eq!(runs[0].text(text), text);
  }
}

#[test]
fn empty_input_is_no_runs() {
  assert!(segment_runs("", &stingy_selector(), MatchPolicy::BestMatch).is_empty());
}

#[test]
fn mixed_scripts_split_into_script_pure_runs() {
  let selector = generous_selector();
  let text = "latin κείμενο العربية 中文";
  let runs = segment_runs(text, &selector, MatchPolicy::BestMatch);
  assert_exact_partition(&runs, text);
  assert!(runs.len() >= 4, "expected one run per script, got {runs:?}");
}
