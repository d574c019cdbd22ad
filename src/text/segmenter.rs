//! Greedy text-to-font-run partitioning
//!
//! [`segment_runs`] walks the text once, binding each maximal slice to the
//! first candidate font that can actually render it. Two policies exist:
//! first-match never revisits the choice while a run extends (fewer, longer
//! runs), best-match rechecks every character and drives the diacritic
//! attachment machinery (more accurate, may fragment runs).
//!
//! The output partitions the input exactly: concatenating the run ranges in
//! order reproduces the text, with no gaps and no overlaps. Characters no
//! candidate can map are still emitted, through the best-overall font's
//! `append_any_glyph` escape hatch, so segmentation never fails and every
//! outer-loop iteration consumes at least one character.

use crate::font::{FontRef, FontSelector, GlyphLine};
use crate::text::classify::{is_combining_mark, is_significant};
use crate::text::script::Script;
use std::ops::Range;
use std::sync::Arc;

/// Font-matching policy for run extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchPolicy {
  /// Keep the run's font until a significant script change. Never rechecks
  /// per character; favors fewer, longer runs.
  FirstMatch,
  /// Recheck the best font for every significant character and handle
  /// diacritic clusters whose best font differs from the base character's.
  BestMatch,
}

/// A maximal contiguous slice of the source text bound to one font.
#[derive(Debug, Clone)]
pub struct ShapedRun {
  /// Byte range into the source text
  pub range: Range<usize>,
  /// The font this run is bound to
  pub font: FontRef,
  /// Shaped glyphs for the run
  pub glyphs: GlyphLine,
}

impl ShapedRun {
  /// The run's slice of the source text.
  pub fn text<'a>(&self, source: &'a str) -> &'a str {
    &source[self.range.clone()]
  }
}

/// Why the extension scan stopped.
enum ScanStop {
  /// Extend no further; the run ends at the given char position (exclusive).
  Break(usize),
  /// A diacritic whose best font differs forced a break; the run end
  /// retracts past the preceding base character, and the diacritic position
  /// drives font resolution on the next outer iteration.
  RetreatBeforeBase { end: usize, diacritic: usize },
  /// Ran off the end of the text.
  EndOfText,
}

/// Partitions `text` into maximal font-bound runs.
///
/// Runs cover the input exactly, in order. Empty input yields an empty list;
/// input with no significant character at all (e.g. all whitespace) yields a
/// single run bound to the selector's best-overall font.
pub fn segment_runs(text: &str, selector: &FontSelector, policy: MatchPolicy) -> Vec<ShapedRun> {
  let chars: Vec<(usize, char)> = text.char_indices().collect();
  let n = chars.len();
  let byte_at = |pos: usize| -> usize {
    if pos < n {
      chars[pos].0
    } else {
      text.len()
    }
  };

  let mut runs: Vec<ShapedRun> = Vec::new();
  let mut i = 0usize;
  // Set when a diacritic break retreated past its base character: the next
  // resolution happens at the diacritic, not at the significant index.
  let mut pending_diacritic: Option<usize> = None;

  while i < n {
    let sig = (i..n).find(|&j| is_significant(chars[j].1)).unwrap_or(n);

    let resolved = if sig < n {
      let probe = pending_diacritic.take().unwrap_or(sig);
      selector.resolve(chars[probe].1)
    } else {
      None
    };

    let Some(font_idx) = resolved else {
      i = emit_fallback(text, &chars, i, sig, selector, &mut runs);
      continue;
    };

    let (end, retreat) = match scan_extension(&chars, sig, font_idx, selector, policy) {
      ScanStop::Break(end) => (end, None),
      ScanStop::RetreatBeforeBase { end, diacritic } => (end, Some(diacritic)),
      ScanStop::EndOfText => (n, None),
    };
    pending_diacritic = retreat;

    if end <= i {
      // The retraction emptied the run (the diacritic sat right after the
      // run start). Nothing to emit; the pending diacritic re-resolves on
      // the next iteration.
      continue;
    }

    let font = selector.candidate(font_idx);
    let mut glyphs = GlyphLine::new();
    let consumed = font.append_glyphs(&text[byte_at(i)..byte_at(end)], &mut glyphs);
    if consumed > 0 {
      font.replace_special_whitespace(&mut glyphs);
      runs.push(ShapedRun {
        range: byte_at(i)..byte_at(i + consumed),
        font: Arc::clone(font),
        glyphs,
      });
      i += consumed;
    } else {
      // The resolved font refused the run's leading character (a diacritic
      // font asked to carry its base, say). Forward progress comes from the
      // best-overall fallback instead.
      log::trace!(
        "font {} consumed nothing at char {}; using best-overall fallback",
        font.name(),
        i
      );
      pending_diacritic = None;
      i = emit_fallback(text, &chars, i, sig, selector, &mut runs);
    }
  }

  runs
}

/// Scans forward from the significant index, deciding where the run ends.
///
/// The per-character font recheck and the diacritic machinery only run under
/// [`MatchPolicy::BestMatch`]; both policies break on a significant script
/// change.
fn scan_extension(
  chars: &[(usize, char)],
  sig: usize,
  run_font: usize,
  selector: &FontSelector,
  policy: MatchPolicy,
) -> ScanStop {
  let n = chars.len();
  let mut run_script: Option<Script> = None;
  let first_script = Script::detect(chars[sig].1);
  if !first_script.is_neutral() {
    run_script = Some(first_script);
  }

  let mut in_diacritic_cluster = false;
  let mut j = sig + 1;
  while j < n {
    let c = chars[j].1;
    if !is_significant(c) {
      in_diacritic_cluster = false;
      j += 1;
      continue;
    }

    if policy == MatchPolicy::BestMatch {
      if is_combining_mark(c) {
        if let Some(best) = selector.resolve(c) {
          if best != run_font && !in_diacritic_cluster {
            // First diacritic of a cluster with a different best font:
            // retract past the base so base + cluster are re-evaluated
            // together on the next outer iteration.
            return ScanStop::RetreatBeforeBase {
              end: j - 1,
              diacritic: j,
            };
          }
          // Later diacritics of the cluster ride under the same decision.
        }
        in_diacritic_cluster = true;
        j += 1;
        continue;
      }
      in_diacritic_cluster = false;
      if let Some(best) = selector.resolve(c) {
        if best != run_font {
          return ScanStop::Break(j);
        }
      }
      // Characters no candidate resolves stay in the scan; shaping stops at
      // them naturally and the next iteration picks them up.
    } else {
      in_diacritic_cluster = false;
    }

    let script = Script::detect(c);
    if !script.is_neutral() {
      match run_script {
        None => run_script = Some(script),
        Some(current) if current != script => return ScanStop::Break(j),
        Some(_) => {}
      }
    }
    j += 1;
  }

  ScanStop::EndOfText
}

/// Emits one run through the best-overall font, guaranteeing progress past
/// the significant index (or to the end of text when there is none).
///
/// First shapes the non-significant prefix `[start, sig)` with
/// `append_glyphs`, then forces glyphs one character at a time with
/// `append_any_glyph` until the position passes `sig`. Returns the new
/// position.
fn emit_fallback(
  text: &str,
  chars: &[(usize, char)],
  start: usize,
  sig: usize,
  selector: &FontSelector,
  runs: &mut Vec<ShapedRun>,
) -> usize {
  let n = chars.len();
  let byte_at = |pos: usize| -> usize {
    if pos < n {
      chars[pos].0
    } else {
      text.len()
    }
  };

  let font = selector.best_overall();
  let mut glyphs = GlyphLine::new();
  let mut pos = start;

  if sig > pos {
    pos += font.append_glyphs(&text[byte_at(pos)..byte_at(sig)], &mut glyphs);
  }

  while pos <= sig && pos < n {
    let consumed = font.append_any_glyph(&text[byte_at(pos)..], &mut glyphs);
    debug_assert!(
      consumed >= 1,
      "append_any_glyph must consume at least one char while input remains"
    );
    if consumed == 0 {
      // Contract violation. Swallow the remainder as one run instead of
      // spinning forever.
      log::error!(
        "font {} violated the append_any_glyph contract at char {}",
        font.name(),
        pos
      );
      pos = n;
      break;
    }
    pos += consumed;
  }

  if pos > start {
    font.replace_special_whitespace(&mut glyphs);
    runs.push(ShapedRun {
      range: byte_at(start)..byte_at(pos),
      font: Arc::clone(font),
      glyphs,
    });
  }
  pos
}
