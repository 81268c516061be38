//! Application of suggested fixes to source text.

use super::{Diagnostic, TextEdit};
use crate::core::{Error, Result};

/// The edits of the first suggested fix of every diagnostic.
pub fn collect_edits(diagnostics: &[Diagnostic]) -> Vec<TextEdit> {
    diagnostics
        .iter()
        .filter_map(|d| d.suggested_fixes.first())
        .flat_map(|fix| fix.edits.iter().cloned())
        .collect()
}

/// Apply the first suggested fix of every diagnostic to `text`.
pub fn apply_fixes(text: &str, diagnostics: &[Diagnostic]) -> Result<String> {
    apply_edits(text, collect_edits(diagnostics))
}

/// Apply `edits` to `text`.
///
/// Edits may arrive in any order. Identical duplicates are applied once;
/// any other pair of overlapping edits is rejected, as is a range that is
/// out of bounds or splits a UTF-8 character.
pub fn apply_edits(text: &str, mut edits: Vec<TextEdit>) -> Result<String> {
    edits.sort_by(|a, b| (a.start, a.end, &a.new_text).cmp(&(b.start, b.end, &b.new_text)));
    edits.dedup();

    for edit in &edits {
        let in_bounds = edit.start <= edit.end && edit.end <= text.len();
        if !in_bounds || !text.is_char_boundary(edit.start) || !text.is_char_boundary(edit.end) {
            return Err(Error::InvalidEdit {
                start: edit.start,
                end: edit.end,
                len: text.len(),
            });
        }
    }

    for pair in edits.windows(2) {
        let (first, second) = (&pair[0], &pair[1]);
        if first.overlaps(second) || (first.start == second.start && first.end == second.end) {
            return Err(Error::OverlappingEdits {
                first_start: first.start,
                first_end: first.end,
                second_start: second.start,
                second_end: second.end,
            });
        }
    }

    let mut out = String::with_capacity(text.len());
    let mut cursor = 0;
    for edit in &edits {
        out.push_str(&text[cursor..edit.start]);
        out.push_str(&edit.new_text);
        cursor = edit.end;
    }
    out.push_str(&text[cursor..]);
    Ok(out)
}
