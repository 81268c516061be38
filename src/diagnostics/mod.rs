//! Diagnostics, suggested fixes and text edits produced by analysis passes.
//!
//! A [`Diagnostic`] is advisory: it points at a source position, explains
//! what was found, and carries zero or more [`SuggestedFix`] values whose
//! [`TextEdit`]s can be applied mechanically with [`apply_edits`].

pub mod apply;

pub use apply::{apply_edits, apply_fixes, collect_edits};

use crate::core::Position;
use serde::Serialize;

/// Replace the half-open byte range `start..end` with `new_text`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct TextEdit {
    pub start: usize,
    pub end: usize,
    pub new_text: String,
}

impl TextEdit {
    pub fn new(start: usize, end: usize, new_text: impl Into<String>) -> Self {
        Self {
            start,
            end,
            new_text: new_text.into(),
        }
    }

    pub fn overlaps(&self, other: &TextEdit) -> bool {
        self.start < other.end && other.start < self.end
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SuggestedFix {
    pub message: String,
    pub edits: Vec<TextEdit>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    /// Name of the pass that produced the finding.
    pub analyzer: &'static str,
    pub position: Position,
    pub message: String,
    pub suggested_fixes: Vec<SuggestedFix>,
}

/// Receives diagnostics in the order a pass discovers them.
pub trait Reporter {
    fn report(&mut self, diagnostic: Diagnostic);
}

impl Reporter for Vec<Diagnostic> {
    fn report(&mut self, diagnostic: Diagnostic) {
        self.push(diagnostic);
    }
}
