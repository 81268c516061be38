//! `wrap_error`: error sentinels returned without the triggering error.
//!
//! Finds
//!
//! ```go
//! if err != nil {
//!     return nil, ErrOpenFile
//! }
//! ```
//!
//! and suggests `return nil, errors.Wrap(ErrOpenFile, err.Error())`, plus one
//! edit per file adding `github.com/pkg/errors` to the first import
//! declaration. When the file already imports some other package whose path
//! ends in `errors`, the library is imported and referenced as `errorsPkg`.
//!
//! Per-file processing runs as a small state machine driven by the
//! traversal: visiting the File node resets [`FileAnalysisState`] and
//! computes the conflict flag, visiting each conditional emits site
//! diagnostics, and leaving the File node emits the import diagnostic if
//! any site was found. Detection is syntactic only; see [`matcher`].

pub mod conflict;
pub mod matcher;
pub mod synthesizer;

use crate::core::{Error, FileNode, NodeKind, Result, SourceFile, SyntaxNode};
use crate::diagnostics::{Diagnostic, Reporter};
use crate::traversal::{inspect, Action, NodeFilter};

pub const ANALYZER_NAME: &str = "wrap_error";
pub const ANALYZER_DOC: &str =
    "check that new errors wrap context from existing errors in the call stack";

/// Import path of the error-wrapping library.
pub const WRAP_LIBRARY_PATH: &str = "github.com/pkg/errors";
/// Name the library is referenced by when imported without an alias.
pub const WRAP_LIBRARY_QUALIFIER: &str = "errors";
/// Alias used when another `...errors` import is already present.
pub const WRAP_LIBRARY_ALIAS: &str = "errorsPkg";
/// Final name segment prefix marking an error sentinel.
pub const ERROR_SENTINEL_PREFIX: &str = "Err";
/// Variable the triggering error is expected in.
pub const ERROR_VARIABLE: &str = "err";

/// Mutable bookkeeping for the file currently being traversed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FileAnalysisState {
    /// At least one site fix was produced.
    pub modified: bool,
    pub dependency_name_conflict: bool,
}

impl FileAnalysisState {
    pub fn begin(file: &FileNode) -> Self {
        Self {
            modified: false,
            dependency_name_conflict: conflict::has_dependency_name_conflict(&file.imports),
        }
    }

    pub fn qualifier(&self) -> &'static str {
        synthesizer::qualifier(self.dependency_name_conflict)
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct WrapErrorPass;

impl WrapErrorPass {
    pub fn new() -> Self {
        Self
    }

    pub fn name(&self) -> &'static str {
        ANALYZER_NAME
    }

    pub fn doc(&self) -> &'static str {
        ANALYZER_DOC
    }

    /// Node kinds the pass subscribes to.
    pub fn node_filter(&self) -> NodeFilter {
        NodeFilter::only(&[NodeKind::File, NodeKind::Conditional])
    }

    /// Diagnostics for `file` in discovery order: site diagnostics as found,
    /// then at most one import diagnostic.
    ///
    /// Fails with [`Error::MissingImportDeclaration`] when a site was found
    /// but the file has no import declaration to extend; the site
    /// diagnostics of that file are dropped with it.
    pub fn analyze(&self, file: &SourceFile) -> Result<Vec<Diagnostic>> {
        let mut diagnostics = Vec::new();
        let mut state = FileAnalysisState::default();
        let mut failure: Option<Error> = None;

        inspect(&file.root, self.node_filter(), |node, action| {
            match (node, action) {
                (SyntaxNode::File(node), Action::Visit) => {
                    state = FileAnalysisState::begin(node);
                    log::trace!(
                        "{}: dependency name conflict = {}",
                        file.path.display(),
                        state.dependency_name_conflict
                    );
                }
                (SyntaxNode::File(node), Action::Leave) => {
                    if state.modified {
                        match synthesizer::dependency_diagnostic(
                            node,
                            state.dependency_name_conflict,
                            file,
                        ) {
                            Ok(diagnostic) => diagnostics.push(diagnostic),
                            Err(e) => failure = Some(e),
                        }
                    }
                }
                (SyntaxNode::Conditional(cond), Action::Visit) => {
                    for site in matcher::find_sites(cond) {
                        if let Some(diagnostic) =
                            synthesizer::site_diagnostic(&site, state.qualifier(), file)
                        {
                            log::debug!(
                                "{}:{}: unwrapped {}",
                                file.path.display(),
                                diagnostic.position,
                                site.sentinel.name
                            );
                            diagnostics.push(diagnostic);
                            state.modified = true;
                        }
                    }
                }
                _ => {}
            }
            true
        });

        match failure {
            Some(e) => Err(e),
            None => Ok(diagnostics),
        }
    }

    /// Run the pass and hand its diagnostics to `reporter`.
    pub fn run(&self, file: &SourceFile, reporter: &mut dyn Reporter) -> Result<usize> {
        let diagnostics = self.analyze(file)?;
        let count = diagnostics.len();
        for diagnostic in diagnostics {
            reporter.report(diagnostic);
        }
        Ok(count)
    }
}

/// Convenience wrapper around [`WrapErrorPass::analyze`].
pub fn analyze_file(file: &SourceFile) -> Result<Vec<Diagnostic>> {
    WrapErrorPass::new().analyze(file)
}
