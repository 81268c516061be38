// Export modules for library usage
pub mod analysis;
pub mod analyzers;
pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod diagnostics;
pub mod formatting;
pub mod io;
pub mod printer;
pub mod traversal;

// Re-export commonly used types
pub use crate::core::{
    Error, FileNode, ImportSpec, Language, LineIndex, Position, Result, SourceFile, Span,
    SyntaxNode,
};

pub use crate::analysis::{analyze_file, FileAnalysisState, WrapErrorPass};

pub use crate::analyzers::{get_analyzer, parse_file, Analyzer};

pub use crate::diagnostics::{
    apply::{apply_edits, apply_fixes},
    Diagnostic, Reporter, SuggestedFix, TextEdit,
};

pub use crate::io::output::{create_writer, FileReport, OutputFormat, OutputWriter};

pub use crate::traversal::{inspect, Action, NodeFilter};
