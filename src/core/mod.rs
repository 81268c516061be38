pub mod ast;
pub mod errors;

use serde::Serialize;
use std::path::{Path, PathBuf};

pub use ast::{
    BinaryComparison, Call, ComparisonOp, Conditional, FileNode, Identifier, ImportGroup,
    ImportSpec, Literal, LiteralKind, MemberAccess, NodeKind, Other, ReturnStmt, SyntaxNode,
};
pub use errors::{Error, Result};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum Language {
    Go,
    Unknown,
}

impl Language {
    pub fn from_extension(ext: &str) -> Self {
        match ext {
            "go" => Language::Go,
            _ => Language::Unknown,
        }
    }

    pub fn from_path(path: &Path) -> Self {
        path.extension()
            .and_then(|ext| ext.to_str())
            .map(Self::from_extension)
            .unwrap_or(Language::Unknown)
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Language::Go => write!(f, "Go"),
            Language::Unknown => write!(f, "Unknown"),
        }
    }
}

/// Half-open byte range into a file's source text.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Source text covered by this span, or `""` when it falls outside `source`.
    pub fn slice<'a>(&self, source: &'a str) -> &'a str {
        source.get(self.start..self.end).unwrap_or("")
    }
}

/// A resolved source position. Line and column are 1-based; the column
/// counts bytes, matching how Go tooling reports positions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct Position {
    pub offset: usize,
    pub line: usize,
    pub column: usize,
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Position table for one file: byte offsets of every line start.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LineIndex {
    line_starts: Vec<usize>,
    len: usize,
}

impl LineIndex {
    pub fn new(text: &str) -> Self {
        let line_starts = std::iter::once(0)
            .chain(text.match_indices('\n').map(|(idx, _)| idx + 1))
            .collect();
        Self {
            line_starts,
            len: text.len(),
        }
    }

    /// Resolve a byte offset. Offsets past the end clamp to the end of the text.
    pub fn position(&self, offset: usize) -> Position {
        let offset = offset.min(self.len);
        let line = match self.line_starts.binary_search(&offset) {
            Ok(line) => line,
            Err(next) => next - 1,
        };
        Position {
            offset,
            line: line + 1,
            column: offset - self.line_starts[line] + 1,
        }
    }
}

/// One parsed source file, the unit the analysis pass runs over.
#[derive(Clone, Debug)]
pub struct SourceFile {
    pub path: PathBuf,
    pub text: String,
    pub lines: LineIndex,
    pub root: SyntaxNode,
}

impl SourceFile {
    pub fn new(path: PathBuf, text: String, root: SyntaxNode) -> Self {
        let lines = LineIndex::new(&text);
        Self {
            path,
            text,
            lines,
            root,
        }
    }

    pub fn position(&self, offset: usize) -> Position {
        self.lines.position(offset)
    }

    /// The File node at the root, if the front end produced one.
    pub fn file_node(&self) -> Option<&FileNode> {
        match &self.root {
            SyntaxNode::File(file) => Some(file),
            _ => None,
        }
    }

    /// Dependency declarations in the order they were written.
    pub fn imports(&self) -> &[ImportSpec] {
        self.file_node().map(|f| f.imports.as_slice()).unwrap_or(&[])
    }
}
