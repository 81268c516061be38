//! Go front end: tree-sitter parsing and lowering into the owned syntax tree.

pub mod lower;
pub mod parser;

pub use parser::{parse_source, parse_tree};

use super::Analyzer;
use crate::core::{Language, Result, SourceFile};
use std::path::PathBuf;

#[derive(Clone, Copy, Debug, Default)]
pub struct GoAnalyzer;

impl GoAnalyzer {
    pub fn new() -> Self {
        Self
    }
}

impl Analyzer for GoAnalyzer {
    fn parse(&self, content: &str, path: PathBuf) -> Result<SourceFile> {
        parse_source(content, &path)
    }

    fn language(&self) -> Language {
        Language::Go
    }
}
