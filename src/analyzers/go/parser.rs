//! Tree-sitter parser integration for Go
//!
//! Parses Go source with the tree-sitter grammar and hands the concrete tree
//! to the lowering step.

use super::lower::lower_source_file;
use crate::core::{Error, Result, SourceFile};
use std::path::Path;
use tree_sitter::{Language as TsLanguage, Node, Parser, Tree};

fn get_language() -> TsLanguage {
    tree_sitter_go::LANGUAGE.into()
}

/// Parse Go source code into a tree-sitter tree.
pub fn parse_tree(content: &str, path: &Path) -> Result<Tree> {
    let mut parser = Parser::new();
    parser
        .set_language(&get_language())
        .map_err(|e| Error::Unsupported(format!("tree-sitter Go grammar: {e}")))?;

    let tree = parser
        .parse(content, None)
        .ok_or_else(|| Error::parse(path, 1, 1, "parser produced no tree"))?;

    if let Some(node) = first_error_node(&tree.root_node()) {
        let message = if node.is_missing() {
            format!("missing {}", node.kind())
        } else {
            format!("unexpected {:?}", truncate(node_text(&node, content), 40))
        };
        return Err(Error::parse(path, node_line(&node), node_column(&node), message));
    }

    Ok(tree)
}

/// Parse Go source code and lower it into a [`SourceFile`].
pub fn parse_source(content: &str, path: &Path) -> Result<SourceFile> {
    let tree = parse_tree(content, path)?;
    let root = lower_source_file(&tree.root_node(), content);
    log::trace!("Parsed {} ({} bytes)", path.display(), content.len());
    Ok(SourceFile::new(path.to_path_buf(), content.to_string(), root))
}

fn first_error_node<'t>(node: &Node<'t>) -> Option<Node<'t>> {
    if node.is_error() || node.is_missing() {
        return Some(*node);
    }
    if !node.has_error() {
        return None;
    }
    let mut cursor = node.walk();
    let children: Vec<Node<'t>> = node.children(&mut cursor).collect();
    children.iter().find_map(|child| first_error_node(child))
}

/// Get text for a tree-sitter node
pub fn node_text<'a>(node: &Node, source: &'a str) -> &'a str {
    source.get(node.start_byte()..node.end_byte()).unwrap_or("")
}

/// Get the line number for a tree-sitter node (1-indexed)
pub fn node_line(node: &Node) -> usize {
    node.start_position().row + 1
}

/// Get the column number for a tree-sitter node (1-indexed)
pub fn node_column(node: &Node) -> usize {
    node.start_position().column + 1
}

fn truncate(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => format!("{}...", &text[..idx]),
        None => text.to_string(),
    }
}
