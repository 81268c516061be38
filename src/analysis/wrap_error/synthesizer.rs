//! Builds replacement fragments and renders them into suggested fixes.
//!
//! Nothing here mutates the parsed tree: every fix is a freshly built node
//! rendered to text, with an edit spanning the whole original statement or
//! import declaration.

use super::matcher::Site;
use super::{ANALYZER_NAME, WRAP_LIBRARY_ALIAS, WRAP_LIBRARY_PATH, WRAP_LIBRARY_QUALIFIER};
use crate::core::{
    Error, FileNode, ImportGroup, ImportSpec, Result, ReturnStmt, SourceFile, SyntaxNode,
};
use crate::diagnostics::{Diagnostic, SuggestedFix, TextEdit};
use crate::printer::render;

/// Qualifier the wrap call is made through.
pub fn qualifier(dependency_name_conflict: bool) -> &'static str {
    if dependency_name_conflict {
        WRAP_LIBRARY_ALIAS
    } else {
        WRAP_LIBRARY_QUALIFIER
    }
}

/// `<qualifier>.Wrap(<value>, err.Error())`
pub fn wrap_call(value: SyntaxNode, qualifier: &str) -> SyntaxNode {
    SyntaxNode::call(
        SyntaxNode::member(SyntaxNode::ident(qualifier), "Wrap"),
        vec![
            value,
            SyntaxNode::call(
                SyntaxNode::member(SyntaxNode::ident(super::ERROR_VARIABLE), "Error"),
                vec![],
            ),
        ],
    )
}

/// Copy of `ret` with its final result wrapped.
pub fn wrapped_return(ret: &ReturnStmt, qualifier: &str) -> ReturnStmt {
    let mut results = ret.results.clone();
    if let Some(last) = results.pop() {
        results.push(wrap_call(last, qualifier));
    }
    ReturnStmt {
        span: ret.span,
        results,
    }
}

/// Diagnostic for one unwrapped return. `None` if the statement has no
/// source span to replace.
pub fn site_diagnostic(site: &Site<'_>, qualifier: &str, file: &SourceFile) -> Option<Diagnostic> {
    let span = site.statement.span?;
    let original = SyntaxNode::Return(site.statement.clone());
    let suggested = SyntaxNode::Return(wrapped_return(site.statement, qualifier));

    let old = render(&original, &file.text);
    let new = render(&suggested, &file.text);

    Some(Diagnostic {
        analyzer: ANALYZER_NAME,
        position: file.position(span.start),
        message: format!("unwrapped error found '{old}'"),
        suggested_fixes: vec![SuggestedFix {
            message: format!("should replace '{old}' with '{new}'"),
            edits: vec![TextEdit::new(span.start, span.end, new)],
        }],
    })
}

/// First import declaration of the file.
pub fn find_import_group(file: &FileNode) -> Option<&ImportGroup> {
    file.decls.iter().find_map(|decl| match decl {
        SyntaxNode::ImportGroup(group) => Some(group),
        _ => None,
    })
}

/// Copy of `group` with the wrapping library appended.
pub fn extended_import_group(group: &ImportGroup, dependency_name_conflict: bool) -> ImportGroup {
    let name = dependency_name_conflict.then_some(WRAP_LIBRARY_ALIAS);
    let mut specs = group.specs.clone();
    specs.push(ImportSpec::new(name, WRAP_LIBRARY_PATH));
    ImportGroup {
        span: group.span,
        parenthesized: group.parenthesized,
        specs,
    }
}

/// Diagnostic adding the wrapping library to the file's first import
/// declaration.
pub fn dependency_diagnostic(
    node: &FileNode,
    dependency_name_conflict: bool,
    file: &SourceFile,
) -> Result<Diagnostic> {
    let missing = || Error::MissingImportDeclaration {
        file: file.path.clone(),
        library: WRAP_LIBRARY_PATH.to_string(),
    };
    let group = find_import_group(node).ok_or_else(missing)?;
    let span = group.span.ok_or_else(missing)?;

    let extended = SyntaxNode::ImportGroup(extended_import_group(group, dependency_name_conflict));
    let message = format!("adding \"{WRAP_LIBRARY_PATH}\" import");

    Ok(Diagnostic {
        analyzer: ANALYZER_NAME,
        position: file.position(span.start),
        message: message.clone(),
        suggested_fixes: vec![SuggestedFix {
            message,
            edits: vec![TextEdit::new(span.start, span.end, render(&extended, &file.text))],
        }],
    })
}
