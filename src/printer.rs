//! Renders syntax nodes back to Go source text.
//!
//! Output follows gofmt spacing for the constructs the pass synthesizes.
//! Every parsed expression with a span is printed as its original source
//! slice, so rendering a parsed expression never changes it. Return
//! statements and import declarations are always laid out from their parts.

use crate::core::{ImportGroup, ImportSpec, ReturnStmt, SyntaxNode};

/// Render `node`, resolving spans against `source`.
pub fn render(node: &SyntaxNode, source: &str) -> String {
    let mut out = String::new();
    write_node(&mut out, node, source);
    out
}

fn write_node(out: &mut String, node: &SyntaxNode, source: &str) {
    match node {
        SyntaxNode::Return(ret) => write_return(out, ret, source),
        SyntaxNode::ImportGroup(group) => write_import_group(out, group),
        // parsed expressions keep their exact text, type arguments and
        // line breaks included
        _ => match node.span() {
            Some(span) => out.push_str(span.slice(source)),
            None => write_synthesized(out, node, source),
        },
    }
}

fn write_synthesized(out: &mut String, node: &SyntaxNode, source: &str) {
    match node {
        SyntaxNode::Identifier(ident) => out.push_str(&ident.name),
        SyntaxNode::Literal(lit) => out.push_str(&lit.text),
        SyntaxNode::MemberAccess(access) => {
            write_node(out, &access.operand, source);
            out.push('.');
            out.push_str(&access.member.name);
        }
        SyntaxNode::Call(call) => {
            write_node(out, &call.callee, source);
            out.push('(');
            write_list(out, &call.args, source);
            out.push(')');
        }
        SyntaxNode::BinaryComparison(cmp) => {
            write_node(out, &cmp.left, source);
            out.push(' ');
            out.push_str(cmp.op.as_str());
            out.push(' ');
            write_node(out, &cmp.right, source);
        }
        // only the parser builds these, always with a span
        _ => {}
    }
}

fn write_list(out: &mut String, nodes: &[SyntaxNode], source: &str) {
    for (i, node) in nodes.iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        write_node(out, node, source);
    }
}

fn write_return(out: &mut String, ret: &ReturnStmt, source: &str) {
    out.push_str("return");
    if !ret.results.is_empty() {
        out.push(' ');
        write_list(out, &ret.results, source);
    }
}

fn write_import_group(out: &mut String, group: &ImportGroup) {
    out.push_str("import ");
    if !group.parenthesized && group.specs.len() == 1 {
        write_import_spec(out, &group.specs[0]);
        return;
    }

    out.push_str("(\n");
    let mut previous_line: Option<usize> = None;
    for spec in &group.specs {
        // Keep the blank lines that separate groups of original specs.
        if let (Some(prev), Some(line)) = (previous_line, spec.line) {
            if line > prev + 1 {
                out.push('\n');
            }
        }
        out.push('\t');
        write_import_spec(out, spec);
        out.push('\n');
        previous_line = spec.line.or(previous_line);
    }
    out.push(')');
}

fn write_import_spec(out: &mut String, spec: &ImportSpec) {
    if let Some(name) = &spec.name {
        out.push_str(name);
        out.push(' ');
    }
    out.push_str(&spec.path);
}
