//! Lowering from the tree-sitter concrete tree to [`SyntaxNode`].

use super::parser::{node_line, node_text};
use crate::core::{
    BinaryComparison, Call, ComparisonOp, Conditional, FileNode, Identifier, ImportGroup,
    ImportSpec, Literal, LiteralKind, MemberAccess, Other, ReturnStmt, Span, SyntaxNode,
};
use tree_sitter::Node;

fn span_of(node: &Node) -> Option<Span> {
    Some(Span::new(node.start_byte(), node.end_byte()))
}

fn named_children<'t>(node: &Node<'t>) -> Vec<Node<'t>> {
    let mut cursor = node.walk();
    node.named_children(&mut cursor)
        .filter(|child| child.kind() != "comment")
        .collect()
}

/// Lower a `source_file` node.
pub fn lower_source_file(root: &Node, source: &str) -> SyntaxNode {
    let mut package = None;
    let mut imports = Vec::new();
    let mut decls = Vec::new();

    for child in named_children(root) {
        match child.kind() {
            "package_clause" => {
                package = named_children(&child)
                    .first()
                    .map(|name| node_text(name, source).to_string());
            }
            "import_declaration" => {
                let group = lower_import_declaration(&child, source);
                imports.extend(group.specs.iter().cloned());
                decls.push(SyntaxNode::ImportGroup(group));
            }
            _ => decls.push(lower(&child, source)),
        }
    }

    SyntaxNode::File(FileNode {
        span: span_of(root),
        package,
        imports,
        decls,
    })
}

fn lower_import_declaration(node: &Node, source: &str) -> ImportGroup {
    let mut parenthesized = false;
    let mut specs = Vec::new();

    for child in named_children(node) {
        match child.kind() {
            "import_spec" => specs.push(lower_import_spec(&child, source)),
            "import_spec_list" => {
                parenthesized = true;
                specs.extend(
                    named_children(&child)
                        .iter()
                        .filter(|spec| spec.kind() == "import_spec")
                        .map(|spec| lower_import_spec(spec, source)),
                );
            }
            _ => {}
        }
    }

    ImportGroup {
        span: span_of(node),
        parenthesized,
        specs,
    }
}

fn lower_import_spec(node: &Node, source: &str) -> ImportSpec {
    ImportSpec {
        span: span_of(node),
        line: Some(node_line(node)),
        name: node
            .child_by_field_name("name")
            .map(|name| node_text(&name, source).to_string()),
        path: node
            .child_by_field_name("path")
            .map(|path| node_text(&path, source).to_string())
            .unwrap_or_default(),
    }
}

/// Lower any node below the file level.
pub fn lower(node: &Node, source: &str) -> SyntaxNode {
    match node.kind() {
        "if_statement" => lower_if(node, source),
        "return_statement" => SyntaxNode::Return(ReturnStmt {
            span: span_of(node),
            results: named_children(node)
                .iter()
                .filter(|child| child.kind() == "expression_list")
                .flat_map(|list| named_children(list))
                .map(|expr| lower(&expr, source))
                .collect(),
        }),
        "identifier" | "field_identifier" | "package_identifier" | "type_identifier" => {
            SyntaxNode::Identifier(Identifier {
                span: span_of(node),
                name: node_text(node, source).to_string(),
            })
        }
        "selector_expression" => lower_selector(node, source),
        "binary_expression" => lower_binary(node, source),
        "call_expression" => lower_call(node, source),
        kind => match literal_kind(kind) {
            Some(kind) => SyntaxNode::Literal(Literal {
                span: span_of(node),
                kind,
                text: node_text(node, source).to_string(),
            }),
            None => lower_other(node, source),
        },
    }
}

fn literal_kind(kind: &str) -> Option<LiteralKind> {
    match kind {
        "nil" => Some(LiteralKind::Nil),
        "true" | "false" => Some(LiteralKind::Bool),
        "iota" => Some(LiteralKind::Iota),
        "int_literal" => Some(LiteralKind::Int),
        "float_literal" => Some(LiteralKind::Float),
        "imaginary_literal" => Some(LiteralKind::Imaginary),
        "rune_literal" => Some(LiteralKind::Rune),
        "interpreted_string_literal" | "raw_string_literal" => Some(LiteralKind::String),
        _ => None,
    }
}

fn lower_other(node: &Node, source: &str) -> SyntaxNode {
    SyntaxNode::Other(Other {
        span: span_of(node),
        kind: node.kind().to_string(),
        children: named_children(node)
            .iter()
            .map(|child| lower(child, source))
            .collect(),
    })
}

fn lower_if(node: &Node, source: &str) -> SyntaxNode {
    let field = |name: &str| node.child_by_field_name(name);

    let Some(condition) = field("condition") else {
        return lower_other(node, source);
    };

    SyntaxNode::Conditional(Conditional {
        span: span_of(node),
        init: field("initializer").map(|init| Box::new(lower(&init, source))),
        condition: Box::new(lower(&condition, source)),
        body: field("consequence")
            .map(|block| block_statements(&block, source))
            .unwrap_or_default(),
        alternative: field("alternative").map(|alt| Box::new(lower(&alt, source))),
    })
}

/// Statements written directly inside a block. Newer grammar versions wrap
/// them in a `statement_list` node, which is flattened here.
fn block_statements(block: &Node, source: &str) -> Vec<SyntaxNode> {
    named_children(block)
        .iter()
        .flat_map(|child| {
            if child.kind() == "statement_list" {
                named_children(child)
            } else {
                vec![*child]
            }
        })
        .map(|stmt| lower(&stmt, source))
        .collect()
}

fn lower_selector(node: &Node, source: &str) -> SyntaxNode {
    match (
        node.child_by_field_name("operand"),
        node.child_by_field_name("field"),
    ) {
        (Some(operand), Some(field)) => SyntaxNode::MemberAccess(MemberAccess {
            span: span_of(node),
            operand: Box::new(lower(&operand, source)),
            member: Identifier {
                span: span_of(&field),
                name: node_text(&field, source).to_string(),
            },
        }),
        _ => lower_other(node, source),
    }
}

fn lower_binary(node: &Node, source: &str) -> SyntaxNode {
    let op = node
        .child_by_field_name("operator")
        .and_then(|op| ComparisonOp::from_token(op.kind()));

    match (
        node.child_by_field_name("left"),
        op,
        node.child_by_field_name("right"),
    ) {
        (Some(left), Some(op), Some(right)) => SyntaxNode::BinaryComparison(BinaryComparison {
            span: span_of(node),
            left: Box::new(lower(&left, source)),
            op,
            right: Box::new(lower(&right, source)),
        }),
        _ => lower_other(node, source),
    }
}

fn lower_call(node: &Node, source: &str) -> SyntaxNode {
    let Some(function) = node.child_by_field_name("function") else {
        return lower_other(node, source);
    };

    let args = node
        .child_by_field_name("arguments")
        .map(|list| {
            named_children(&list)
                .iter()
                .map(|arg| lower(arg, source))
                .collect()
        })
        .unwrap_or_default();

    SyntaxNode::Call(Call {
        span: span_of(node),
        callee: Box::new(lower(&function, source)),
        args,
    })
}
