//! Owned syntax tree the analysis pass runs over.
//!
//! The Go front end lowers its concrete tree into these nodes. Only the
//! constructs the pass reasons about get their own variant; everything else
//! becomes [`SyntaxNode::Other`], which keeps its span and its lowered
//! children so traversal still reaches conditionals nested in function
//! bodies and closures.
//!
//! Nodes built by the pass itself (the wrap call, the extended import
//! declaration) carry no span.

use super::Span;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NodeKind {
    File,
    Conditional,
    Return,
    ImportGroup,
    Identifier,
    MemberAccess,
    BinaryComparison,
    Literal,
    Call,
    Other,
}

#[derive(Clone, Debug, PartialEq)]
pub enum SyntaxNode {
    File(FileNode),
    Conditional(Conditional),
    Return(ReturnStmt),
    ImportGroup(ImportGroup),
    Identifier(Identifier),
    MemberAccess(MemberAccess),
    BinaryComparison(BinaryComparison),
    Literal(Literal),
    Call(Call),
    Other(Other),
}

#[derive(Clone, Debug, PartialEq)]
pub struct FileNode {
    pub span: Option<Span>,
    pub package: Option<String>,
    /// Every import spec of every import declaration, in source order.
    pub imports: Vec<ImportSpec>,
    /// Top-level declarations, import declarations included.
    pub decls: Vec<SyntaxNode>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Conditional {
    pub span: Option<Span>,
    pub init: Option<Box<SyntaxNode>>,
    pub condition: Box<SyntaxNode>,
    /// Statements written directly inside the braces.
    pub body: Vec<SyntaxNode>,
    pub alternative: Option<Box<SyntaxNode>>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ReturnStmt {
    pub span: Option<Span>,
    pub results: Vec<SyntaxNode>,
}

/// An `import` declaration.
#[derive(Clone, Debug, PartialEq)]
pub struct ImportGroup {
    pub span: Option<Span>,
    pub parenthesized: bool,
    pub specs: Vec<ImportSpec>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImportSpec {
    pub span: Option<Span>,
    /// 1-based line the spec was written on.
    pub line: Option<usize>,
    pub name: Option<String>,
    /// Path as written, quotes included.
    pub path: String,
}

impl ImportSpec {
    pub fn new(name: Option<&str>, path: &str) -> Self {
        Self {
            span: None,
            line: None,
            name: name.map(str::to_string),
            path: format!("\"{path}\""),
        }
    }

    pub fn unquoted_path(&self) -> &str {
        self.path.trim_matches(|c| c == '"' || c == '`')
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Identifier {
    pub span: Option<Span>,
    pub name: String,
}

impl Identifier {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            span: None,
            name: name.into(),
        }
    }
}

/// `operand.member`. The member is not walked as a separate child.
#[derive(Clone, Debug, PartialEq)]
pub struct MemberAccess {
    pub span: Option<Span>,
    pub operand: Box<SyntaxNode>,
    pub member: Identifier,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ComparisonOp {
    Eq,
    NotEq,
    Lt,
    LtEq,
    Gt,
    GtEq,
}

impl ComparisonOp {
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "==" => Some(Self::Eq),
            "!=" => Some(Self::NotEq),
            "<" => Some(Self::Lt),
            "<=" => Some(Self::LtEq),
            ">" => Some(Self::Gt),
            ">=" => Some(Self::GtEq),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Eq => "==",
            Self::NotEq => "!=",
            Self::Lt => "<",
            Self::LtEq => "<=",
            Self::Gt => ">",
            Self::GtEq => ">=",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct BinaryComparison {
    pub span: Option<Span>,
    pub left: Box<SyntaxNode>,
    pub op: ComparisonOp,
    pub right: Box<SyntaxNode>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LiteralKind {
    /// The zero value for pointers, interfaces, maps, slices, channels and funcs.
    Nil,
    Bool,
    Iota,
    Int,
    Float,
    Imaginary,
    Rune,
    String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Literal {
    pub span: Option<Span>,
    pub kind: LiteralKind,
    pub text: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Call {
    pub span: Option<Span>,
    pub callee: Box<SyntaxNode>,
    pub args: Vec<SyntaxNode>,
}

/// Any construct outside the pass's vocabulary.
#[derive(Clone, Debug, PartialEq)]
pub struct Other {
    pub span: Option<Span>,
    /// Grammar node kind, e.g. `function_declaration`.
    pub kind: String,
    pub children: Vec<SyntaxNode>,
}

impl SyntaxNode {
    pub fn kind(&self) -> NodeKind {
        match self {
            Self::File(_) => NodeKind::File,
            Self::Conditional(_) => NodeKind::Conditional,
            Self::Return(_) => NodeKind::Return,
            Self::ImportGroup(_) => NodeKind::ImportGroup,
            Self::Identifier(_) => NodeKind::Identifier,
            Self::MemberAccess(_) => NodeKind::MemberAccess,
            Self::BinaryComparison(_) => NodeKind::BinaryComparison,
            Self::Literal(_) => NodeKind::Literal,
            Self::Call(_) => NodeKind::Call,
            Self::Other(_) => NodeKind::Other,
        }
    }

    pub fn span(&self) -> Option<Span> {
        match self {
            Self::File(n) => n.span,
            Self::Conditional(n) => n.span,
            Self::Return(n) => n.span,
            Self::ImportGroup(n) => n.span,
            Self::Identifier(n) => n.span,
            Self::MemberAccess(n) => n.span,
            Self::BinaryComparison(n) => n.span,
            Self::Literal(n) => n.span,
            Self::Call(n) => n.span,
            Self::Other(n) => n.span,
        }
    }

    /// Direct children in source order.
    pub fn children(&self) -> Vec<&SyntaxNode> {
        match self {
            Self::File(n) => n.decls.iter().collect(),
            Self::Conditional(n) => n
                .init
                .as_deref()
                .into_iter()
                .chain(std::iter::once(n.condition.as_ref()))
                .chain(n.body.iter())
                .chain(n.alternative.as_deref())
                .collect(),
            Self::Return(n) => n.results.iter().collect(),
            Self::MemberAccess(n) => vec![n.operand.as_ref()],
            Self::BinaryComparison(n) => vec![n.left.as_ref(), n.right.as_ref()],
            Self::Call(n) => std::iter::once(n.callee.as_ref())
                .chain(n.args.iter())
                .collect(),
            Self::Other(n) => n.children.iter().collect(),
            Self::ImportGroup(_) | Self::Identifier(_) | Self::Literal(_) => Vec::new(),
        }
    }

    pub fn ident(name: impl Into<String>) -> Self {
        Self::Identifier(Identifier::new(name))
    }

    /// `operand.member` with no source span.
    pub fn member(operand: SyntaxNode, member: impl Into<String>) -> Self {
        Self::MemberAccess(MemberAccess {
            span: None,
            operand: Box::new(operand),
            member: Identifier::new(member),
        })
    }

    pub fn call(callee: SyntaxNode, args: Vec<SyntaxNode>) -> Self {
        Self::Call(Call {
            span: None,
            callee: Box::new(callee),
            args,
        })
    }

    pub fn as_identifier(&self) -> Option<&Identifier> {
        match self {
            Self::Identifier(ident) => Some(ident),
            _ => None,
        }
    }

    pub fn is_nil(&self) -> bool {
        matches!(self, Self::Literal(Literal { kind: LiteralKind::Nil, .. }))
    }
}
