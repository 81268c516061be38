//! Recognizes `if err != nil { ...; return ..., ErrSomething }`.
//!
//! The match is purely syntactic: the condition must
//! be exactly `err != nil` in that order, and only return statements written
//! directly in the conditional's body are considered. Reassigned error
//! variables, already-wrapped values and returns nested deeper in the body
//! are not detected.

use super::{ERROR_SENTINEL_PREFIX, ERROR_VARIABLE};
use crate::core::{ComparisonOp, Conditional, Identifier, ReturnStmt, SyntaxNode};

/// A return statement that propagates an error sentinel without wrapping it.
#[derive(Clone, Copy, Debug)]
pub struct Site<'a> {
    pub statement: &'a ReturnStmt,
    /// Final result of the return, the value to be wrapped.
    pub value: &'a SyntaxNode,
    /// Final name segment of `value`.
    pub sentinel: &'a Identifier,
}

/// `err != nil`, with `err` on the left.
pub fn is_err_neq_nil(cond: &Conditional) -> bool {
    match cond.condition.as_ref() {
        SyntaxNode::BinaryComparison(cmp) => {
            cmp.op == ComparisonOp::NotEq
                && cmp
                    .left
                    .as_identifier()
                    .is_some_and(|ident| ident.name == ERROR_VARIABLE)
                && cmp.right.is_nil()
        }
        _ => false,
    }
}

/// Final name segment of a bare identifier or member-access chain.
///
/// `ErrOpenFile` yields `ErrOpenFile`; `helpers.ErrOpenFile` yields `ErrOpenFile`.
pub fn last_ident(expr: &SyntaxNode) -> Option<&Identifier> {
    match expr {
        SyntaxNode::Identifier(ident) => Some(ident),
        SyntaxNode::MemberAccess(access) => Some(&access.member),
        _ => None,
    }
}

pub fn is_error_sentinel(ident: &Identifier) -> bool {
    ident.name.starts_with(ERROR_SENTINEL_PREFIX)
}

/// The site formed by `stmt`, if it is a qualifying return statement.
pub fn site_in(stmt: &SyntaxNode) -> Option<Site<'_>> {
    let SyntaxNode::Return(ret) = stmt else {
        return None;
    };
    // the error is assumed to be the last result
    let value = ret.results.last()?;
    let sentinel = last_ident(value)?;
    is_error_sentinel(sentinel).then_some(Site {
        statement: ret,
        value,
        sentinel,
    })
}

pub fn find_sites(cond: &Conditional) -> Vec<Site<'_>> {
    if !is_err_neq_nil(cond) {
        return Vec::new();
    }
    cond.body.iter().filter_map(site_in).collect()
}
