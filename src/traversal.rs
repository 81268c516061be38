//! Enter/leave traversal over the owned syntax tree.
//!
//! [`inspect`] walks depth-first with children in source order. For every
//! node whose kind is in the filter it calls the callback once with
//! [`Action::Visit`] before the children and once with [`Action::Leave`]
//! after them. Returning `false` from a visit prunes the subtree, and the
//! matching leave event is not delivered. Nodes outside the filter are never
//! passed to the callback, though their children are still walked.

use crate::core::{NodeKind, SyntaxNode};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Action {
    Visit,
    Leave,
}

/// Set of node kinds a traversal reports.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct NodeFilter(u16);

impl NodeFilter {
    pub fn only(kinds: &[NodeKind]) -> Self {
        Self(kinds.iter().fold(0, |mask, kind| mask | Self::bit(*kind)))
    }

    pub fn contains(&self, kind: NodeKind) -> bool {
        self.0 & Self::bit(kind) != 0
    }

    fn bit(kind: NodeKind) -> u16 {
        1 << kind as u16
    }
}

pub fn inspect<F>(root: &SyntaxNode, filter: NodeFilter, mut f: F)
where
    F: FnMut(&SyntaxNode, Action) -> bool,
{
    walk(root, filter, &mut f);
}

fn walk<F>(node: &SyntaxNode, filter: NodeFilter, f: &mut F)
where
    F: FnMut(&SyntaxNode, Action) -> bool,
{
    let reported = filter.contains(node.kind());
    if reported && !f(node, Action::Visit) {
        return;
    }

    for child in node.children() {
        walk(child, filter, f);
    }

    if reported {
        f(node, Action::Leave);
    }
}
