use tracing::debug;

use crate::ast::{Node, NodeKind};

/// Stack left before dispatch switches to a freshly allocated segment.
const STACK_RED_ZONE: usize = 64 * 1024;
/// Size of each segment allocated when the red zone is reached.
const STACK_SEGMENT_SIZE: usize = 1024 * 1024;

/// One method per node kind. None have default bodies, so a visitor that
/// misses a kind does not compile. Recursing into children is up to each
/// method, which lets visitors pick their own traversal order.
pub trait Visitor<R> {
    fn visit_integer(&mut self, node: &Node) -> R;
    fn visit_identifier(&mut self, node: &Node) -> R;
    fn visit_unary(&mut self, node: &Node) -> R;
    fn visit_binary(&mut self, node: &Node) -> R;
    fn visit_statement_list(&mut self, node: &Node) -> R;
}

pub trait Visitable {
    /// Accept a visitor to inspect this node. Must call the appropriate
    /// visit method on the visitor for this node.
    fn accept<R>(&self, visitor: &mut dyn Visitor<R>) -> R;
}

/// Route node to the visitor method matching its kind and return whatever
/// that method returns. Does not visit children.
pub fn dispatch<R>(visitor: &mut dyn Visitor<R>, node: &Node) -> R {
    debug!("Visiting {} '{}'", node.kind(), node.token());

    grow_stack(|| match node.kind() {
        NodeKind::Integer => visitor.visit_integer(node),
        NodeKind::Identifier => visitor.visit_identifier(node),
        NodeKind::Unary => visitor.visit_unary(node),
        NodeKind::Binary => visitor.visit_binary(node),
        NodeKind::StatementList => visitor.visit_statement_list(node),
    })
}

impl Visitable for Node {
    fn accept<R>(&self, visitor: &mut dyn Visitor<R>) -> R {
        dispatch(visitor, self)
    }
}

/// Run f, moving to a new stack segment first if the current stack is close
/// to its limit.
pub(crate) fn grow_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(STACK_RED_ZONE, STACK_SEGMENT_SIZE, f)
}

/// Visit each child of node in order, discarding the results.
pub fn walk_children<R>(visitor: &mut dyn Visitor<R>, node: &Node) {
    for child in node.children() {
        child.accept(visitor);
    }
}
