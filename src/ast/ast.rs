use std::{fmt, str::FromStr};

use strum_macros::{Display, EnumIter, EnumString};

use crate::{
    ast::visitor::grow_stack,
    error::{Arity, Error, Res},
};

/// The closed set of node kinds. Dispatch matches on this exhaustively, so
/// adding a kind is a compile error in every visitor until it is handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, EnumString, Display)]
#[strum(serialize_all = "snake_case")]
pub enum NodeKind {
    Integer,
    Identifier,
    Unary,
    Binary,
    StatementList,
}

impl NodeKind {
    /// Parse a snake_case kind name, eg. 'statement_list'.
    pub fn parse(name: &str) -> Res<NodeKind> {
        NodeKind::from_str(name).map_err(|_| Error::UnhandledKind(name.to_owned()))
    }

    pub fn arity(&self) -> Arity {
        match self {
            NodeKind::Integer | NodeKind::Identifier => Arity::Exactly(0),
            NodeKind::Unary => Arity::Exactly(1),
            NodeKind::Binary => Arity::Exactly(2),
            NodeKind::StatementList => Arity::Any,
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, NodeKind::Integer | NodeKind::Identifier)
    }

    /// Unary and binary nodes are expressions and may only contain other
    /// expressions.
    pub fn is_operator(&self) -> bool {
        matches!(self, NodeKind::Unary | NodeKind::Binary)
    }
}

/// A node in the syntax tree. All kinds share the same shape: a token
/// (literal text, identifier name, or operator symbol) and an ordered list
/// of children owned by this node. For binary nodes the first child is the
/// left operand.
#[derive(Eq)]
pub struct Node {
    kind: NodeKind,
    token: String,
    children: Vec<Node>,
}

impl Node {
    /// Create a node without children. The token is not validated.
    pub fn new(kind: NodeKind, token: impl Into<String>) -> Self {
        Self {
            kind,
            token: token.into(),
            children: Vec::new(),
        }
    }

    pub fn integer(token: impl Into<String>) -> Self {
        Self::new(NodeKind::Integer, token)
    }

    pub fn identifier(token: impl Into<String>) -> Self {
        Self::new(NodeKind::Identifier, token)
    }

    pub fn unary(op: impl Into<String>, operand: Node) -> Res<Self> {
        let mut node = Self::new(NodeKind::Unary, op);
        node.add_child(operand)?;
        Ok(node)
    }

    pub fn binary(op: impl Into<String>, lhs: Node, rhs: Node) -> Res<Self> {
        let mut node = Self::new(NodeKind::Binary, op);
        node.add_child(lhs)?;
        node.add_child(rhs)?;
        Ok(node)
    }

    pub fn statements(token: impl Into<String>, children: Vec<Node>) -> Res<Self> {
        let mut node = Self::new(NodeKind::StatementList, token);
        for child in children {
            node.add_child(child)?;
        }
        Ok(node)
    }

    pub fn kind(&self) -> NodeKind {
        self.kind
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }

    /// Operand of a unary node.
    pub fn operand(&self) -> Option<&Node> {
        match self.kind {
            NodeKind::Unary => self.children.first(),
            _ => None,
        }
    }

    /// Left operand of a binary node.
    pub fn lhs(&self) -> Option<&Node> {
        match self.kind {
            NodeKind::Binary => self.children.first(),
            _ => None,
        }
    }

    /// Right operand of a binary node.
    pub fn rhs(&self) -> Option<&Node> {
        match self.kind {
            NodeKind::Binary => self.children.get(1),
            _ => None,
        }
    }

    /// Append child as the next child of this node. Fails if the node is
    /// already full for its kind, or if a statement list is added to an
    /// expression. A node with too few children is only caught by
    /// `validate`, since children arrive one at a time.
    pub fn add_child(&mut self, child: Node) -> Res<()> {
        if self.kind.is_operator() && child.kind == NodeKind::StatementList {
            return Err(Error::Structural {
                parent: self.kind,
                child: child.kind,
                reason: "statement lists cannot appear inside expressions".into(),
            });
        }

        let arity = self.kind.arity();
        if let Some(max) = arity.max() {
            if self.children.len() >= max {
                return Err(Error::Structural {
                    parent: self.kind,
                    child: child.kind,
                    reason: format!("{} node '{}' takes {}", self.kind, self.token, arity),
                });
            }
        }

        self.children.push(child);
        Ok(())
    }

    /// Total number of nodes in this subtree, including self.
    pub fn size(&self) -> usize {
        let mut count = 0;
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            count += 1;
            stack.extend(node.children.iter());
        }
        count
    }

    /// Height of this subtree. A leaf has depth 1.
    pub fn depth(&self) -> usize {
        let mut max = 0;
        let mut stack = vec![(self, 1)];
        while let Some((node, depth)) = stack.pop() {
            max = max.max(depth);
            stack.extend(node.children.iter().map(|c| (c, depth + 1)));
        }
        max
    }
}

// Clone, PartialEq and Debug recurse once per level, so like dispatch they
// run on a grown stack when the current one is nearly used up.

impl Clone for Node {
    fn clone(&self) -> Self {
        grow_stack(|| Node {
            kind: self.kind,
            token: self.token.clone(),
            children: self.children.clone(),
        })
    }
}

impl PartialEq for Node {
    fn eq(&self, other: &Node) -> bool {
        grow_stack(|| {
            self.kind == other.kind
                && self.token == other.token
                && self.children == other.children
        })
    }
}

impl fmt::Debug for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        grow_stack(|| {
            f.debug_struct("Node")
                .field("kind", &self.kind)
                .field("token", &self.token)
                .field("children", &self.children)
                .finish()
        })
    }
}

impl Drop for Node {
    // Children are moved onto a heap stack so deep chains are freed without
    // recursing once per level.
    fn drop(&mut self) {
        let mut stack = std::mem::take(&mut self.children);
        while let Some(mut node) = stack.pop() {
            stack.append(&mut node.children);
        }
    }
}
