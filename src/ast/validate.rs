use crate::{
    ast::{Node, Visitable, Visitor},
    error::{Error, Res},
};

/// Pre-order arity checker. Each node is checked before its children, and
/// the first violation found stops the walk.
pub struct Validator;

impl Validator {
    pub fn check(root: &Node) -> Res<()> {
        root.accept(&mut Validator)
    }

    fn check_node(&mut self, node: &Node) -> Res<()> {
        let expected = node.kind().arity();
        let found = node.children().len();

        if !expected.accepts(found) {
            return Err(Error::Arity {
                kind: node.kind(),
                token: node.token().to_owned(),
                expected,
                found,
            });
        }

        for child in node.children() {
            child.accept::<Res<()>>(self)?;
        }

        Ok(())
    }
}

impl Visitor<Res<()>> for Validator {
    fn visit_integer(&mut self, node: &Node) -> Res<()> {
        self.check_node(node)
    }

    fn visit_identifier(&mut self, node: &Node) -> Res<()> {
        self.check_node(node)
    }

    fn visit_unary(&mut self, node: &Node) -> Res<()> {
        self.check_node(node)
    }

    fn visit_binary(&mut self, node: &Node) -> Res<()> {
        self.check_node(node)
    }

    fn visit_statement_list(&mut self, node: &Node) -> Res<()> {
        self.check_node(node)
    }
}

impl Node {
    /// Check that every node in the tree has the number of children its
    /// kind requires.
    pub fn validate(&self) -> Res<()> {
        Validator::check(self)
    }
}
