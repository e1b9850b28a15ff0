use crate::ast::{Node, Visitable, Visitor};

/// Pre-order tree dump, one node per line, indented by depth.
pub struct Outline {
    s: String,
    indent: usize,
}

impl Outline {
    pub fn to_string(root: &Node) -> String {
        let mut o = Self {
            s: String::new(),
            indent: 0,
        };
        root.accept::<()>(&mut o);
        o.s
    }

    fn node(&mut self, node: &Node) {
        for _ in 0..self.indent {
            self.s.push_str("  ");
        }
        self.s.push_str(&format!("{} {}\n", node.kind(), node.token()));

        self.indent += 1;
        for child in node.children() {
            child.accept::<()>(self);
        }
        self.indent -= 1;
    }
}

impl Visitor<()> for Outline {
    fn visit_integer(&mut self, node: &Node) {
        self.node(node);
    }

    fn visit_identifier(&mut self, node: &Node) {
        self.node(node);
    }

    fn visit_unary(&mut self, node: &Node) {
        self.node(node);
    }

    fn visit_binary(&mut self, node: &Node) {
        self.node(node);
    }

    fn visit_statement_list(&mut self, node: &Node) {
        self.node(node);
    }
}
