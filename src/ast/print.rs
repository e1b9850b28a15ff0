use crate::ast::{Node, Visitable, Visitor, walk_children};

/// Post-order printer. Children are printed before their parent, one token
/// per line.
pub struct Printer {
    s: String,
}

impl Default for Printer {
    fn default() -> Self {
        Self::new()
    }
}

impl Printer {
    pub fn new() -> Self {
        Self { s: String::new() }
    }

    /// Convert tree to post-order lines and print to stdout
    pub fn print(root: &Node) {
        print!("{}", Printer::to_string(root));
    }

    /// Convert tree to post-order lines, each terminated by a newline
    pub fn to_string(root: &Node) -> String {
        let mut p = Printer::default();
        root.accept::<()>(&mut p);
        p.s
    }

    fn line(&mut self, s: &str) {
        self.s.push_str(s);
        self.s.push('\n');
    }
}

impl Visitor<()> for Printer {
    fn visit_integer(&mut self, node: &Node) {
        self.line(node.token());
    }

    fn visit_identifier(&mut self, node: &Node) {
        self.line(node.token());
    }

    fn visit_unary(&mut self, node: &Node) {
        walk_children::<()>(self, node);
        self.line(&format!("{} (Unary)", node.token()));
    }

    fn visit_binary(&mut self, node: &Node) {
        walk_children::<()>(self, node);
        self.line(node.token());
    }

    fn visit_statement_list(&mut self, node: &Node) {
        walk_children::<()>(self, node);
        self.line(node.token());
    }
}
