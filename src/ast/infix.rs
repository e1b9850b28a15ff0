use crate::ast::{Node, Visitable, Visitor};

/// Renders a tree back into parenthesized infix text. Each method combines
/// the strings returned for its children.
pub struct Infix;

impl Infix {
    pub fn to_string(root: &Node) -> String {
        root.accept(&mut Infix)
    }

    fn render(&mut self, node: Option<&Node>) -> String {
        node.map_or_else(|| "?".to_string(), |n| n.accept::<String>(self))
    }
}

impl Visitor<String> for Infix {
    fn visit_integer(&mut self, node: &Node) -> String {
        node.token().to_owned()
    }

    fn visit_identifier(&mut self, node: &Node) -> String {
        node.token().to_owned()
    }

    fn visit_unary(&mut self, node: &Node) -> String {
        let operand = self.render(node.operand());
        format!("{}{}", node.token(), operand)
    }

    fn visit_binary(&mut self, node: &Node) -> String {
        let lhs = self.render(node.lhs());
        let rhs = self.render(node.rhs());
        format!("({} {} {})", lhs, node.token(), rhs)
    }

    fn visit_statement_list(&mut self, node: &Node) -> String {
        if node.children().is_empty() {
            return node.token().to_owned();
        }

        node.children()
            .iter()
            .map(|child| child.accept::<String>(self))
            .collect::<Vec<String>>()
            .join("; ")
    }
}
