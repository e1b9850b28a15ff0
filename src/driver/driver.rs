use std::path::Path;

use tracing::{debug, info};

use crate::{
    ast::{Infix, Node, Outline, Printer, TreeFile},
    config::{Config, Style},
    error::Res,
};

/// Tree for the expression '3 * 2 + 5'.
pub fn demo_tree() -> Res<Node> {
    let mult = Node::binary("*", Node::integer("3"), Node::integer("2"))?;
    Node::binary("+", mult, Node::integer("5"))
}

/// Render tree in the given style. The tree is validated first if the
/// config asks for it.
pub fn render(tree: &Node, style: Style, config: &Config) -> Res<String> {
    if config.validate {
        tree.validate()?;
        debug!("Validated tree of {} nodes", tree.size());
    }

    info!("Rendering tree as {}", style);
    let out = match style {
        Style::Postfix => Printer::to_string(tree),
        Style::Infix => format!("{}\n", Infix::to_string(tree)),
        Style::Outline => Outline::to_string(tree),
    };

    Ok(out)
}

/// Load the tree file at path and render it. Style falls back to the one
/// in config.
pub fn run_file(path: &Path, style: Option<Style>, config: &Config) -> Res<String> {
    let tree = load_tree(path)?;
    render(&tree, style.unwrap_or(config.style), config)
}

/// Load the tree file at path and check the arity of every node,
/// regardless of config.
pub fn check_file(path: &Path) -> Res<()> {
    load_tree(path)?.validate()
}

fn load_tree(path: &Path) -> Res<Node> {
    let tree = TreeFile::load(path)?.build()?;
    debug!(
        "Loaded tree with {} nodes, depth {}",
        tree.size(),
        tree.depth()
    );
    Ok(tree)
}
