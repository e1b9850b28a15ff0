use std::{fs, path::Path};

use serde::Deserialize;
use tracing::{debug, info};

use crate::{
    ast::{Node, NodeKind},
    error::{Error, Res},
};

/// Declarative description of a tree, as found in a tree file:
///
/// ```toml
/// kind = "binary"
/// token = "+"
///
/// [[children]]
/// kind = "integer"
/// token = "1"
///
/// [[children]]
/// kind = "identifier"
/// token = "x"
/// ```
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TreeFile {
    pub kind: String,
    pub token: String,
    #[serde(default)]
    pub children: Vec<TreeFile>,
}

impl TreeFile {
    pub fn parse(src: &str) -> Res<TreeFile> {
        toml::from_str(src).map_err(|e| Error::TreeFile(e.message().to_owned()))
    }

    pub fn load(path: &Path) -> Res<TreeFile> {
        info!("Loading tree file: {}", path.display());
        let src = fs::read_to_string(path).map_err(|e| {
            Error::Io(format!("failed to read file {}: {}", path.display(), e))
        })?;
        Self::parse(&src)
    }

    /// Build the described tree. Children go through `Node::add_child`, so
    /// the same structural rules apply as for trees built in code.
    pub fn build(&self) -> Res<Node> {
        let kind = NodeKind::parse(&self.kind)?;
        let mut node = Node::new(kind, self.token.as_str());

        for child in &self.children {
            node.add_child(child.build()?)?;
        }

        debug!("Built {} node '{}'", kind, self.token);
        Ok(node)
    }
}
