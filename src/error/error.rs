use core::fmt;

use crate::ast::NodeKind;

pub type Res<T> = Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Kind name outside the closed set of node kinds.
    UnhandledKind(String),
    /// A child was rejected by `Node::add_child`.
    Structural {
        parent: NodeKind,
        child: NodeKind,
        reason: String,
    },
    /// A finished node has the wrong number of children.
    Arity {
        kind: NodeKind,
        token: String,
        expected: Arity,
        found: usize,
    },
    Config(String),
    TreeFile(String),
    Io(String),
}

/// Number of children a node kind accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    Exactly(usize),
    Any,
}

impl Arity {
    pub fn accepts(&self, count: usize) -> bool {
        match self {
            Arity::Exactly(n) => count == *n,
            Arity::Any => true,
        }
    }

    /// Largest number of children allowed, if bounded.
    pub fn max(&self) -> Option<usize> {
        match self {
            Arity::Exactly(n) => Some(*n),
            Arity::Any => None,
        }
    }
}

impl fmt::Display for Arity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Arity::Exactly(1) => write!(f, "exactly 1 child"),
            Arity::Exactly(n) => write!(f, "exactly {} children", n),
            Arity::Any => write!(f, "any number of children"),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::UnhandledKind(name) => write!(f, "error: unknown node kind '{}'", name),
            Error::Structural {
                parent,
                child,
                reason,
            } => write!(
                f,
                "error: cannot add {} node to {} node: {}",
                child, parent, reason
            ),
            Error::Arity {
                kind,
                token,
                expected,
                found,
            } => write!(
                f,
                "error: {} node '{}' expects {}, found {}",
                kind, token, expected, found
            ),
            Error::Config(msg) => write!(f, "error: invalid config: {}", msg),
            Error::TreeFile(msg) => write!(f, "error: invalid tree file: {}", msg),
            Error::Io(msg) => write!(f, "error: {}", msg),
        }
    }
}

impl std::error::Error for Error {}
