use std::{fmt::Display, path::PathBuf, sync::Once};

use tracing_subscriber::EnvFilter;

use crate::ast::Node;

static INIT: Once = Once::new();

/// Install a log subscriber once per test binary. Silent unless RUST_LOG
/// is set.
pub fn init_logger() {
    INIT.call_once(|| {
        let env_filter = EnvFilter::builder()
            .with_default_directive(tracing_subscriber::filter::LevelFilter::OFF.into())
            .from_env_lossy();

        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_target(false)
            .with_thread_ids(false)
            .with_thread_names(false)
            .with_file(false)
            .with_line_number(false)
            .without_time()
            .compact()
            .with_test_writer()
            .init();
    });
}

pub fn compare_string_lines_or_panic(ina: String, inb: String) {
    let a: Vec<&str> = ina.trim().split('\n').collect();
    let b: Vec<&str> = inb.trim().split('\n').collect();
    assert_eq!(
        a.len(),
        b.len(),
        "number of lines must be equal, got\n{}\nand\n{}",
        ina,
        inb,
    );

    for (i, line) in a.iter().enumerate() {
        assert_eq!(line.trim(), b.get(i).unwrap().trim());
    }
}

pub fn must<T, V: Display>(res: Result<T, V>) -> T {
    res.unwrap_or_else(|err| panic!("unexpected error: {}", err))
}

pub fn lines(s: &str) -> Vec<&str> {
    s.lines().collect()
}

pub fn int(token: &str) -> Node {
    Node::integer(token)
}

pub fn ident(token: &str) -> Node {
    Node::identifier(token)
}

pub fn binary(op: &str, lhs: Node, rhs: Node) -> Node {
    must(Node::binary(op, lhs, rhs))
}

pub fn unary(op: &str, operand: Node) -> Node {
    must(Node::unary(op, operand))
}

pub fn stmts(token: &str, children: Vec<Node>) -> Node {
    must(Node::statements(token, children))
}

/// Chain of depth unary nodes over a single integer leaf.
pub fn unary_chain(depth: usize) -> Node {
    let mut node = int("0");
    for _ in 0..depth {
        node = unary("-", node);
    }
    node
}

pub fn root_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
}
