use crate::{
    ast::{NodeKind, Printer, TreeFile},
    error::Error,
    util::testing::{lines, must},
};

fn build(src: &str) -> Result<crate::ast::Node, Error> {
    TreeFile::parse(src)?.build()
}

#[test]
fn test_build_demo_tree() {
    let tree = must(build(
        r#"
        kind = "binary"
        token = "+"

        [[children]]
        kind = "binary"
        token = "*"
        children = [
            { kind = "integer", token = "3" },
            { kind = "integer", token = "2" },
        ]

        [[children]]
        kind = "integer"
        token = "5"
        "#,
    ));

    assert_eq!(tree.kind(), NodeKind::Binary);
    assert_eq!(tree.size(), 5);
    assert_eq!(lines(&Printer::to_string(&tree)), vec!["3", "2", "*", "5", "+"]);
}

#[test]
fn test_children_default_to_empty() {
    let tree = must(build(
        r#"
        kind = "statement_list"
        token = "block"
        "#,
    ));
    assert!(tree.children().is_empty());
    assert_eq!(Printer::to_string(&tree), "block\n");
}

#[test]
fn test_unknown_kind() {
    let res = build(
        r#"
        kind = "unary"
        token = "-"
        children = [{ kind = "float", token = "1.5" }]
        "#,
    );
    assert_eq!(res.unwrap_err(), Error::UnhandledKind("float".into()));
}

#[test]
fn test_too_many_children() {
    let res = build(
        r#"
        kind = "integer"
        token = "1"
        children = [{ kind = "integer", token = "2" }]
        "#,
    );
    assert!(matches!(
        res,
        Err(Error::Structural {
            parent: NodeKind::Integer,
            ..
        })
    ));
}

#[test]
fn test_malformed_file() {
    assert!(matches!(
        TreeFile::parse("kind = \"integer\""),
        Err(Error::TreeFile(_))
    ));
    assert!(matches!(
        TreeFile::parse("kind = \"integer\"\ntoken = \"1\"\ncolor = \"red\""),
        Err(Error::TreeFile(_))
    ));
}
