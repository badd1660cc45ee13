//! Shared fixtures: event streams shaped like real parser output

#![allow(dead_code)]

use heartwood::{Event, Tree};

/// A rule node with children.
pub fn node(rule: &str, label: &str, children: Vec<Vec<Event>>) -> Vec<Event> {
    let mut events = vec![Event::enter(rule, label)];
    events.extend(children.into_iter().flatten());
    events.push(Event::Exit);
    events
}

/// A rule node without children.
pub fn leaf(rule: &str, label: &str) -> Vec<Event> {
    node(rule, label, Vec::new())
}

/// `s -> expression -> (operand -> number, operator, operand -> number)`
pub fn binary_events(left: &str, op: &str, right: &str) -> Vec<Event> {
    let text = format!("{left}{op}{right}");
    node(
        "s",
        &text,
        vec![node(
            "expression",
            &text,
            vec![
                node("operand", left, vec![leaf("number", left)]),
                leaf("operator", op),
                node("operand", right, vec![leaf("number", right)]),
            ],
        )],
    )
}

/// The parse of `3+100`: 7 nodes.
pub fn ops_tree() -> Tree {
    Tree::from_events(binary_events("3", "+", "100")).unwrap()
}

/// The parse of `10-4+3`, left associative.
pub fn nested_ops_tree() -> Tree {
    Tree::from_events(node(
        "s",
        "10-4+3",
        vec![node(
            "expression",
            "10-4+3",
            vec![
                node(
                    "expression",
                    "10-4",
                    vec![
                        node("operand", "10", vec![leaf("number", "10")]),
                        leaf("operator", "-"),
                        node("operand", "4", vec![leaf("number", "4")]),
                    ],
                ),
                leaf("operator", "+"),
                node("operand", "3", vec![leaf("number", "3")]),
            ],
        )],
    ))
    .unwrap()
}

const CALL: &str = "System.out.println(\"Hello World\")";
const BLOCK: &str = "{System.out.println(\"Hello World\");}";
const METHOD: &str = "voidmain(String[]args){System.out.println(\"Hello World\");}";
const BODY: &str =
    "{publicstaticvoidmain(String[]args){System.out.println(\"Hello World\");}}";

/// Rule tree of a Java `HelloWorld` class: 31 nodes, 5 `expression`s, 1 `classBody`.
pub fn hello_world_events() -> Vec<Event> {
    let class = format!("classHelloWorld{BODY}");
    let public_class = format!("public{class}");
    let unit = format!("{public_class}<EOF>");
    let member = format!("publicstatic{METHOD}");
    let statement = format!("{CALL};");

    node(
        "compilationUnit",
        &unit,
        vec![node(
            "typeDeclaration",
            &public_class,
            vec![
                leaf("classOrInterfaceModifier", "public"),
                node(
                    "classDeclaration",
                    &class,
                    vec![node(
                        "classBody",
                        BODY,
                        vec![node(
                            "classBodyDeclaration",
                            &member,
                            vec![
                                node(
                                    "modifier",
                                    "public",
                                    vec![leaf("classOrInterfaceModifier", "public")],
                                ),
                                node(
                                    "modifier",
                                    "static",
                                    vec![leaf("classOrInterfaceModifier", "static")],
                                ),
                                node(
                                    "memberDeclaration",
                                    METHOD,
                                    vec![node(
                                        "methodDeclaration",
                                        METHOD,
                                        vec![
                                            node(
                                                "formalParameters",
                                                "(String[]args)",
                                                vec![node(
                                                    "formalParameterList",
                                                    "String[]args",
                                                    vec![node(
                                                        "formalParameter",
                                                        "String[]args",
                                                        vec![
                                                            node(
                                                                "typeType",
                                                                "String[]",
                                                                vec![leaf(
                                                                    "classOrInterfaceType",
                                                                    "String",
                                                                )],
                                                            ),
                                                            leaf("variableDeclaratorId", "args"),
                                                        ],
                                                    )],
                                                )],
                                            ),
                                            node(
                                                "methodBody",
                                                BLOCK,
                                                vec![node(
                                                    "block",
                                                    BLOCK,
                                                    vec![node(
                                                        "blockStatement",
                                                        &statement,
                                                        vec![node(
                                                            "statement",
                                                            &statement,
                                                            vec![call_expression()],
                                                        )],
                                                    )],
                                                )],
                                            ),
                                        ],
                                    )],
                                ),
                            ],
                        )],
                    )],
                ),
            ],
        )],
    )
}

fn call_expression() -> Vec<Event> {
    let hello = "\"Hello World\"";
    node(
        "expression",
        CALL,
        vec![
            node(
                "expression",
                "System.out.println",
                vec![node(
                    "expression",
                    "System.out",
                    vec![node(
                        "expression",
                        "System",
                        vec![leaf("primary", "System")],
                    )],
                )],
            ),
            node(
                "expressionList",
                hello,
                vec![node(
                    "expression",
                    hello,
                    vec![node("primary", hello, vec![leaf("literal", hello)])],
                )],
            ),
        ],
    )
}

/// Node count of [`hello_world_events`].
pub const HELLO_WORLD_NODES: usize = 31;

pub fn hello_world() -> Tree {
    Tree::from_events(hello_world_events()).unwrap()
}

/// `(rule, label)` pairs in pre-order.
pub fn shape(tree: &Tree) -> Vec<(String, String)> {
    tree.pre_order()
        .into_iter()
        .map(|id| {
            let node = tree.node(id).unwrap();
            (node.rule().to_string(), node.label().to_string())
        })
        .collect()
}
