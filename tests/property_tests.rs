//! Property-based tests for the notation's core guarantees: round-trips,
//! normalization idempotence, whitespace insensitivity and merge identity.

use proptest::prelude::*;
use wpp_core::normalizer::normalize;
use wpp_core::{merge, parse, serialize, Document, Mode, Node};

fn node_strategy() -> impl Strategy<Value = Node> {
    (
        "[A-Z][A-Za-z0-9_]{0,8}",
        "[A-Za-z0-9 ]{0,10}",
        prop::collection::vec(
            (
                "[a-z][a-z0-9_]{0,8}",
                prop::collection::vec("[A-Za-z0-9 ,.!?']{1,12}", 1..4),
            ),
            0..5,
        ),
    )
        .prop_map(|(node_type, name, properties)| {
            properties
                .into_iter()
                .fold(Node::new(node_type, name), |node, (key, values)| {
                    node.with_property(key, values)
                })
        })
}

fn document_strategy() -> impl Strategy<Value = Document> {
    prop::collection::vec(node_strategy(), 0..5).prop_map(Document::from)
}

/// Renders `doc` with a whitespace run from `ws` between every pair of tokens.
fn render_spaced(doc: &Document, ws: &[&str]) -> String {
    let mut pad = ws.iter().cycle();
    let mut w = || *pad.next().unwrap_or(&"");
    let mut out = String::new();
    for node in doc {
        out.push_str(&format!(
            "{}[{}{}{}({}\"{}\"{}){}{{",
            w(),
            w(),
            node.node_type.as_deref().unwrap_or_default(),
            w(),
            w(),
            node.name.as_deref().unwrap_or_default(),
            w(),
            w()
        ));
        for (key, values) in &node.properties {
            let sep = format!("{}+{}", w(), w());
            let joined = values
                .iter()
                .map(|v| format!("\"{v}\""))
                .collect::<Vec<_>>()
                .join(&sep);
            out.push_str(&format!("{}{}{}({}{}{})", w(), key, w(), w(), joined, w()));
        }
        out.push_str(&format!("{}}}{}]{}", w(), w(), w()));
    }
    out
}

proptest! {
    #[test]
    fn prop_round_trip_normal(doc in document_strategy().prop_filter("non-empty", |d| !d.is_empty())) {
        let text = serialize(&doc, Mode::Normal);
        prop_assert_eq!(parse(&text).unwrap(), doc);
    }

    #[test]
    fn prop_round_trip_line_and_compact(doc in document_strategy().prop_filter("non-empty", |d| !d.is_empty())) {
        prop_assert_eq!(parse(&serialize(&doc, Mode::Line)).unwrap(), doc.clone());
        prop_assert_eq!(parse(&serialize(&doc, Mode::Compact)).unwrap(), doc);
    }

    #[test]
    fn prop_normalize_idempotent(s in ".{0,80}") {
        let once = normalize(&s);
        prop_assert_eq!(normalize(&once), once);
    }

    #[test]
    fn prop_normalize_idempotent_on_notation(doc in document_strategy()) {
        let once = normalize(&serialize(&doc, Mode::Normal));
        prop_assert_eq!(normalize(&once), once);
    }

    #[test]
    fn prop_whitespace_insensitive(
        doc in document_strategy().prop_filter("non-empty", |d| !d.is_empty()),
        ws in prop::collection::vec(prop::sample::select(vec!["", " ", "\n", "  \t\n "]), 1..32),
    ) {
        let spaced = render_spaced(&doc, &ws);
        prop_assert_eq!(parse(&spaced).unwrap(), doc);
    }

    #[test]
    fn prop_merge_identity(doc in document_strategy()) {
        prop_assert_eq!(merge(&doc, &Document::new()), doc.clone());
        prop_assert_eq!(merge(&Document::new(), &doc), doc);
    }

    #[test]
    fn prop_merge_keeps_every_acceptor_node(a in document_strategy(), b in document_strategy()) {
        let merged = merge(&a, &b);
        prop_assert!(merged.len() >= a.len());
        prop_assert!(merged.len() <= a.len() + b.len());
    }
}
