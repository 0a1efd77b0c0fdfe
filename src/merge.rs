use crate::ast::{Document, Node};
use indexmap::IndexSet;

/// Merges `donor` into a copy of `acceptor`. Neither input is modified.
///
/// Every acceptor node with a non-empty type and name takes over the
/// properties of the first unmatched donor node with the same pair. Values of
/// shared keys are concatenated and deduplicated, first occurrence winning.
/// Donor nodes that matched nothing are appended after the acceptor nodes.
pub fn merge(acceptor: &Document, donor: &Document) -> Document {
    if acceptor.is_empty() {
        return donor.clone();
    }
    if donor.is_empty() {
        return acceptor.clone();
    }

    let mut merged = acceptor.clone();
    let mut remaining = donor.nodes.clone();

    for node in &mut merged.nodes {
        let Some((node_type, name)) = node.identity() else {
            continue;
        };
        let Some(pos) = remaining.iter().position(|candidate| {
            candidate.node_type.as_deref() == Some(node_type)
                && candidate.name.as_deref() == Some(name)
        }) else {
            continue;
        };

        log::debug!("merging {node_type}(\"{name}\")");
        let matched = remaining.remove(pos);
        absorb(node, matched);
    }

    merged.nodes.extend(remaining);
    merged
}

fn absorb(node: &mut Node, donor: Node) {
    for (key, values) in donor.properties {
        match node.properties.get_mut(&key) {
            Some(existing) => {
                let unique: IndexSet<String> = existing.drain(..).chain(values).collect();
                existing.extend(unique);
            }
            None => {
                node.properties.insert(key, values);
            }
        }
    }
}

/// Returns a copy of `document` without the nodes whose name is missing or empty.
pub fn trim(document: &Document) -> Document {
    let trimmed: Document = document.iter().filter(|n| n.has_name()).cloned().collect();
    let dropped = document.len() - trimmed.len();
    if dropped > 0 {
        log::debug!("trimmed {dropped} unnamed node(s)");
    }
    trimmed
}
