//! Topology builder
//!
//! Links are never patched incrementally. After any structural change the whole
//! sequence is passed through [`relink`], which clears every link and derives
//! them again from list order and the active [`ListMode`].

use super::node::{Node, NodeId};
use super::ListMode;
use rustc_hash::FxHashMap;

/// Link rules, independent of each other
///
/// `backward` fills `prev` between neighbours; `wrap` joins the tail back to
/// the head (and the head's `prev` to the tail). A doubly circular list is
/// simply both flags set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Linkage {
    pub backward: bool,
    pub wrap: bool,
}

/// Recompute every link of `nodes` for `mode`
pub fn relink(nodes: Vec<Node>, mode: ListMode) -> Vec<Node> {
    relink_with(nodes, mode.linkage())
}

/// Recompute every link of `nodes` under an explicit [`Linkage`]
pub fn relink_with(mut nodes: Vec<Node>, linkage: Linkage) -> Vec<Node> {
    for node in &mut nodes {
        node.unlink();
    }

    let ids: Vec<NodeId> = nodes.iter().map(Node::id).collect();
    let last = ids.len().saturating_sub(1);

    for (i, node) in nodes.iter_mut().enumerate() {
        if i < last {
            node.next = Some(ids[i + 1]);
        }
        if linkage.backward && i > 0 {
            node.prev = Some(ids[i - 1]);
        }
    }

    if linkage.wrap {
        if let (Some(&first), Some(&tail)) = (ids.first(), ids.last()) {
            nodes[last].next = Some(first);
            nodes[0].prev = Some(tail);
        }
    }

    nodes
}

/// Map each node id to its position in the sequence
pub fn position_index(nodes: &[Node]) -> FxHashMap<NodeId, usize> {
    nodes
        .iter()
        .enumerate()
        .map(|(i, node)| (node.id(), i))
        .collect()
}

/// A link that disagrees with list order
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("node {index} has {field} = {found:?}, expected {expected:?}")]
pub struct LinkMismatch {
    pub index: usize,
    pub field: &'static str,
    pub expected: Option<NodeId>,
    pub found: Option<NodeId>,
}

/// Verify that every link in `nodes` is what [`relink`] would produce
pub fn check_links(nodes: &[Node], mode: ListMode) -> Result<(), LinkMismatch> {
    let linkage = mode.linkage();
    let len = nodes.len();

    for (i, node) in nodes.iter().enumerate() {
        let mut expected_next = nodes.get(i + 1).map(Node::id);
        let mut expected_prev = if linkage.backward && i > 0 {
            Some(nodes[i - 1].id())
        } else {
            None
        };

        if linkage.wrap {
            if i + 1 == len {
                expected_next = Some(nodes[0].id());
            }
            if i == 0 {
                expected_prev = Some(nodes[len - 1].id());
            }
        }

        if node.next != expected_next {
            return Err(LinkMismatch {
                index: i,
                field: "next",
                expected: expected_next,
                found: node.next,
            });
        }
        if node.prev != expected_prev {
            return Err(LinkMismatch {
                index: i,
                field: "prev",
                expected: expected_prev,
                found: node.prev,
            });
        }
    }

    Ok(())
}
