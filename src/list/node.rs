//! Node factory and node identifiers
//!
//! Every node receives an identifier from a process-wide counter, so an id is
//! never reused, even after the node that carried it has been deleted or the
//! list has been cleared.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/// Next identifier to hand out. Starts at 1 so that `node-0` never appears.
static NEXT_NODE_ID: AtomicU64 = AtomicU64::new(1);

/// Opaque, process-unique node identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(u64);

impl NodeId {
    fn fresh() -> Self {
        NodeId(NEXT_NODE_ID.fetch_add(1, Ordering::Relaxed))
    }

    /// Raw numeric form, mostly useful for display and serialization
    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "node-{}", self.0)
    }
}

/// A single list node
///
/// `next` and `prev` are derived from the node's position in the owning
/// sequence and are only ever written by [`super::topology::relink`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    id: NodeId,
    pub value: i64,
    pub next: Option<NodeId>,
    pub prev: Option<NodeId>,
}

impl Node {
    /// Create an unlinked node carrying `value`
    pub fn create(value: i64) -> Self {
        Node {
            id: NodeId::fresh(),
            value,
            next: None,
            prev: None,
        }
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    /// Drop both links
    pub(crate) fn unlink(&mut self) {
        self.next = None;
        self.prev = None;
    }
}
