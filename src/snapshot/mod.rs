// State snapshots and the notification log handed to the front end

use crate::list::{ListMode, Node, NodeId};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::time::Duration;

/// Oldest notifications are dropped past this many entries
pub const NOTIFICATION_CAPACITY: usize = 128;

/// Severity of a notification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Success,
    Error,
    Info,
}

/// A single user-visible message with the engine time it was raised at
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub level: Level,
    pub text: String,
    pub at: Duration,
}

/// Bounded log of operation outcomes
#[derive(Debug, Clone)]
pub struct NotificationLog {
    entries: VecDeque<Notification>,
    capacity: usize,
}

impl NotificationLog {
    pub fn new(capacity: usize) -> Self {
        NotificationLog {
            entries: VecDeque::with_capacity(capacity.max(1)),
            capacity: capacity.max(1),
        }
    }

    pub fn push(&mut self, level: Level, text: impl Into<String>, at: Duration) {
        if self.entries.len() == self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(Notification {
            level,
            text: text.into(),
            at,
        });
    }

    /// Oldest first
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &Notification> + ExactSizeIterator {
        self.entries.iter()
    }

    pub fn latest(&self) -> Option<&Notification> {
        self.entries.back()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for NotificationLog {
    fn default() -> Self {
        Self::new(NOTIFICATION_CAPACITY)
    }
}

/// One node as seen by the renderer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeView {
    pub id: NodeId,
    pub value: i64,
    pub next: Option<NodeId>,
    pub prev: Option<NodeId>,
}

impl From<&Node> for NodeView {
    fn from(node: &Node) -> Self {
        NodeView {
            id: node.id(),
            value: node.value,
            next: node.next,
            prev: node.prev,
        }
    }
}

/// Everything a renderer needs to draw the list at one instant
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateSnapshot {
    pub nodes: Vec<NodeView>,
    pub head: Option<NodeId>,
    pub tail: Option<NodeId>,
    pub mode: ListMode,
    pub highlighted: Option<NodeId>,
    pub busy: bool,
}

impl StateSnapshot {
    /// Node values in list order
    pub fn values(&self) -> Vec<i64> {
        self.nodes.iter().map(|n| n.value).collect()
    }

    /// Position of the highlighted node, if any
    pub fn highlighted_position(&self) -> Option<usize> {
        let id = self.highlighted?;
        self.nodes.iter().position(|n| n.id == id)
    }
}
