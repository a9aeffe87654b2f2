//! Linked-list model
//!
//! This module provides the data the engine operates on:
//! - [`node`]: node identifiers and the node factory
//! - [`topology`]: recomputes `next`/`prev` links from list order
//!
//! # Representation
//!
//! Nodes live in an ordered `Vec`; order is authoritative. Links are stored as
//! [`NodeId`] references rather than pointers, so a circular list is just a
//! tail whose `next` names the head:
//!
//! ```text
//! singly    [5] → [7] → [9] → ∅
//! doubly    ∅ ← [5] ⇄ [7] ⇄ [9] → ∅
//! circular  [5] → [7] → [9] ↺ (tail.next = head, head.prev = tail)
//! ```

pub mod node;
pub mod topology;

pub use node::{Node, NodeId};
pub use topology::{check_links, position_index, relink, relink_with, Linkage, LinkMismatch};

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which kind of linked list is being modelled
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListMode {
    #[default]
    Singly,
    Doubly,
    Circular,
}

impl ListMode {
    pub const ALL: [ListMode; 3] = [ListMode::Singly, ListMode::Doubly, ListMode::Circular];

    /// Link rules for this mode
    pub fn linkage(self) -> Linkage {
        match self {
            ListMode::Singly => Linkage {
                backward: false,
                wrap: false,
            },
            ListMode::Doubly => Linkage {
                backward: true,
                wrap: false,
            },
            ListMode::Circular => Linkage {
                backward: false,
                wrap: true,
            },
        }
    }

    /// Cycle to the next mode (singly -> doubly -> circular -> singly)
    pub fn next(self) -> Self {
        match self {
            ListMode::Singly => ListMode::Doubly,
            ListMode::Doubly => ListMode::Circular,
            ListMode::Circular => ListMode::Singly,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ListMode::Singly => "singly",
            ListMode::Doubly => "doubly",
            ListMode::Circular => "circular",
        }
    }
}

impl fmt::Display for ListMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error for an unrecognised list mode name
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown list mode '{0}' (expected singly, doubly or circular)")]
pub struct ParseListModeError(String);

impl FromStr for ListMode {
    type Err = ParseListModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "singly" => Ok(ListMode::Singly),
            "doubly" => Ok(ListMode::Doubly),
            "circular" => Ok(ListMode::Circular),
            _ => Err(ParseListModeError(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mode_round_trips_through_str() {
        for mode in ListMode::ALL {
            assert_eq!(mode.as_str().parse::<ListMode>(), Ok(mode));
        }
        assert!("triply".parse::<ListMode>().is_err());
        assert_eq!(" Circular ".parse::<ListMode>(), Ok(ListMode::Circular));
    }

    #[test]
    fn next_cycles_through_every_mode() {
        let mut mode = ListMode::Singly;
        for _ in 0..3 {
            mode = mode.next();
        }
        assert_eq!(mode, ListMode::Singly);
    }
}
