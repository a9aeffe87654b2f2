//! Animation sequencer
//!
//! A cooperative, single-threaded timer queue. Nothing here sleeps or spawns:
//! the host advances the clock (usually once per UI frame) and receives every
//! action that became due, in the order it was scheduled. Scheduled actions
//! cannot be cancelled; an action that is stale by the time it fires is
//! expected to be a no-op for whoever applies it.

use crate::engine::constants::{BUSY_WINDOW, SEARCH_HIGHLIGHT, TRAVERSE_STEP};
use crate::list::NodeId;
use std::time::Duration;

/// Durations used by the engine when scheduling animations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timings {
    pub traverse_step: Duration,
    pub search_highlight: Duration,
    pub busy_window: Duration,
}

impl Timings {
    /// Scale every duration by `factor` (2.0 is twice as slow)
    ///
    /// Non-finite or negative factors, and factors that push any duration
    /// out of range, leave the timings unchanged.
    pub fn scaled(self, factor: f64) -> Self {
        if !factor.is_finite() || factor < 0.0 {
            return self;
        }
        let scale = |d: Duration| Duration::try_from_secs_f64(d.as_secs_f64() * factor).ok();
        match (
            scale(self.traverse_step),
            scale(self.search_highlight),
            scale(self.busy_window),
        ) {
            (Some(traverse_step), Some(search_highlight), Some(busy_window)) => Timings {
                traverse_step,
                search_highlight,
                busy_window,
            },
            _ => self,
        }
    }
}

impl Default for Timings {
    fn default() -> Self {
        Timings {
            traverse_step: TRAVERSE_STEP,
            search_highlight: SEARCH_HIGHLIGHT,
            busy_window: BUSY_WINDOW,
        }
    }
}

/// Something the engine should do at a later point on its clock
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimationAction {
    /// Move the highlight marker to a node (traversal step)
    Highlight(NodeId),
    /// Clear the marker, but only if it still names this node
    ClearHighlightIf(NodeId),
    /// Clear the marker and leave the busy state after a traversal
    FinishTraversal,
    /// Leave the busy state
    ReleaseBusy,
}

/// An action that became due during [`Sequencer::advance`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fired {
    pub at: Duration,
    pub action: AnimationAction,
}

#[derive(Debug, Clone)]
struct Scheduled {
    due: Duration,
    action: AnimationAction,
}

/// Timer queue over a monotonic clock that starts at zero
#[derive(Debug, Clone, Default)]
pub struct Sequencer {
    now: Duration,
    // Sorted by due time; ties keep scheduling order
    queue: Vec<Scheduled>,
}

impl Sequencer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current position of the clock
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Schedule `action` to fire `delay` after the current clock position
    pub fn schedule(&mut self, delay: Duration, action: AnimationAction) {
        let due = self.now.saturating_add(delay);
        let at = self.queue.partition_point(|s| s.due <= due);
        self.queue.insert(at, Scheduled { due, action });
    }

    /// Schedule a full traversal: one highlight per node, `step` apart, then
    /// [`AnimationAction::FinishTraversal`] one step after the last node
    ///
    /// The first highlight is due immediately.
    pub fn schedule_traversal(&mut self, nodes: &[NodeId], step: Duration) {
        let mut delay = Duration::ZERO;
        for &id in nodes {
            self.schedule(delay, AnimationAction::Highlight(id));
            delay = delay.saturating_add(step);
        }
        self.schedule(delay, AnimationAction::FinishTraversal);
    }

    /// Move the clock forward and drain every action that is now due
    pub fn advance(&mut self, elapsed: Duration) -> Vec<Fired> {
        self.now = self.now.saturating_add(elapsed);
        let due = self.queue.partition_point(|s| s.due <= self.now);
        self.queue
            .drain(..due)
            .map(|s| Fired {
                at: s.due,
                action: s.action,
            })
            .collect()
    }

    /// Time until the next action is due, if any are pending
    pub fn time_to_next(&self) -> Option<Duration> {
        self.queue
            .first()
            .map(|s| s.due.saturating_sub(self.now))
    }

    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    pub fn is_idle(&self) -> bool {
        self.queue.is_empty()
    }
}
