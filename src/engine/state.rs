// List state engine

use super::errors::OperationError;
use super::request::{DeleteFrom, InsertAt, OperationKind, OperationRequest, Outcome};
use crate::animation::{AnimationAction, Fired, Sequencer, Timings};
use crate::list::{check_links, position_index, relink, ListMode, Node, NodeId};
use crate::snapshot::{Level, NodeView, NotificationLog, StateSnapshot};
use rustc_hash::FxHashMap;
use std::time::Duration;
use tracing::{debug, info, warn};

/// Engine phase
///
/// `Busy` is an advisory gate for the front end while an animation is on
/// screen. The engine itself keeps accepting operations in either phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Busy(OperationKind),
}

/// Owns the canonical list and applies operations to it
#[derive(Debug)]
pub struct ListEngine {
    /// Nodes in list order; order is authoritative, links are derived
    nodes: Vec<Node>,

    /// Node id -> position, rebuilt on every structural change
    positions: FxHashMap<NodeId, usize>,

    mode: ListMode,

    /// At most one highlighted node; always present in `nodes` when set
    highlighted: Option<NodeId>,

    phase: Phase,

    sequencer: Sequencer,

    timings: Timings,

    notifications: NotificationLog,
}

impl ListEngine {
    /// Create an empty engine with default timings
    pub fn new(mode: ListMode) -> Self {
        Self::with_timings(mode, Timings::default())
    }

    pub fn with_timings(mode: ListMode, timings: Timings) -> Self {
        ListEngine {
            nodes: Vec::new(),
            positions: FxHashMap::default(),
            mode,
            highlighted: None,
            phase: Phase::Idle,
            sequencer: Sequencer::new(),
            timings,
            notifications: NotificationLog::default(),
        }
    }

    /// Create an engine pre-populated with `values`, without notifications or animation
    pub fn from_values(mode: ListMode, values: impl IntoIterator<Item = i64>) -> Self {
        Self::new(mode).with_values(values)
    }

    /// Append `values` silently; used to seed a list before it is shown
    pub fn with_values(mut self, values: impl IntoIterator<Item = i64>) -> Self {
        let mut nodes = std::mem::take(&mut self.nodes);
        nodes.extend(values.into_iter().map(Node::create));
        self.commit(nodes);
        self
    }

    /// Apply a request from the front end
    pub fn execute(&mut self, request: OperationRequest) -> Result<Outcome, OperationError> {
        if let Phase::Busy(running) = self.phase {
            warn!(
                requested = %request.kind(),
                %running,
                "operation submitted while busy"
            );
        }

        match request {
            OperationRequest::InsertBeginning { value } => self.insert_at_beginning(value),
            OperationRequest::InsertEnd { value } => self.insert_at_end(value),
            OperationRequest::InsertAfterKey { key, value } => self.insert_after_key(key, value),
            OperationRequest::DeleteBeginning => self.delete_from_beginning(),
            OperationRequest::DeleteEnd => self.delete_from_end(),
            OperationRequest::DeleteByKey { key } => self.delete_by_key(key),
            OperationRequest::Search { value } => self.search(value),
            OperationRequest::Traverse => self.traverse(),
            OperationRequest::Clear => Ok(self.clear()),
            OperationRequest::Reverse => self.reverse(),
            OperationRequest::ChangeMode { mode } => Ok(self.change_mode(mode)),
        }
    }

    pub fn insert_at_beginning(&mut self, value: i64) -> Result<Outcome, OperationError> {
        let outcome = self.insert_at(0, value, InsertAt::Beginning);
        self.begin_busy(OperationKind::InsertBeginning);
        self.report(Ok(outcome))
    }

    pub fn insert_at_end(&mut self, value: i64) -> Result<Outcome, OperationError> {
        let outcome = self.insert_at(self.nodes.len(), value, InsertAt::End);
        self.begin_busy(OperationKind::InsertEnd);
        self.report(Ok(outcome))
    }

    /// Insert directly after the first node whose value equals `key`
    pub fn insert_after_key(&mut self, key: i64, value: i64) -> Result<Outcome, OperationError> {
        let Some(index) = self.find_first(key) else {
            return self.report(Err(OperationError::KeyNotFound { key }));
        };

        let outcome = self.insert_at(index + 1, value, InsertAt::AfterKey(key));
        self.begin_busy(OperationKind::InsertAfterKey);
        self.report(Ok(outcome))
    }

    pub fn delete_from_beginning(&mut self) -> Result<Outcome, OperationError> {
        if self.nodes.is_empty() {
            return self.report(Err(OperationError::EmptyList));
        }

        let outcome = self.remove_at(0, DeleteFrom::Beginning);
        self.begin_busy(OperationKind::DeleteBeginning);
        self.report(Ok(outcome))
    }

    pub fn delete_from_end(&mut self) -> Result<Outcome, OperationError> {
        if self.nodes.is_empty() {
            return self.report(Err(OperationError::EmptyList));
        }

        let outcome = self.remove_at(self.nodes.len() - 1, DeleteFrom::End);
        self.begin_busy(OperationKind::DeleteEnd);
        self.report(Ok(outcome))
    }

    /// Remove the first node whose value equals `key`
    pub fn delete_by_key(&mut self, key: i64) -> Result<Outcome, OperationError> {
        let Some(index) = self.find_first(key) else {
            return self.report(Err(OperationError::KeyNotFound { key }));
        };

        let outcome = self.remove_at(index, DeleteFrom::Key(key));
        self.begin_busy(OperationKind::DeleteByKey);
        self.report(Ok(outcome))
    }

    /// Highlight the first node holding `value` and schedule the highlight to clear
    pub fn search(&mut self, value: i64) -> Result<Outcome, OperationError> {
        let Some(position) = self.find_first(value) else {
            return self.report(Err(OperationError::ValueNotFound { value }));
        };

        let id = self.nodes[position].id();
        self.highlighted = Some(id);
        self.sequencer.schedule(
            self.timings.search_highlight,
            AnimationAction::ClearHighlightIf(id),
        );

        self.report(Ok(Outcome::Found {
            id,
            value,
            position,
        }))
    }

    /// Start highlighting every node in order, one traversal step each
    pub fn traverse(&mut self) -> Result<Outcome, OperationError> {
        if self.nodes.is_empty() {
            return self.report(Err(OperationError::EmptyList));
        }

        let order: Vec<NodeId> = self.nodes.iter().map(Node::id).collect();
        self.phase = Phase::Busy(OperationKind::Traverse);
        self.sequencer
            .schedule_traversal(&order, self.timings.traverse_step);

        let result = self.report(Ok(Outcome::TraversalStarted { nodes: order.len() }));
        // First node lights up immediately
        self.advance(Duration::ZERO);
        result
    }

    pub fn reverse(&mut self) -> Result<Outcome, OperationError> {
        if self.nodes.is_empty() {
            return self.report(Err(OperationError::EmptyList));
        }

        let mut nodes = std::mem::take(&mut self.nodes);
        nodes.reverse();
        self.commit(nodes);
        self.begin_busy(OperationKind::Reverse);

        self.report(Ok(Outcome::Reversed {
            nodes: self.nodes.len(),
        }))
    }

    /// Empty the list; never fails
    pub fn clear(&mut self) -> Outcome {
        let removed = self.nodes.len();
        self.commit(Vec::new());
        self.highlighted = None;

        let outcome = Outcome::Cleared { removed };
        self.record(Ok(&outcome));
        outcome
    }

    /// Relink the current list under `mode`; order and values are untouched
    pub fn change_mode(&mut self, mode: ListMode) -> Outcome {
        self.mode = mode;
        let nodes = std::mem::take(&mut self.nodes);
        self.commit(nodes);

        info!(%mode, "list mode changed");
        let outcome = Outcome::ModeChanged { mode };
        self.record(Ok(&outcome));
        outcome
    }

    /// Move the engine clock forward, applying every animation step that became due
    ///
    /// Returns how many actions fired.
    pub fn advance(&mut self, elapsed: Duration) -> usize {
        let fired = self.sequencer.advance(elapsed);
        let count = fired.len();
        for Fired { at, action } in fired {
            self.apply(action, at);
        }
        count
    }

    /// Fire every scheduled action, jumping the clock as far as needed
    ///
    /// Leaves the engine idle with no pending animation. Returns how many
    /// actions fired.
    pub fn settle(&mut self) -> usize {
        let mut fired = 0;
        while let Some(wait) = self.sequencer.time_to_next() {
            fired += self.advance(wait);
        }
        fired
    }

    pub fn snapshot(&self) -> StateSnapshot {
        StateSnapshot {
            nodes: self.nodes.iter().map(NodeView::from).collect(),
            head: self.head(),
            tail: self.tail(),
            mode: self.mode,
            highlighted: self.highlighted,
            busy: self.is_busy(),
        }
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Node values in list order
    pub fn values(&self) -> Vec<i64> {
        self.nodes.iter().map(|n| n.value).collect()
    }

    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.positions.get(&id).map(|&i| &self.nodes[i])
    }

    pub fn position_of(&self, id: NodeId) -> Option<usize> {
        self.positions.get(&id).copied()
    }

    pub fn head(&self) -> Option<NodeId> {
        self.nodes.first().map(Node::id)
    }

    pub fn tail(&self) -> Option<NodeId> {
        self.nodes.last().map(Node::id)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn mode(&self) -> ListMode {
        self.mode
    }

    pub fn highlighted(&self) -> Option<NodeId> {
        self.highlighted
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_busy(&self) -> bool {
        matches!(self.phase, Phase::Busy(_))
    }

    pub fn notifications(&self) -> &NotificationLog {
        &self.notifications
    }

    /// Engine clock
    pub fn now(&self) -> Duration {
        self.sequencer.now()
    }

    /// Time until the next scheduled animation step, if any
    pub fn time_to_next_action(&self) -> Option<Duration> {
        self.sequencer.time_to_next()
    }

    /// First index whose value equals `value`
    fn find_first(&self, value: i64) -> Option<usize> {
        self.nodes.iter().position(|n| n.value == value)
    }

    fn insert_at(&mut self, index: usize, value: i64, at: InsertAt) -> Outcome {
        let node = Node::create(value);
        let id = node.id();

        let mut nodes = std::mem::take(&mut self.nodes);
        nodes.insert(index, node);
        self.commit(nodes);

        Outcome::Inserted {
            id,
            value,
            position: index,
            at,
        }
    }

    fn remove_at(&mut self, index: usize, from: DeleteFrom) -> Outcome {
        let mut nodes = std::mem::take(&mut self.nodes);
        let removed = nodes.remove(index);
        self.commit(nodes);

        Outcome::Deleted {
            id: removed.id(),
            value: removed.value,
            from,
        }
    }

    /// Install a new node order: relink, reindex and drop a stale highlight
    fn commit(&mut self, nodes: Vec<Node>) {
        self.nodes = relink(nodes, self.mode);
        self.positions = position_index(&self.nodes);

        if let Some(id) = self.highlighted {
            if !self.positions.contains_key(&id) {
                self.highlighted = None;
            }
        }

        debug_assert!(check_links(&self.nodes, self.mode).is_ok());
    }

    fn begin_busy(&mut self, kind: OperationKind) {
        self.phase = Phase::Busy(kind);
        self.sequencer
            .schedule(self.timings.busy_window, AnimationAction::ReleaseBusy);
    }

    fn apply(&mut self, action: AnimationAction, at: Duration) {
        match action {
            AnimationAction::Highlight(id) => {
                // The node may have been deleted while the traversal was running
                self.highlighted = self.positions.contains_key(&id).then_some(id);
            }
            AnimationAction::ClearHighlightIf(id) => {
                if self.highlighted == Some(id) {
                    self.highlighted = None;
                }
            }
            AnimationAction::FinishTraversal => {
                self.highlighted = None;
                self.phase = Phase::Idle;
                info!(?at, "traversal completed");
                self.notifications
                    .push(Level::Success, "Traversal completed", at);
            }
            AnimationAction::ReleaseBusy => {
                self.phase = Phase::Idle;
            }
        }
    }

    fn record(&mut self, result: Result<&Outcome, &OperationError>) {
        let now = self.now();
        match result {
            Ok(outcome) => {
                debug!(len = self.nodes.len(), mode = %self.mode, "{}", outcome);
                let level = match outcome {
                    Outcome::TraversalStarted { .. } | Outcome::ModeChanged { .. } => Level::Info,
                    _ => Level::Success,
                };
                self.notifications.push(level, outcome.to_string(), now);
            }
            Err(err) => {
                debug!(len = self.nodes.len(), "operation rejected: {}", err);
                self.notifications.push(Level::Error, err.to_string(), now);
            }
        }
    }

    fn report(&mut self, result: Result<Outcome, OperationError>) -> Result<Outcome, OperationError> {
        self.record(result.as_ref());
        result
    }
}

impl Default for ListEngine {
    fn default() -> Self {
        Self::new(ListMode::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MS: Duration = Duration::from_millis(1);

    fn engine(values: &[i64]) -> ListEngine {
        ListEngine::from_values(ListMode::Singly, values.iter().copied())
    }

    #[test]
    fn seeded_engine_is_idle_and_silent() {
        let engine = engine(&[1, 2, 3]);
        assert_eq!(engine.values(), vec![1, 2, 3]);
        assert_eq!(engine.phase(), Phase::Idle);
        assert!(engine.notifications().is_empty());
    }

    #[test]
    fn insert_holds_busy_for_the_window() {
        let mut engine = engine(&[]);
        engine.insert_at_end(4).unwrap();
        assert_eq!(engine.phase(), Phase::Busy(OperationKind::InsertEnd));

        engine.advance(499 * MS);
        assert!(engine.is_busy());
        engine.advance(MS);
        assert_eq!(engine.phase(), Phase::Idle);
    }

    #[test]
    fn failed_operation_leaves_phase_alone() {
        let mut engine = engine(&[1]);
        assert_eq!(
            engine.delete_by_key(8),
            Err(OperationError::KeyNotFound { key: 8 })
        );
        assert_eq!(engine.phase(), Phase::Idle);
        assert_eq!(engine.sequencer.pending(), 0);
    }

    #[test]
    fn insert_after_key_uses_first_match() {
        let mut engine = engine(&[3, 1, 3]);
        let outcome = engine.insert_after_key(3, 9).unwrap();
        assert_eq!(engine.values(), vec![3, 9, 1, 3]);
        assert!(matches!(
            outcome,
            Outcome::Inserted {
                position: 1,
                at: InsertAt::AfterKey(3),
                ..
            }
        ));
    }

    #[test]
    fn insert_after_tail_becomes_new_tail() {
        let mut engine = engine(&[1, 2]);
        engine.insert_after_key(2, 5).unwrap();
        assert_eq!(engine.values(), vec![1, 2, 5]);
        assert_eq!(engine.node(engine.tail().unwrap()).unwrap().value, 5);
    }

    #[test]
    fn deleting_highlighted_node_clears_highlight() {
        let mut engine = engine(&[1, 2]);
        engine.search(1).unwrap();
        assert!(engine.highlighted().is_some());
        engine.delete_from_beginning().unwrap();
        assert_eq!(engine.highlighted(), None);
    }

    #[test]
    fn search_clear_is_skipped_when_highlight_moved() {
        let mut engine = engine(&[1, 2]);
        engine.search(1).unwrap();
        engine.advance(1000 * MS);
        engine.search(2).unwrap();
        let second = engine.highlighted();

        // First clear fires at 3000ms and must not touch the newer highlight
        engine.advance(2000 * MS);
        assert_eq!(engine.highlighted(), second);

        engine.advance(1000 * MS);
        assert_eq!(engine.highlighted(), None);
    }

    #[test]
    fn traversal_skips_nodes_deleted_mid_run() {
        let mut engine = engine(&[1, 2, 3]);
        engine.traverse().unwrap();
        let middle = engine.nodes()[1].id();
        engine.delete_by_key(2).unwrap();

        engine.advance(800 * MS);
        assert_ne!(engine.highlighted(), Some(middle));
        assert_eq!(engine.highlighted(), None);
    }

    #[test]
    fn settle_runs_every_pending_action() {
        let mut engine = engine(&[1, 2, 3]);
        engine.search(3).unwrap();
        engine.traverse().unwrap();
        assert_eq!(engine.settle(), 4);
        assert_eq!(engine.phase(), Phase::Idle);
        assert_eq!(engine.highlighted(), None);
        assert_eq!(engine.now(), 3000 * MS);
    }

    #[test]
    fn position_index_tracks_mutations() {
        let mut engine = engine(&[1, 2, 3]);
        engine.reverse().unwrap();
        for (i, node) in engine.nodes().iter().enumerate() {
            assert_eq!(engine.position_of(node.id()), Some(i));
        }
    }

    #[test]
    fn clear_and_mode_change_do_not_set_busy() {
        let mut engine = engine(&[1, 2]);
        engine.change_mode(ListMode::Circular);
        assert!(!engine.is_busy());
        engine.clear();
        assert!(!engine.is_busy());
        assert_eq!(engine.head(), None);
        assert_eq!(engine.tail(), None);
    }

    #[test]
    fn notifications_follow_outcomes() {
        let mut engine = engine(&[]);
        engine.insert_at_beginning(5).unwrap();
        let _ = engine.search(8);
        engine.change_mode(ListMode::Doubly);

        let log: Vec<_> = engine
            .notifications()
            .iter()
            .map(|n| (n.level, n.text.as_str()))
            .collect();
        assert_eq!(
            log,
            vec![
                (Level::Success, "Inserted 5 at the beginning"),
                (Level::Error, "Value 8 not found in the list"),
                (Level::Info, "Changed to doubly linked list"),
            ]
        );
    }

    #[test]
    fn traversal_completes_on_a_saturated_clock() {
        let timings = Timings::default().scaled(4e18);
        let mut engine = ListEngine::with_timings(ListMode::Singly, timings).with_values(1..=10);
        engine.traverse().unwrap();
        engine.settle();

        assert_eq!(engine.now(), Duration::MAX);
        assert_eq!(engine.phase(), Phase::Idle);
        assert_eq!(
            engine.notifications().latest().map(|n| n.text.as_str()),
            Some("Traversal completed")
        );
    }
}
