//! # Introduction
//!
//! LinkViz keeps a linked list in memory, applies list operations to it with
//! the pointer-rewiring rules of a singly, doubly or circular list, and
//! sequences the highlight animation a front end plays on top. A terminal
//! front end built with [ratatui](https://docs.rs/ratatui) ships alongside.
//!
//! ## Pipeline
//!
//! ```text
//! Key press → OperationRequest → ListEngine → relink → StateSnapshot → TUI
//!                                     ↓
//!                                 Sequencer (traverse / search / busy timers)
//! ```
//!
//! 1. [`list`]: nodes, list modes and the topology builder.
//! 2. [`engine`]: the operation API and the `Idle`/`Busy` phase.
//! 3. [`animation`]: the cooperative timer queue the engine schedules on.
//! 4. [`snapshot`]: serializable state snapshots and the notification log.
//! 5. [`script`]: JSON-lines operation scripts for seeding and headless runs.
//! 6. [`ui`]: ratatui-based TUI; not part of the stable library API.
//!
//! ## Example
//!
//! ```
//! use linkviz::engine::ListEngine;
//! use linkviz::list::ListMode;
//!
//! let mut engine = ListEngine::new(ListMode::Singly);
//! engine.insert_at_end(5).unwrap();
//! engine.insert_at_end(9).unwrap();
//! engine.insert_after_key(5, 7).unwrap();
//! assert_eq!(engine.values(), vec![5, 7, 9]);
//! ```

pub mod animation;
pub mod app_error;
pub mod engine;
pub mod list;
pub mod script;
pub mod snapshot;
pub mod ui;
