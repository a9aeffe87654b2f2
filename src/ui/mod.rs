//! Terminal user interface built on [ratatui](https://github.com/ratatui-org/ratatui).
//!
//! The UI is organized into three layers:
//!
//! - **[`app`]**: application state, keyboard event loop, numeric prompts, busy gate
//! - **[`panes`]**: stateless render functions for each visible pane (list canvas,
//!   notifications, status bar)
//! - **[`theme`]**: centralized color palette used by all panes
//!
//! The entry point for consumers is [`App`]: construct it with a [`ListEngine`] and
//! call [`App::run`] to start the event loop. The UI only ever submits
//! [`OperationRequest`]s and renders [`StateSnapshot`]s.
//!
//! [`ListEngine`]: crate::engine::ListEngine
//! [`OperationRequest`]: crate::engine::OperationRequest
//! [`StateSnapshot`]: crate::snapshot::StateSnapshot
//! [`App::run`]: app::App::run

pub mod app;
pub mod panes;
pub mod theme;

pub use app::App;
