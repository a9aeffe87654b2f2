//! List state engine
//!
//! This module provides the operation API the front end talks to:
//! - [`state`]: [`ListEngine`], the owner of the canonical list
//! - [`request`]: tagged operation requests and their outcomes
//! - [`errors`]: recoverable operation errors
//! - [`constants`]: default animation timings
//!
//! # Execution Model
//!
//! Every operation runs to completion synchronously. Structural changes build
//! a new node order, pass it through [`crate::list::relink`] and install it in
//! one step, so a failed operation never leaves a partially rewired list.
//! Time-based effects (traversal steps, search highlight expiry, the busy
//! window) are queued on the [`crate::animation::Sequencer`] and applied when
//! the host calls [`ListEngine::advance`].

pub mod constants;
pub mod errors;
pub mod request;
pub mod state;

pub use errors::OperationError;
pub use request::{DeleteFrom, InsertAt, OperationKind, OperationRequest, Outcome};
pub use state::{ListEngine, Phase};
