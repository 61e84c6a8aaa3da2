//! Core infrastructure for loadgen.
//!
//! This crate provides the event system shared by the dispatching side of the
//! load generator. Listeners registered on a dispatcher receive one event per
//! task lifecycle transition and one event when a whole task set is joined.

pub mod events;

pub use events::{EventListener, EventListeners, FnListener, LoadEvent};
