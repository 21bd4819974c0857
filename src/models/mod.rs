//! Domain models for the todo API.
//!
//! # Core Concepts
//!
//! - [`Todo`]: A single task record. The id and creation time are assigned by the
//!   service on creation and never change afterwards.
//! - [`CreateTodoInput`] / [`UpdateTodoInput`]: Typed request payloads. Updates are
//!   partial: every field is either "leave unchanged" (`None`) or "set to value".

mod todo;

pub use todo::*;
