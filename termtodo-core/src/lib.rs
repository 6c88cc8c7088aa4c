//! Task store and filter model for `TermTodo`.
//!
//! Everything here is pure in-memory state: no terminal, no I/O, no
//! logging. The presentation layer in the `termtodo` crate owns a
//! [`TaskStore`] and drives it through its mutation methods.

pub mod filter;
pub mod store;
pub mod task;

pub use filter::{FilterMode, ParseFilterError};
pub use store::TaskStore;
pub use task::{Task, TaskId};
