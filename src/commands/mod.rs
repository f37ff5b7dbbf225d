//! Task Command Wrappers
//!
//! Async operations against the browser-local task repository, shaped like
//! calls to a remote list endpoint.

mod task;

pub use task::*;
