//! Command implementations for xtask
//!
//! Each command is a separate module that implements its own CLI args and execution logic.

mod classify;
mod validate;

pub use classify::Classify;
pub use validate::Validate;
