//! Error types for quickprompts
//!
//! A single error enum covers every failure path of the rewrite flow and the
//! catalog editor. Each variant maps onto a user-facing notice category:
//! - UserInput: no document, empty selection, no prompts
//! - Config / Auth: missing settings, missing API key
//! - Remote: the completion call failed
//! - Validation: the editor refused to save
//!
//! No error is fatal; every path returns the caller to an idle state.

mod constructors;
mod conversions;
mod types;
mod user_messages;

pub use types::{QpError, QpResult};
pub use user_messages::{ErrorCategory, UserNotice};
