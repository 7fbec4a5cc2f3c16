//! Selection flow
//!
//! ChooseCategory → ChoosePrompt → Apply. Category choice is skipped when
//! there is at most one category, and dismissing any picker cancels the
//! whole flow without side effects.

mod apply;
mod flow;
mod preview;

pub use apply::{ApplyOutcome, NoProgress, Progress, apply_instruction};
pub use flow::{Picker, PromptItem, SelectionFlow, SelectionState};
pub use preview::{PREVIEW_CHARS, PREVIEW_MARKER, preview};
