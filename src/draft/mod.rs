//! Draft state machine.
//!
//! # Module structure
//! - `state` - `Phase`, `DraftState` and the frozen `Draft` handed to callers
//! - `command` - `DraftCommand`, the only way to mutate a draft
//! - `accumulator` - `DraftAccumulator`, sole owner of the `DraftState`

mod accumulator;
mod command;
mod state;

pub use accumulator::{Applied, DraftAccumulator};
pub use command::DraftCommand;
pub use state::{Draft, DraftState, Phase};
