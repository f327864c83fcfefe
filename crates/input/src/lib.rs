//! Terminal input module.
//!
//! Maps `crossterm` key events into [`gridfall_types::Command`] values. The
//! mapping is stateless and unconditional: the core session gates commands
//! itself (paused/game-over), so it is always safe to dispatch whatever this
//! module produces. Held-key repeats come from terminal key auto-repeat.

pub mod map;

pub use gridfall_types as types;

pub use map::{map_key, should_quit};
