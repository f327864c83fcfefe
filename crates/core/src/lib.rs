//! Core game logic - pure, deterministic, and testable
//!
//! This crate holds the whole game-logic state machine with **zero
//! dependencies** on UI, timers, or I/O:
//!
//! - [`catalog`]: the seven immutable piece shapes and colors
//! - [`board`]: 10x20 grid with occupancy queries and line clearing
//! - [`piece`]: the active falling piece - movement, rotation, collision
//! - [`scoring`]: saturating score accumulation and level progression
//! - [`clock`]: gravity-timer ownership over an injected scheduler capability
//! - [`session`]: the Playing/Paused/GameOver state machine tying it together
//! - [`snapshot`]: read-only frame state for renderers
//! - [`source`]: injected piece-kind supplier (seeded RNG or scripted)
//!
//! The host event loop owns the scheduler and the session, feeding commands
//! and due clock fires into the session one at a time. Same seed, same
//! command sequence, same game.
//!
//! # Example
//!
//! ```
//! use gridfall_core::{GameSession, ManualScheduler, ScriptedPieces};
//! use gridfall_types::{PieceKind, TickOutcome};
//!
//! let mut sched = ManualScheduler::new();
//! let mut game = GameSession::new(ScriptedPieces::new([PieceKind::T]), &mut sched);
//!
//! game.move_left();
//! game.rotate();
//! assert_eq!(game.tick(&mut sched), TickOutcome::Continue);
//! ```

pub mod board;
pub mod catalog;
pub mod clock;
pub mod piece;
pub mod scoring;
pub mod session;
pub mod snapshot;
pub mod source;

pub use gridfall_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use clock::{DeadlineScheduler, GameClock, ManualScheduler, Scheduler, TimerHandle};
pub use piece::ActivePiece;
pub use scoring::Progress;
pub use session::GameSession;
pub use snapshot::GameSnapshot;
pub use source::{PieceSource, RandomPieces, ScriptedPieces, SimpleRng};
