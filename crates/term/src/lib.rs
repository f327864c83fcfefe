//! Terminal rendering for the game.
//!
//! [`fb`] holds the styled-character framebuffer, [`renderer`] flushes it to
//! a real terminal through crossterm, and [`game_view`] maps a core
//! `GameSnapshot` into the framebuffer. The view is pure; only the renderer
//! touches the terminal.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use gridfall_core as core;
pub use gridfall_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer};
pub use game_view::{GameView, Viewport};
pub use renderer::TerminalRenderer;
