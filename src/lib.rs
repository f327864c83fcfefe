//! Gridfall (workspace facade crate).
//!
//! This package keeps a single `gridfall::{core,input,term,types}` public
//! API while the implementation lives in dedicated crates under `crates/`.

pub use gridfall_core as core;
pub use gridfall_input as input;
pub use gridfall_term as term;
pub use gridfall_types as types;
