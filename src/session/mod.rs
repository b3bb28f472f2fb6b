//! Session lifecycle and intent dispatch.
//!
//! The presentation layer owns a `GameSession`, sends it `Intent`s and reads
//! the active `Board` back to render.

pub mod intent;
pub mod game;

pub use intent::Intent;
pub use game::GameSession;
