//! Gameplay state

mod session;

pub use session::{GameStatus, GuessError, MAX_ATTEMPTS, Session};
