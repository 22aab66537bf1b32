//! Application layer: the input session use case.

pub mod session;

pub use session::{InputSession, SessionError};
