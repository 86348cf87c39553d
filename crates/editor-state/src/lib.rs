//! The editor session: live poster state, its history, and the operations the
//! UI drives.

pub mod session;

pub use session::{HistorySummary, PosterSession, SessionError, SessionResult};
