pub mod game_session;

pub use game_session::{request_proposal, GameSession, RoundReport, SessionSettings};
