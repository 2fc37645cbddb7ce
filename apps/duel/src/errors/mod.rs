//! Error handling for the card duel.

pub mod domain;

pub use domain::DomainError;
