//! Arcade game engines: Rock-Paper-Scissors against an adaptive opponent,
//! plus a two-player Tic-Tac-Toe with persisted scores.

pub mod application;
pub mod domain;
pub mod infrastructure;

pub use domain::entities::{Move, Outcome, RoundResult, RpsSession, TicTacToeGame};
pub use infrastructure::config::AppConfig;
