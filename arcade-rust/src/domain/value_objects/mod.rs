mod board;
mod history_log;
mod policy_config;
mod scoreboard;
mod streaks;

pub use board::*;
pub use history_log::*;
pub use policy_config::*;
pub use scoreboard::*;
pub use streaks::*;
