pub mod move_analyzer;
pub mod strategies;
