pub mod bot;
pub mod config;
pub mod random;
pub mod storage;
