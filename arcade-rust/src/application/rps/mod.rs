mod play_round;

pub use play_round::*;
