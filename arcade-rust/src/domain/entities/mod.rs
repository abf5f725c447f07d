mod game_move;
mod round;
mod rps_session;
mod tic_tac_toe;

pub use game_move::*;
pub use round::*;
pub use rps_session::*;
pub use tic_tac_toe::*;
