pub mod rps;
pub mod tictactoe;
