mod load_scores;
mod place_mark;
mod reset_scores;

pub use load_scores::*;
pub use place_mark::*;
pub use reset_scores::*;
