mod random_source;
mod round_service;

pub use random_source::*;
pub use round_service::*;
