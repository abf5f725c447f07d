mod json_file_repo;
mod memory_repo;

pub use json_file_repo::*;
pub use memory_repo::*;
