// Shared utilities

pub mod constants;
pub mod dates;
pub mod query;
pub mod storage;

pub use constants::*;
pub use storage::{load_from_storage, load_raw, remove_from_storage, save_raw, save_to_storage};
