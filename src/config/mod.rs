pub mod load;
pub mod types;

pub use types::{Config, DEFAULT_DEST_FOLDER, SortMode};
