mod file_scanner;
mod path_validator;

pub use file_scanner::list_directory_files;
pub use path_validator::{ensure_dest_dir, validate_source_dir};
