//! Normalize experiment directory names (`px` id, eight digit date, free text)
//! and file the directories under a configured home directory.

pub mod config;
pub mod consts;
pub mod fs;
pub mod name;
pub mod types;

pub use config::{Config, ConfigError};
pub use fs::{Relocator, process_all, read_path_list};
pub use name::parse_directory_name;
pub use types::{DirectoryNameFeatures, Outcome, RelocateError, Summary};
