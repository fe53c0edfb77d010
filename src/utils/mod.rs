// Shared helpers

pub mod class_names;
pub mod file;
pub mod time;

pub use class_names::cn;
pub use file::read_file_to_string;
pub use time::{format_distance, format_distance_to_now};
