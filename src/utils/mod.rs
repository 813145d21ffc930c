pub mod flat_file;
pub mod fs;
