pub mod fixture;
pub mod json_file;
