pub mod file;
pub mod logs;
