//! Single-user book inventory: an in-memory catalog with add, issue, return and
//! search, persisted as a json file between runs.

pub mod books;
pub mod catalog;
pub mod core;
pub mod utils;
