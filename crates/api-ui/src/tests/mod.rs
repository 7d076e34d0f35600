pub mod common;
pub mod tables;
