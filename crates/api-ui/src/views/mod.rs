//! HTML pages rendered with askama templates from `templates/`.

pub mod error;
pub mod handlers;
pub mod models;
pub mod render;
