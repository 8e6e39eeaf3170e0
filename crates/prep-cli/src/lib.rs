//! CLI library components for the prep toolkit.

pub mod catalog;
pub mod commands;
pub mod logging;
pub mod render;
