//! CLI library components for inflammation analysis.

pub mod cli;
pub mod commands;
pub mod logging;
pub mod render;
