//! CLI commands

pub mod categories;
pub mod list;
pub mod show;
