//! CLI subcommand implementations.

pub mod list;
pub mod samples;
pub mod show;
pub mod summary;
