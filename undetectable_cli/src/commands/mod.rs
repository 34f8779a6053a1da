//! CLI subcommand implementations.

pub mod detect;
pub mod documents;
pub mod submit;
