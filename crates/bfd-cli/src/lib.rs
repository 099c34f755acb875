//! CLI library components for `bfd-export`.

pub mod cli;
pub mod commands;
pub mod logging;
pub mod summary;
