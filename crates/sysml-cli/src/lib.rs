//! Command-line front end for the systems-model checker.

pub mod cli;
pub mod commands;
pub mod logging;
pub mod summary;
pub mod types;
