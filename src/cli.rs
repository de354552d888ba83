// CLI module - argument parsing and flag/config merging

pub mod args;

pub use args::{Cli, OutputSettings};
