// crates/cli/src/lib.rs
pub mod args;
pub mod config;
