// Path: crates/cli/src/commands/mod.rs

pub mod cid;
pub mod config;
pub mod keys;
pub mod payload;
pub mod sign;
pub mod verify;
