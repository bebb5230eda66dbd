// Path: crates/crypto/src/sign/mod.rs

pub mod eddsa;
pub mod record;
