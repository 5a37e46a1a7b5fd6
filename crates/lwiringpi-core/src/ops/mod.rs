//! Forwarding functions, one per exported operation.

pub mod board;
pub mod pins;
pub mod timing;
