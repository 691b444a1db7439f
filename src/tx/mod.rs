//! Transaction utilities for interacting with the chain

pub mod abi;
pub mod client;
pub mod sender;
