//! Scripts for deploying the Eduble smart contract and bootstrapping its
//! access control.

#![deny(clippy::missing_docs_in_private_items)]

pub mod artifact;
pub mod cli;
pub mod commands;
pub mod constants;
pub mod errors;
pub mod plan;
pub mod roles;

/// Our deploy flow
pub mod deploy;

pub mod tx;
