//! Imperative deployment flow for the Eduble contract

pub mod deploy;
pub mod eduble;
