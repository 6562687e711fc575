//! hashkit CLI library
//!
//! Configuration, error mapping and output rendering used by the `hashkit`
//! binary.

pub mod config;
pub mod error;
pub mod output;
