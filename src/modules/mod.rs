//! Modules layer - Infrastructure components behind capability traits
//!
//! Contains adapters the features depend on through traits, such as credential hashing.

pub mod password;
