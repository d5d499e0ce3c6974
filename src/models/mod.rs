//! Runtime settings of the server binary.

pub mod config;
