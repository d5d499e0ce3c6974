//! HTTP surface of the binary.

pub mod mock;
