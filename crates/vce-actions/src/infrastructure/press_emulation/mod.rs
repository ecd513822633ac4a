//! Press executor implementations.

pub mod mock;
