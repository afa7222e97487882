//! Implementations of ports (hexagonal adapters).
//!
//! - [`inbound`] - Driving adapters: the command-line interface
//! - [`outbound`] - Driven adapters: in-memory stores and snapshot files

pub mod inbound;
pub mod outbound;
