//! In-memory adapters for the outbound ports.

pub mod location;
pub mod names;
pub mod store;

pub use location::MemoryLocations;
pub use names::StaticNameFetcher;
pub use store::MemoryOrderStore;
