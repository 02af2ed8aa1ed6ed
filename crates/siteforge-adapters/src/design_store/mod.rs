//! Design document persistence adapters.

mod memory;

pub use memory::InMemoryDesignStore;
