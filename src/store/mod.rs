//! Settings storage backends.

pub mod memory;
pub mod traits;

pub use memory::MemorySettingsStore;
pub use traits::{SettingsStore, StoreMetrics};
