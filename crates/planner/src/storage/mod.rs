//! Storage layer: the `Store` contract and its file / in-memory backends.

mod file;
mod memory;
mod traits;

pub use file::FileStore;
pub use memory::MemoryStore;
pub use traits::{seed_data, Store, StoreData};
