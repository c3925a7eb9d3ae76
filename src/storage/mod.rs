pub mod keys;
pub mod kv;
pub mod legacy;
pub mod log;
pub mod migrate;
pub mod pool;
pub mod stats;

pub use kv::{KvStore, MemoryStore, SqliteStore, load_json, load_or_default, save_json};
