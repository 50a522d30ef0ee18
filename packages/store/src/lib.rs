pub mod config;
pub mod kv;

mod memory;
pub use memory::MemoryStore;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod local;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use local::LocalStorageStore;

pub use config::{ApiConfig, ApiSurface, AppConfig, UiConfig};
pub use kv::{KeyValueStore, TOKEN_KEY};

/// The key-value store backing the session on the current platform.
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub type PlatformStore = LocalStorageStore;

/// The key-value store backing the session on the current platform.
#[cfg(not(all(target_arch = "wasm32", feature = "web")))]
pub type PlatformStore = MemoryStore;

/// Create the platform-appropriate key-value store.
pub fn platform_store() -> PlatformStore {
    PlatformStore::new()
}
