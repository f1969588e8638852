pub mod migrations;
pub mod storage;

pub use migrations::CURRENT_STORAGE_VERSION;
pub use storage::{
    ChangeHandler, JsonFileStore, KeySpace, MemoryStore, SettingsStore,
    StoreError, default_store_path, export_snapshot, import_snapshot,
};
