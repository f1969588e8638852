//! The key-value store the whole engine persists into, plus the derived key
//! namespace and whole-store snapshot export/import.

use std::error::Error;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use directories_next::BaseDirs;
use indexmap::IndexMap;
use log::trace;
use serde_json::Value as JsonValue;

use crate::core::util::HashMap;

pub type StoreError = Box<dyn Error>;

/// Change notification callback: `(old_value, new_value)`. The old value is
/// `None` when the key is written for the first time.
pub type ChangeHandler = Box<dyn FnMut(Option<&JsonValue>, &JsonValue)>;

/// Derives every key the engine touches from the application prefix, e.g.
/// prefix `"campus-"` yields `campus-settings.canteen.enabled` and
/// `campus-storageVersion`. Legacy (pre-namespacing) keys used the flat
/// `campus-<name>` form, which [`Self::legacy_key`] still produces for the
/// migration runner.
#[derive(Clone, Debug)]
pub struct KeySpace {
    prefix: String,
}

impl KeySpace {
    pub fn new(prefix: &str) -> Self {
        Self {
            prefix: prefix.to_string(),
        }
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn setting_key(&self, id: &str) -> String {
        format!("{}settings.{}", self.prefix, id)
    }

    pub fn version_key(&self) -> String {
        format!("{}storageVersion", self.prefix)
    }

    pub fn legacy_key(&self, name: &str) -> String {
        format!("{}{}", self.prefix, name)
    }
}

/// Contract the engine consumes; the host environment supplies the actual
/// persistence. `get` must return a usable value immediately after
/// construction. Writes are last-write-wins; change notifications are the
/// only coordination mechanism.
pub trait SettingsStore {
    fn get(&self, key: &str) -> Option<JsonValue>;
    fn set(&mut self, key: &str, value: JsonValue) -> Result<(), StoreError>;
    fn delete(&mut self, key: &str) -> Result<(), StoreError>;
    fn list_keys(&self) -> Vec<String>;

    /// Subscribes to writes of one specific key. Handlers fire on every
    /// `set`, not on `delete`.
    fn on_change(&mut self, key: &str, handler: ChangeHandler);

    fn get_or(&self, key: &str, default: JsonValue) -> JsonValue {
        self.get(key).unwrap_or(default)
    }
}

type Watchers = HashMap<String, Vec<ChangeHandler>>;

fn notify(watchers: &mut Watchers, key: &str, old: Option<&JsonValue>, new: &JsonValue) {
    // Take handlers out while firing so a handler writing back into the
    // store cannot alias the watcher list
    if let Some(mut handlers) = watchers.remove(key) {
        for handler in handlers.iter_mut() {
            handler(old, new);
        }
        watchers
            .entry(key.to_string())
            .or_default()
            .extend(handlers);
    }
}

/// In-memory store used by tests and demos. Preserves insertion order so
/// exported snapshots are stable.
#[derive(Default)]
pub struct MemoryStore {
    values: IndexMap<String, JsonValue>,
    watchers: Watchers,
}

impl SettingsStore for MemoryStore {
    fn get(&self, key: &str) -> Option<JsonValue> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: JsonValue) -> Result<(), StoreError> {
        let old = self.values.insert(key.to_string(), value.clone());
        notify(&mut self.watchers, key, old.as_ref(), &value);
        Ok(())
    }

    fn delete(&mut self, key: &str) -> Result<(), StoreError> {
        self.values.shift_remove(key);
        Ok(())
    }

    fn list_keys(&self) -> Vec<String> {
        self.values.keys().cloned().collect()
    }

    fn on_change(&mut self, key: &str, handler: ChangeHandler) {
        self.watchers.entry(key.to_string()).or_default().push(handler);
    }
}

/// File-backed store: the entire key space lives in one JSON object,
/// rewritten on every mutation. A missing file is a fresh install, not an
/// error; everything else propagates.
pub struct JsonFileStore {
    path: PathBuf,
    values: IndexMap<String, JsonValue>,
    watchers: Watchers,
}

impl JsonFileStore {
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        let values = match fs::read(&path) {
            Ok(bytes) => serde_json::from_slice(&bytes)?,
            Err(err) if err.kind() == ErrorKind::NotFound => IndexMap::new(),
            Err(err) => return Err(err.into()),
        };
        Ok(Self {
            path,
            values,
            watchers: Watchers::default(),
        })
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    fn persist(&self) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(&self.values)?;
        if let Some(parent_dir) = self.path.parent() {
            fs::create_dir_all(parent_dir)?;
        }
        fs::write(&self.path, json)?;
        trace!("persisted {} keys to {:?}", self.values.len(), self.path);
        Ok(())
    }
}

impl SettingsStore for JsonFileStore {
    fn get(&self, key: &str) -> Option<JsonValue> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: JsonValue) -> Result<(), StoreError> {
        let old = self.values.insert(key.to_string(), value.clone());
        self.persist()?;
        notify(&mut self.watchers, key, old.as_ref(), &value);
        Ok(())
    }

    fn delete(&mut self, key: &str) -> Result<(), StoreError> {
        if self.values.shift_remove(key).is_some() {
            self.persist()?;
        }
        Ok(())
    }

    fn list_keys(&self) -> Vec<String> {
        self.values.keys().cloned().collect()
    }

    fn on_change(&mut self, key: &str, handler: ChangeHandler) {
        self.watchers.entry(key.to_string()).or_default().push(handler);
    }
}

/// The default location for the file-backed store, under the OS config dir.
pub fn default_store_path() -> Option<PathBuf> {
    BaseDirs::new()
        .map(|base| base.config_dir().join("Prefhub").join("store.json"))
}

/// Serializes every store key verbatim into a pretty JSON object. No schema
/// envelope; whatever `storageVersion` key exists rides along.
pub fn export_snapshot(store: &dyn SettingsStore) -> Result<String, StoreError> {
    let mut snapshot = serde_json::Map::new();
    for key in store.list_keys() {
        if let Some(value) = store.get(&key) {
            snapshot.insert(key, value);
        }
    }
    Ok(serde_json::to_string_pretty(&JsonValue::Object(snapshot))?)
}

/// The literal inverse of [`export_snapshot`]: every key in the uploaded
/// JSON is written back unmodified. Parsing happens up front, so a corrupt
/// file aborts before any key is written; once parsing succeeds, writes are
/// sequential and not transactional (same limitation as save). Returns the
/// number of keys written. Callers are expected to re-hydrate everything
/// afterwards (the original forces a full page reload).
pub fn import_snapshot(
    store: &mut dyn SettingsStore,
    json: &str,
) -> Result<usize, StoreError> {
    let snapshot: serde_json::Map<String, JsonValue> =
        serde_json::from_str(json)?;
    let count = snapshot.len();
    for (key, value) in snapshot {
        store.set(&key, value)?;
    }
    Ok(count)
}
