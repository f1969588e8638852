//! Ordered collection of setting descriptors plus the dependency evaluator
//! that keeps disabled flags in sync with pending edits.

use indexmap::IndexMap;
use log::{debug, warn};

use super::config::{InputHandler, RawInput, SettingConfig};
use super::value::SettingValue;
use crate::core::util::HashMap;
use crate::runtime::storage::{KeySpace, SettingsStore, StoreError};
use crate::warn_once;

/// One entry in the registry's display order: either a setting (referenced
/// by id, the config lives in the id index) or a section heading, which
/// carries a display label and is excluded from the index.
#[derive(Clone, Debug, PartialEq)]
pub enum RegistryEntry {
    Heading(String),
    Setting(String),
}

/// Builder-facing entry: headings mixed with full configs in display order.
pub enum SettingsEntry {
    Heading(String),
    Setting(SettingConfig),
}

/// A read-only snapshot of every setting's pending value, handed to
/// [`DisabledFn`](super::config::DisabledFn) predicates. Accessors follow
/// the registry's lenient read style: a missing or differently-typed value
/// logs and falls back to a neutral default instead of panicking, because
/// predicates run on every form interaction.
#[derive(Clone, Debug, Default)]
pub struct PendingValues {
    values: HashMap<String, SettingValue>,
}

impl PendingValues {
    pub(crate) fn new(values: HashMap<String, SettingValue>) -> Self {
        Self { values }
    }

    pub fn bool(&self, id: &str) -> bool {
        self.values
            .get(id)
            .and_then(SettingValue::as_bool)
            .unwrap_or_else(|| {
                warn_once!("No pending bool for `{}`. Returning false.", id);
                false
            })
    }

    pub fn number(&self, id: &str) -> f64 {
        self.values
            .get(id)
            .and_then(SettingValue::as_number)
            .unwrap_or_else(|| {
                warn_once!("No pending number for `{}`. Returning 0.0.", id);
                0.0
            })
    }

    pub fn string(&self, id: &str) -> String {
        self.values
            .get(id)
            .and_then(SettingValue::as_str)
            .map(ToOwned::to_owned)
            .unwrap_or_else(|| {
                warn_once!("No pending string for `{}`. Returning empty.", id);
                "".to_string()
            })
    }

    pub fn get(&self, id: &str) -> Option<&SettingValue> {
        self.values.get(id)
    }

    pub fn has(&self, id: &str) -> bool {
        self.values.contains_key(id)
    }
}

/// The registry: declared once at startup from an ordered entry list, then
/// the single source of truth for pending values and disabled state.
///
/// Stored values are deliberately *not* cached here — reads go through the
/// store on every access so that external writers (migrations, other tabs
/// via change notifications) stay authoritative.
pub struct SettingsRegistry {
    entries: Vec<RegistryEntry>,
    configs: IndexMap<String, SettingConfig>,
    pending: HashMap<String, SettingValue>,
    disabled: HashMap<String, bool>,
    input_handlers: HashMap<String, Vec<InputHandler>>,
    select_generations: HashMap<String, u64>,
    keys: KeySpace,
    change_tracker: ChangeTracker,
}

impl SettingsRegistry {
    /// Builds the registry and hydrates every pending value from the store,
    /// falling back to the declared default when a key is absent or its
    /// stored type has drifted.
    ///
    /// # Panics
    /// Registering two settings with the same id is a programmer error and
    /// panics immediately.
    pub fn new(
        keys: KeySpace,
        entries: Vec<SettingsEntry>,
        store: &dyn SettingsStore,
    ) -> Self {
        let mut order = Vec::with_capacity(entries.len());
        let mut configs: IndexMap<String, SettingConfig> = IndexMap::new();

        for entry in entries {
            match entry {
                SettingsEntry::Heading(label) => {
                    order.push(RegistryEntry::Heading(label));
                }
                SettingsEntry::Setting(config) => {
                    let id = config.id().to_string();
                    assert!(
                        !configs.contains_key(&id),
                        "duplicate setting id `{}`",
                        id
                    );
                    order.push(RegistryEntry::Setting(id.clone()));
                    configs.insert(id, config);
                }
            }
        }

        let mut registry = Self {
            entries: order,
            configs,
            pending: HashMap::default(),
            disabled: HashMap::default(),
            input_handlers: HashMap::default(),
            select_generations: HashMap::default(),
            keys,
            change_tracker: ChangeTracker::default(),
        };

        for (id, config) in registry.configs.iter() {
            let value = hydrate_one(store, &registry.keys, id, config);
            registry.pending.insert(id.clone(), value);
        }
        registry.recompute_disabled();
        registry
    }

    pub fn entries(&self) -> &[RegistryEntry] {
        &self.entries
    }

    pub fn config(&self, id: &str) -> Option<&SettingConfig> {
        self.configs.get(id)
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.configs.keys().map(String::as_str)
    }

    pub fn has(&self, id: &str) -> bool {
        self.configs.contains_key(id)
    }

    pub fn key_space(&self) -> &KeySpace {
        &self.keys
    }

    /// The authoritative stored value: store lookup with fallback to the
    /// declared default. Never reads the pending value.
    pub fn value(&self, store: &dyn SettingsStore, id: &str) -> SettingValue {
        let config = self.config_expect(id);
        hydrate_one(store, &self.keys, id, config)
    }

    /// Persists `value` under the derived key and synchronizes the pending
    /// (displayed) value so programmatic writes stay visually consistent.
    pub fn set_value(
        &mut self,
        store: &mut dyn SettingsStore,
        id: &str,
        value: SettingValue,
    ) -> Result<(), StoreError> {
        let config = self.config_expect(id);
        assert!(
            config.accepts(&value),
            "setting `{}` is a {} and cannot store {:?}",
            id,
            config.variant_string(),
            value
        );
        store.set(&self.keys.setting_key(id), value.to_json())?;
        self.set_pending(id, value);
        Ok(())
    }

    /// The current pending (displayed) value; may diverge from the stored
    /// value until saved or discarded.
    pub fn input_value(&self, id: &str) -> SettingValue {
        self.config_expect(id);
        self.pending
            .get(id)
            .cloned()
            .expect("pending value exists for every registered id")
    }

    /// Applies raw widget input: coerces it per the setting's variant and
    /// updates the pending value, firing live-input handlers on change.
    pub fn apply_input(&mut self, id: &str, raw: &RawInput) {
        let value = self.config_expect(id).coerce(raw);
        self.set_pending(id, value);
    }

    /// Flushes the pending value into the store.
    pub fn save_input(
        &mut self,
        store: &mut dyn SettingsStore,
        id: &str,
    ) -> Result<(), StoreError> {
        let value = self.input_value(id);
        self.set_value(store, id, value)
    }

    /// Discards pending edits by copying the stored value back into the
    /// pending slot. Live-input handlers fire so previewed side effects
    /// revert too.
    pub fn reset_input(&mut self, store: &dyn SettingsStore, id: &str) {
        let value = self.value(store, id);
        self.set_pending(id, value);
    }

    /// Flushes every pending value sequentially, in declaration order.
    /// Pending `NaN` numbers (unparseable widget input) are skipped with a
    /// warning so garbage never reaches the store; the previously stored
    /// value survives. Returns the number of keys written.
    pub fn save_all(
        &mut self,
        store: &mut dyn SettingsStore,
    ) -> Result<usize, StoreError> {
        let mut staged: Vec<(String, SettingValue)> = Vec::new();
        for (id, _) in self.configs.iter() {
            let value = self.pending[id].clone();
            if value.as_number().is_some_and(f64::is_nan) {
                warn!("`{}` has unparseable numeric input; not saving", id);
                continue;
            }
            staged.push((id.clone(), value));
        }

        for (id, value) in &staged {
            store.set(&self.keys.setting_key(id), value.to_json())?;
        }
        self.change_tracker.mark_unchanged(&self.pending);
        Ok(staged.len())
    }

    /// Discards every pending edit. See [`Self::reset_input`].
    pub fn reset_all(&mut self, store: &dyn SettingsStore) {
        let ids: Vec<String> = self.configs.keys().cloned().collect();
        for id in &ids {
            self.reset_input(store, id);
        }
        self.change_tracker.mark_unchanged(&self.pending);
    }

    /// Registers a live-change listener for `id`, fired on every pending
    /// value change (user input, programmatic write, reset).
    pub fn on_input(&mut self, id: &str, handler: InputHandler) {
        self.config_expect(id);
        self.input_handlers
            .entry(id.to_string())
            .or_default()
            .push(handler);
    }

    /// Attaches the dependency predicate after construction.
    pub fn set_disabled_fn(
        &mut self,
        id: &str,
        predicate: impl Fn(&PendingValues) -> bool + 'static,
    ) {
        self.config_expect(id);
        let config = self.configs.shift_remove(id).unwrap();
        let config = config.disabled_when(predicate);
        self.configs.insert(id.to_string(), config);
        // shift_remove + insert moved the config to the back of the index;
        // restore declaration order, which the form renderer depends on
        self.restore_index_order();
    }

    /// Re-evaluates one setting's predicate against the current pending
    /// snapshot and records the result. Returns the new disabled flag.
    pub fn toggle_disabled(&mut self, id: &str) -> bool {
        let snapshot = self.pending_values();
        let result = self.config_expect(id).is_disabled(&snapshot);
        self.disabled.insert(id.to_string(), result);
        result
    }

    /// Re-evaluates every predicate against one shared snapshot. Must run
    /// after any live change to any pending value, because predicates may
    /// reference arbitrary other settings. Predicates see only raw pending
    /// values, never disabled flags, so the iteration order is irrelevant.
    pub fn recompute_disabled(&mut self) {
        let snapshot = self.pending_values();
        let mut disabled = HashMap::default();
        for (id, config) in self.configs.iter() {
            disabled.insert(id.clone(), config.is_disabled(&snapshot));
        }
        self.disabled = disabled;
    }

    pub fn is_disabled(&self, id: &str) -> bool {
        *self.disabled.get(id).unwrap_or(&false)
    }

    /// Clones the pending map into a snapshot for predicate evaluation.
    pub fn pending_values(&self) -> PendingValues {
        PendingValues::new(self.pending.clone())
    }

    /// Starts (or restarts) a deferred option load for a select and returns
    /// the generation token the eventual result must present. Bumping the
    /// generation invalidates any still-in-flight fetch.
    pub fn begin_select_load(&mut self, id: &str) -> u64 {
        self.config_expect(id);
        let generation =
            self.select_generations.entry(id.to_string()).or_insert(0);
        *generation += 1;
        *generation
    }

    /// Resolves a deferred option load. A result carrying a stale
    /// generation lost the race against a newer load and is discarded
    /// (last write wins). Returns whether the options were applied.
    pub fn supply_select_options(
        &mut self,
        id: &str,
        generation: u64,
        options: Vec<String>,
    ) -> bool {
        let current = *self.select_generations.get(id).unwrap_or(&0);
        if generation != current {
            debug!(
                "discarding stale options for `{}` (generation {} < {})",
                id, generation, current
            );
            return false;
        }
        match self.configs.get_mut(id) {
            Some(SettingConfig::Select {
                options: slot,
                ..
            }) => {
                *slot = options;
                self.change_tracker.mark_changed();
                true
            }
            Some(_) => {
                warn!("`{}` is not a select; ignoring supplied options", id);
                false
            }
            None => panic!("unknown setting id `{}`", id),
        }
    }

    pub fn changed(&self) -> bool {
        self.change_tracker.changed()
    }

    pub fn any_changed_in(&self, ids: &[&str]) -> bool {
        self.change_tracker.any_changed_in(ids, &self.pending)
    }

    pub fn mark_unchanged(&mut self) {
        self.change_tracker.mark_unchanged(&self.pending);
    }

    pub fn mark_changed(&mut self) {
        self.change_tracker.mark_changed();
    }

    fn config_expect(&self, id: &str) -> &SettingConfig {
        self.configs
            .get(id)
            .unwrap_or_else(|| panic!("unknown setting id `{}`", id))
    }

    fn set_pending(&mut self, id: &str, value: SettingValue) {
        let unchanged = self.pending.get(id) == Some(&value);
        if unchanged {
            return;
        }
        self.pending.insert(id.to_string(), value.clone());
        self.change_tracker.mark_changed();

        // Take handlers out while firing so a handler cannot observe the
        // registry mid-mutation
        if let Some(mut handlers) = self.input_handlers.remove(id) {
            for handler in handlers.iter_mut() {
                handler(&value);
            }
            self.input_handlers.insert(id.to_string(), handlers);
        }
    }

    fn restore_index_order(&mut self) {
        let order: Vec<String> = self
            .entries
            .iter()
            .filter_map(|e| match e {
                RegistryEntry::Setting(id) => Some(id.clone()),
                RegistryEntry::Heading(_) => None,
            })
            .collect();
        self.configs
            .sort_by(|a_id, _, b_id, _| {
                let a = order.iter().position(|id| id == a_id);
                let b = order.iter().position(|id| id == b_id);
                a.cmp(&b)
            });
    }
}

fn hydrate_one(
    store: &dyn SettingsStore,
    keys: &KeySpace,
    id: &str,
    config: &SettingConfig,
) -> SettingValue {
    let Some(json) = store.get(&keys.setting_key(id)) else {
        return config.default_value();
    };
    match SettingValue::from_json(&json) {
        Some(value) if config.accepts(&value) => value,
        Some(value) => {
            warn!(
                "stored value for `{}` is {:?} but the setting is a {}; \
                 using the default",
                id,
                value,
                config.variant_string()
            );
            config.default_value()
        }
        None => {
            warn!(
                "stored value for `{}` has no widget representation; \
                 using the default",
                id
            );
            config.default_value()
        }
    }
}

/// Fluent construction of the ordered entry list, mirroring how the
/// preferences form is declared: headings open sections, settings follow.
#[derive(Default)]
pub struct RegistryBuilder {
    entries: Vec<SettingsEntry>,
    handlers: Vec<(String, InputHandler)>,
}

impl RegistryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entry(mut self, entry: SettingsEntry) -> Self {
        self.entries.push(entry);
        self
    }

    pub fn heading(self, label: &str) -> Self {
        self.entry(SettingsEntry::Heading(label.to_string()))
    }

    pub fn setting(self, config: SettingConfig) -> Self {
        self.entry(SettingsEntry::Setting(config))
    }

    pub fn checkbox(self, id: &str, default: bool) -> Self {
        self.setting(SettingConfig::checkbox(id, default))
    }

    pub fn text(self, id: &str, default: &str) -> Self {
        self.setting(SettingConfig::text(id, default))
    }

    pub fn number(self, id: &str, default: f64) -> Self {
        self.setting(SettingConfig::number(id, default))
    }

    pub fn slider(
        self,
        id: &str,
        default: f64,
        range: (f64, f64),
        step: f64,
    ) -> Self {
        self.setting(SettingConfig::slider(id, default, range, step))
    }

    pub fn select<S>(self, id: &str, default: &str, options: &[S]) -> Self
    where
        S: AsRef<str>,
    {
        self.setting(SettingConfig::select(id, default, options))
    }

    /// Registers a live-change listener on the most recently added setting.
    ///
    /// # Panics
    /// Calling this before any setting was added, or directly after a
    /// heading, is a programmer error.
    pub fn on_input(
        mut self,
        handler: impl FnMut(&SettingValue) + 'static,
    ) -> Self {
        let id = match self.entries.last() {
            Some(SettingsEntry::Setting(config)) => config.id().to_string(),
            _ => panic!("on_input must follow a setting entry"),
        };
        self.handlers.push((id, Box::new(handler)));
        self
    }

    pub fn build(
        self,
        keys: KeySpace,
        store: &dyn SettingsStore,
    ) -> SettingsRegistry {
        let mut registry = SettingsRegistry::new(keys, self.entries, store);
        for (id, handler) in self.handlers {
            registry.on_input(&id, handler);
        }
        registry
    }
}

#[derive(Clone, Debug)]
struct ChangeTracker {
    changed: bool,
    previous_values: HashMap<String, SettingValue>,
}

impl Default for ChangeTracker {
    fn default() -> Self {
        Self {
            changed: true,
            previous_values: HashMap::default(),
        }
    }
}

impl ChangeTracker {
    fn changed(&self) -> bool {
        self.changed
    }

    fn any_changed_in(
        &self,
        ids: &[&str],
        values: &HashMap<String, SettingValue>,
    ) -> bool {
        for id in ids {
            if !values.contains_key(*id) {
                panic!("setting `{}` does not exist", id);
            }
        }

        if self.previous_values.is_empty() {
            return true;
        }

        for id in ids {
            if let (Some(current), Some(previous)) =
                (values.get(*id), self.previous_values.get(*id))
            {
                if current != previous {
                    return true;
                }
            }
        }

        false
    }

    fn mark_unchanged(&mut self, latest_values: &HashMap<String, SettingValue>) {
        self.changed = false;
        self.previous_values = latest_values.clone();
    }

    fn mark_changed(&mut self) {
        self.changed = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runtime::storage::MemoryStore;

    fn keys() -> KeySpace {
        KeySpace::new("campus-")
    }

    fn two_setting_registry(store: &MemoryStore) -> SettingsRegistry {
        RegistryBuilder::new()
            .heading("Canteen")
            .checkbox("canteen.enabled", false)
            .setting(
                SettingConfig::checkbox("canteen.showPrices", true)
                    .disabled_when(|p| !p.bool("canteen.enabled")),
            )
            .build(keys(), store)
    }

    #[test]
    fn test_defaults_when_store_empty() {
        let store = MemoryStore::default();
        let registry = two_setting_registry(&store);

        assert_eq!(
            registry.value(&store, "canteen.enabled"),
            SettingValue::Bool(false)
        );
        assert_eq!(
            registry.input_value("canteen.enabled"),
            SettingValue::Bool(false)
        );
    }

    #[test]
    fn test_set_value_syncs_pending() {
        let mut store = MemoryStore::default();
        let mut registry = two_setting_registry(&store);

        registry
            .set_value(&mut store, "canteen.enabled", SettingValue::Bool(true))
            .unwrap();

        assert_eq!(
            registry.value(&store, "canteen.enabled"),
            SettingValue::Bool(true)
        );
        assert_eq!(
            registry.input_value("canteen.enabled"),
            SettingValue::Bool(true)
        );
    }

    #[test]
    fn test_live_edit_does_not_touch_store() {
        let mut store = MemoryStore::default();
        let mut registry = two_setting_registry(&store);

        registry.apply_input("canteen.enabled", &RawInput::Toggle(true));

        assert_eq!(
            registry.value(&store, "canteen.enabled"),
            SettingValue::Bool(false)
        );
        assert_eq!(
            registry.input_value("canteen.enabled"),
            SettingValue::Bool(true)
        );

        registry.save_input(&mut store, "canteen.enabled").unwrap();
        assert_eq!(
            registry.value(&store, "canteen.enabled"),
            SettingValue::Bool(true)
        );
    }

    #[test]
    fn test_reset_input_discards_edit() {
        let store = MemoryStore::default();
        let mut registry = two_setting_registry(&store);

        registry.apply_input("canteen.enabled", &RawInput::Toggle(true));
        registry.reset_input(&store, "canteen.enabled");

        assert_eq!(
            registry.input_value("canteen.enabled"),
            SettingValue::Bool(false)
        );
    }

    #[test]
    fn test_dependency_flips_in_same_pass() {
        let store = MemoryStore::default();
        let mut registry = two_setting_registry(&store);

        assert!(registry.is_disabled("canteen.showPrices"));

        registry.apply_input("canteen.enabled", &RawInput::Toggle(true));
        registry.recompute_disabled();
        assert!(!registry.is_disabled("canteen.showPrices"));

        registry.apply_input("canteen.enabled", &RawInput::Toggle(false));
        registry.recompute_disabled();
        assert!(registry.is_disabled("canteen.showPrices"));
    }

    #[test]
    fn test_predicates_are_order_independent() {
        // B's predicate references A even though B is registered first
        let store = MemoryStore::default();
        let mut registry = RegistryBuilder::new()
            .setting(
                SettingConfig::checkbox("b", false)
                    .disabled_when(|p| !p.bool("a")),
            )
            .checkbox("a", false)
            .build(keys(), &store);

        registry.apply_input("a", &RawInput::Toggle(true));
        registry.recompute_disabled();
        assert!(!registry.is_disabled("b"));
    }

    #[test]
    #[should_panic(expected = "duplicate setting id")]
    fn test_duplicate_id_panics() {
        let store = MemoryStore::default();
        let _ = RegistryBuilder::new()
            .checkbox("x", false)
            .checkbox("x", true)
            .build(keys(), &store);
    }

    #[test]
    #[should_panic(expected = "unknown setting id")]
    fn test_unknown_id_panics() {
        let store = MemoryStore::default();
        let registry = two_setting_registry(&store);
        registry.input_value("does.not.exist");
    }

    #[test]
    fn test_on_input_fires_on_live_change() {
        use std::cell::RefCell;
        use std::rc::Rc;

        let seen: Rc<RefCell<Vec<SettingValue>>> =
            Rc::new(RefCell::new(vec![]));
        let sink = seen.clone();

        let store = MemoryStore::default();
        let mut registry = RegistryBuilder::new()
            .checkbox("darkMode.enabled", false)
            .on_input(move |value| sink.borrow_mut().push(value.clone()))
            .build(keys(), &store);

        registry.apply_input("darkMode.enabled", &RawInput::Toggle(true));
        registry.apply_input("darkMode.enabled", &RawInput::Toggle(true));
        registry.apply_input("darkMode.enabled", &RawInput::Toggle(false));

        // the duplicate toggle does not re-fire
        assert_eq!(
            *seen.borrow(),
            vec![SettingValue::Bool(true), SettingValue::Bool(false)]
        );
    }

    #[test]
    fn test_set_disabled_fn_after_build() {
        let store = MemoryStore::default();
        let mut registry = RegistryBuilder::new()
            .heading("Canteen")
            .checkbox("canteen.enabled", false)
            .checkbox("canteen.showPrices", true)
            .checkbox("canteen.highlightFavorites", true)
            .build(keys(), &store);

        // no predicate yet
        assert!(!registry.toggle_disabled("canteen.showPrices"));

        registry.set_disabled_fn("canteen.showPrices", |p| {
            !p.bool("canteen.enabled")
        });
        assert!(registry.toggle_disabled("canteen.showPrices"));
        assert!(registry.is_disabled("canteen.showPrices"));

        registry.apply_input("canteen.enabled", &RawInput::Toggle(true));
        assert!(!registry.toggle_disabled("canteen.showPrices"));

        // attaching a predicate mid-list must not disturb declaration order
        let ids: Vec<&str> = registry.ids().collect();
        assert_eq!(
            ids,
            vec![
                "canteen.enabled",
                "canteen.showPrices",
                "canteen.highlightFavorites"
            ]
        );
    }

    #[test]
    fn test_save_all_skips_nan() {
        let mut store = MemoryStore::default();
        let mut registry = RegistryBuilder::new()
            .number("courses.maxVisible", 10.0)
            .checkbox("courses.enabled", true)
            .build(keys(), &store);

        registry.apply_input(
            "courses.maxVisible",
            &RawInput::Text("garbage".to_string()),
        );
        let written = registry.save_all(&mut store).unwrap();

        assert_eq!(written, 1);
        assert_eq!(
            registry.value(&store, "courses.maxVisible"),
            SettingValue::Number(10.0)
        );
    }

    #[test]
    fn test_stale_select_options_are_discarded() {
        let store = MemoryStore::default();
        let mut registry = RegistryBuilder::new()
            .setting(SettingConfig::select_deferred("courses.grouping", ""))
            .build(keys(), &store);

        let first = registry.begin_select_load("courses.grouping");
        let second = registry.begin_select_load("courses.grouping");

        assert!(!registry.supply_select_options(
            "courses.grouping",
            first,
            vec!["semester".to_string()]
        ));
        assert!(registry.supply_select_options(
            "courses.grouping",
            second,
            vec!["semester".to_string(), "faculty".to_string()]
        ));

        match registry.config("courses.grouping").unwrap() {
            SettingConfig::Select { options, .. } => {
                assert_eq!(options.len(), 2);
            }
            _ => unreachable!(),
        }
    }

    #[test]
    fn test_hydration_ignores_drifted_type() {
        let mut store = MemoryStore::default();
        store
            .set(&keys().setting_key("x"), serde_json::json!("not a bool"))
            .unwrap();

        let registry =
            RegistryBuilder::new().checkbox("x", true).build(keys(), &store);
        assert_eq!(registry.input_value("x"), SettingValue::Bool(true));
    }

    #[test]
    fn test_change_tracker() {
        let store = MemoryStore::default();
        let mut registry = two_setting_registry(&store);

        assert!(registry.changed());
        registry.mark_unchanged();
        assert!(!registry.changed());

        registry.apply_input("canteen.enabled", &RawInput::Toggle(true));
        assert!(registry.changed());
        assert!(registry.any_changed_in(&["canteen.enabled"]));
    }
}
