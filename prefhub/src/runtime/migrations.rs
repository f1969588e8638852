//! One-time startup rewriting of persisted keys across schema versions.
//!
//! Runs before the registry hydrates so descriptors only ever see keys in
//! the current namespace. Store failures propagate uncaught — a migration
//! that cannot read or write its store is an unrecoverable initialization
//! error for the whole engine.

use log::{debug, info};

use super::storage::{KeySpace, SettingsStore, StoreError};

pub const CURRENT_STORAGE_VERSION: u64 = 2;

struct MigrationStep {
    to_version: u64,
    apply: fn(&mut dyn SettingsStore, &KeySpace) -> Result<(), StoreError>,
}

const STEPS: &[MigrationStep] = &[MigrationStep {
    to_version: 2,
    apply: namespace_legacy_keys,
}];

/// Applies every step whose target version exceeds the persisted version,
/// then stamps the current version. A second run finds the store already
/// current and performs no writes at all.
pub fn run(
    store: &mut dyn SettingsStore,
    keys: &KeySpace,
) -> Result<(), StoreError> {
    let version_key = keys.version_key();

    // A brand-new install has no legacy keys to migrate; jump straight to
    // the current version without probing for any
    if store.list_keys().is_empty() {
        store.set(&version_key, CURRENT_STORAGE_VERSION.into())?;
        info!(
            "fresh install; storage initialized at version {}",
            CURRENT_STORAGE_VERSION
        );
        return Ok(());
    }

    let version = store
        .get(&version_key)
        .and_then(|v| v.as_u64())
        .unwrap_or(0);

    if version >= CURRENT_STORAGE_VERSION {
        debug!("storage already at version {}", version);
        return Ok(());
    }

    for step in STEPS {
        if version < step.to_version {
            info!("migrating storage to version {}", step.to_version);
            (step.apply)(store, keys)?;
        }
    }

    store.set(&version_key, CURRENT_STORAGE_VERSION.into())?;
    Ok(())
}

/// v2: early releases stored a flat `<prefix>seen-settings` list (which
/// settings the user has already been shown) and a flat `<prefix>language`
/// scalar. Both move under the `settings.general.*` namespace; the legacy
/// keys are deleted. Absent legacy keys are a no-op, not an error.
fn namespace_legacy_keys(
    store: &mut dyn SettingsStore,
    keys: &KeySpace,
) -> Result<(), StoreError> {
    let moves = [
        ("seen-settings", "general.seenSettings"),
        ("language", "general.language"),
    ];

    for (legacy, id) in moves {
        let legacy_key = keys.legacy_key(legacy);
        if let Some(value) = store.get(&legacy_key) {
            store.set(&keys.setting_key(id), value)?;
            store.delete(&legacy_key)?;
        }
    }

    Ok(())
}
