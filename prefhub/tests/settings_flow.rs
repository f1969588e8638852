//! End-to-end flow: legacy store → migration → hydration → live edits →
//! save → export/import → rebuilt hub.

mod support;

use prefhub::form::{FormEvent, FormOutcome};
use prefhub::i18n::Translator;
use prefhub::runtime::{CURRENT_STORAGE_VERSION, MemoryStore, SettingsStore};
use prefhub::settings::{RawInput, SettingValue, SettingsHub};
use serde_json::json;

#[test]
fn legacy_store_is_migrated_then_hydrated() {
    let mut store = MemoryStore::default();
    store.set("campus-seen-settings", json!(["a", "b"])).unwrap();
    store.set("campus-language", json!("de")).unwrap();

    let hub = SettingsHub::new(
        "campus-",
        support::portal_builder(),
        store,
        support::portal_translator(),
    )
    .unwrap();

    assert_eq!(hub.string("general.language"), "de");
    assert_eq!(
        hub.store().get("campus-storageVersion"),
        Some(json!(CURRENT_STORAGE_VERSION))
    );
    assert_eq!(hub.store().get("campus-language"), None);
}

#[test]
fn form_renders_translated_sections() {
    let hub = SettingsHub::new(
        "campus-",
        support::portal_builder(),
        MemoryStore::default(),
        support::portal_translator(),
    )
    .unwrap();

    let model = hub.render_form();

    // implicit general group + three headed sections
    assert_eq!(model.sections.len(), 4);
    assert_eq!(model.sections[1].title, "Dark mode");
    assert_eq!(
        model.sections[1].description,
        vec!["Previewed live while the form is open."]
    );
    assert_eq!(model.sections[1].rows[0].label, "Enable dark mode");
    // untranslated ids fall back to the raw lookup key
    assert_eq!(
        model.sections[2].rows[0].label,
        "settings.courses.maxVisible.name"
    );
    assert_eq!(
        model.sections[0].rows[0].widget.options[1].label,
        "Deutsch"
    );
}

#[test]
fn edit_save_export_import_round_trip() {
    let mut hub = SettingsHub::new(
        "campus-",
        support::portal_builder(),
        MemoryStore::default(),
        support::portal_translator(),
    )
    .unwrap();

    hub.apply(FormEvent::Input {
        id: "darkMode.enabled".to_string(),
        value: RawInput::Toggle(true),
    })
    .unwrap();
    hub.apply(FormEvent::Input {
        id: "courses.maxVisible".to_string(),
        value: RawInput::Text("nonsense".to_string()),
    })
    .unwrap();

    // the dependent slider unlocked within the same pass
    let model = hub.render_form();
    assert!(!model.sections[1].rows[1].widget.disabled);

    // everything flushes except the NaN number, which is skipped
    let outcome = hub.apply(FormEvent::Save).unwrap();
    assert_eq!(outcome, FormOutcome::Saved(7));
    assert!(hub.bool("darkMode.enabled"));
    assert_eq!(hub.number("courses.maxVisible"), 10.0);

    let snapshot = hub.export().unwrap();
    let mut scratch = MemoryStore::default();
    prefhub::runtime::import_snapshot(&mut scratch, &snapshot).unwrap();

    let rebuilt = SettingsHub::new(
        "campus-",
        support::portal_builder(),
        scratch,
        Translator::empty(),
    )
    .unwrap();
    assert!(rebuilt.bool("darkMode.enabled"));
    assert_eq!(
        rebuilt.registry().input_value("darkMode.enabled"),
        SettingValue::Bool(true)
    );
}

#[test]
fn cancel_reverts_pending_edits_everywhere() {
    let mut hub = SettingsHub::new(
        "campus-",
        support::portal_builder(),
        MemoryStore::default(),
        support::portal_translator(),
    )
    .unwrap();

    hub.apply(FormEvent::Input {
        id: "canteen.enabled".to_string(),
        value: RawInput::Toggle(false),
    })
    .unwrap();
    let model = hub.render_form();
    assert!(model.sections[3].rows[1].widget.disabled);

    hub.apply(FormEvent::Cancel).unwrap();
    let model = hub.render_form();
    assert_eq!(model.sections[3].rows[0].widget.value, "true");
    assert!(!model.sections[3].rows[1].widget.disabled);
}
