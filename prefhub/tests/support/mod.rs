use prefhub::i18n::Translator;
use prefhub::settings::{RegistryBuilder, SettingConfig};
use serde_json::json;

/// The portal's real preferences layout, trimmed to what the flow tests
/// exercise: an implicit general group, then sections with dependencies and
/// every widget variant.
pub fn portal_builder() -> RegistryBuilder {
    RegistryBuilder::new()
        .select("general.language", "en", &["en", "de"])
        .checkbox("general.updateNotification", true)
        .heading("Dark mode")
        .heading("Previewed live while the form is open.")
        .checkbox("darkMode.enabled", false)
        .setting(
            SettingConfig::slider("darkMode.brightness", 10.0, (1.0, 10.0), 1.0)
                .disabled_when(|p| !p.bool("darkMode.enabled")),
        )
        .heading("Courses")
        .number("courses.maxVisible", 10.0)
        .setting(SettingConfig::select_deferred("courses.grouping", "semester"))
        .heading("Canteen menu")
        .checkbox("canteen.enabled", true)
        .setting(
            SettingConfig::text("canteen.favorite", "")
                .disabled_when(|p| !p.bool("canteen.enabled")),
        )
}

pub fn portal_translator() -> Translator {
    Translator::new(
        "en",
        json!({
            "settings": {
                "darkMode": {
                    "enabled": {
                        "name": "Enable dark mode",
                        "description": "Stops the portal from searing your retinas at night."
                    }
                },
                "general": {
                    "language": {
                        "name": "Language",
                        "options": { "en": "English", "de": "Deutsch" }
                    }
                }
            }
        }),
    )
}
