//! The portal's preferences declaration: every tweak the customization
//! layer offers, in the order the form shows them. Feature modules (course
//! list, canteen menu, countdown, ticker, dark mode, bookmarks) read these
//! through the hub's stored-value contract; none of them is implemented
//! here.

use log::info;
use prefhub::i18n::Translator;
use prefhub::settings::{RegistryBuilder, SettingConfig};
use serde_json::json;

pub const PREFIX: &str = "campus-";

pub fn portal_settings() -> RegistryBuilder {
    RegistryBuilder::new()
        .heading("General")
        .select("general.language", "en", &["en", "de"])
        .checkbox("general.updateNotification", true)
        .heading("Dark mode")
        .heading("Theming is previewed live while the form is open.")
        .checkbox("darkMode.enabled", false)
        .on_input(|value| {
            info!("dark mode preview: {}", value);
        })
        .setting(
            SettingConfig::slider("darkMode.brightness", 10.0, (1.0, 10.0), 1.0)
                .disabled_when(|p| !p.bool("darkMode.enabled")),
        )
        .heading("Course list")
        .number("courses.maxVisible", 10.0)
        .setting(SettingConfig::select_deferred("courses.grouping", "semester"))
        .heading("Canteen menu")
        .checkbox("canteen.enabled", true)
        .setting(
            SettingConfig::select("canteen.location", "main", &[
                "main", "north", "cafeteria",
            ])
            .disabled_when(|p| !p.bool("canteen.enabled")),
        )
        .heading("Semester countdown")
        .checkbox("countdown.enabled", false)
        .heading("News ticker")
        .checkbox("ticker.enabled", false)
        .setting(
            SettingConfig::slider("ticker.speed", 2.0, (1.0, 5.0), 1.0)
                .disabled_when(|p| !p.bool("ticker.enabled")),
        )
}

pub fn translator() -> Translator {
    Translator::new(
        "en",
        json!({
            "settings": {
                "general": {
                    "language": {
                        "name": "Language",
                        "description": "Interface language of the tweaks layer.",
                        "options": { "en": "English", "de": "Deutsch" }
                    },
                    "updateNotification": {
                        "name": "Update notifications",
                        "description": "Show a hint when a new release is available."
                    }
                },
                "darkMode": {
                    "enabled": {
                        "name": "Enable dark mode",
                        "description": "Restyles the whole portal with a dark theme."
                    },
                    "brightness": {
                        "name": "Image brightness",
                        "description": "Dims embedded images so they match the theme."
                    }
                },
                "courses": {
                    "maxVisible": {
                        "name": "Courses shown",
                        "description": "How many courses the dashboard lists before folding."
                    },
                    "grouping": {
                        "name": "Group courses by",
                        "description": "Loaded from the portal once the page is available.",
                        "options": {
                            "semester": "Semester",
                            "faculty": "Faculty"
                        }
                    }
                },
                "canteen": {
                    "enabled": {
                        "name": "Canteen menu",
                        "description": "Shows today's canteen menu on the dashboard."
                    },
                    "location": {
                        "name": "Canteen",
                        "options": {
                            "main": "Main building",
                            "north": "North campus",
                            "cafeteria": "Cafeteria"
                        }
                    }
                },
                "countdown": {
                    "enabled": {
                        "name": "Semester countdown",
                        "description": "Days until the lecture period ends."
                    }
                },
                "ticker": {
                    "enabled": {
                        "name": "News ticker",
                        "description": "Scrolls portal announcements in the header."
                    },
                    "speed": { "name": "Ticker speed" }
                }
            }
        }),
    )
}
