//! Translation lookup contract consumed by the form renderer.
//!
//! Keys are dotted paths into a nested JSON table
//! (`settings.<id>.name`, `settings.<id>.description`,
//! `settings.<id>.options.<key>`). A missing key falls back to the raw key
//! with a one-time warning so untranslated builds stay usable.

use serde_json::Value as JsonValue;

use crate::warn_once;

pub struct Translator {
    locale: String,
    table: JsonValue,
}

impl Translator {
    pub fn new(locale: &str, table: JsonValue) -> Self {
        Self {
            locale: locale.to_string(),
            table,
        }
    }

    /// A translator with no table; every lookup falls back to the raw key.
    pub fn empty() -> Self {
        Self::new("en", JsonValue::Null)
    }

    pub fn from_json_str(locale: &str, json: &str) -> serde_json::Result<Self> {
        Ok(Self::new(locale, serde_json::from_str(json)?))
    }

    pub fn locale(&self) -> &str {
        &self.locale
    }

    /// Resolves `key` against the table, applying `{placeholder}`
    /// substitutions in order.
    pub fn translate(&self, key: &str, substitutions: &[(&str, &str)]) -> String {
        let mut node = &self.table;
        for segment in key.split('.') {
            match node.get(segment) {
                Some(child) => node = child,
                None => {
                    warn_once!("missing translation for `{}`", key);
                    return key.to_string();
                }
            }
        }

        let Some(text) = node.as_str() else {
            warn_once!("translation for `{}` is not a string", key);
            return key.to_string();
        };

        let mut result = text.to_string();
        for (name, value) in substitutions {
            result = result.replace(&format!("{{{}}}", name), value);
        }
        result
    }

    pub fn setting_name(&self, id: &str) -> String {
        self.translate(&format!("settings.{}.name", id), &[])
    }

    pub fn setting_description(&self, id: &str) -> String {
        self.translate(&format!("settings.{}.description", id), &[])
    }

    pub fn option_label(&self, id: &str, option_key: &str) -> String {
        self.translate(&format!("settings.{}.options.{}", id, option_key), &[])
    }
}
