//! Declarative descriptors for user-configurable settings.
//!
//! One [`SettingConfig`] describes one logical setting: its stable dotted
//! id (which doubles as the storage-key suffix and the translation-lookup
//! prefix), its typed default, variant-specific widget metadata, and an
//! optional predicate that disables the widget based on other settings'
//! pending values.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::registry::PendingValues;
use super::value::SettingValue;
use crate::core::util::bool_to_f64;

/// Computes whether a setting's widget should be disabled based on the
/// pending values of every other setting in the registry. Predicates must
/// inspect raw pending values only, never disabled flags, so that the
/// evaluation order of a recompute pass is irrelevant.
///
/// # Example
/// ```rust,ignore
/// SettingConfig::checkbox("canteen.showPrices", true)
///     .disabled_when(|pending| !pending.bool("canteen.enabled"))
/// ```
pub type DisabledFn = Option<Box<dyn Fn(&PendingValues) -> bool>>;

/// Callback fired whenever a setting's pending value changes live, before
/// any save. Used for immediate previews (e.g. re-theming while the user is
/// still inside the form).
pub type InputHandler = Box<dyn FnMut(&SettingValue)>;

/// Raw widget input as it arrives from the form frontend. Toggles come from
/// binary widgets; everything else is free text that gets coerced per
/// variant.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub enum RawInput {
    Toggle(bool),
    Text(String),
}

pub enum SettingConfig {
    Checkbox {
        id: String,
        /// The typed default, used when no stored value exists
        default: bool,
        /// See [`DisabledFn`]
        disabled: DisabledFn,
    },
    Text {
        id: String,
        default: String,
        /// See [`DisabledFn`]
        disabled: DisabledFn,
    },
    NumberInput {
        id: String,
        default: f64,
        /// Validated at the widget layer only, never by the descriptor
        min: Option<f64>,
        max: Option<f64>,
        step: Option<f64>,
        /// See [`DisabledFn`]
        disabled: DisabledFn,
    },
    Slider {
        id: String,
        default: f64,
        min: f64,
        max: f64,
        step: f64,
        /// Static human-readable labels consumed left-to-right; positions
        /// without a static label fall back to the formatted numeric value
        labels: Vec<String>,
        /// Requested label count; clamped to [2, 10] at render time
        label_count: usize,
        /// See [`DisabledFn`]
        disabled: DisabledFn,
    },
    Select {
        id: String,
        default: String,
        /// Option keys in display order. Labels are resolved through the
        /// translation contract at render time.
        options: Vec<String>,
        /// Deferred selects start with no options; the widget stays empty
        /// until [`SettingsRegistry::supply_select_options`] resolves them.
        ///
        /// [`SettingsRegistry::supply_select_options`]:
        /// super::registry::SettingsRegistry::supply_select_options
        deferred: bool,
        /// See [`DisabledFn`]
        disabled: DisabledFn,
    },
}

impl SettingConfig {
    pub fn id(&self) -> &str {
        match self {
            SettingConfig::Checkbox { id, .. } => id,
            SettingConfig::Text { id, .. } => id,
            SettingConfig::NumberInput { id, .. } => id,
            SettingConfig::Slider { id, .. } => id,
            SettingConfig::Select { id, .. } => id,
        }
    }

    pub fn default_value(&self) -> SettingValue {
        match self {
            SettingConfig::Checkbox { default, .. } => {
                SettingValue::Bool(*default)
            }
            SettingConfig::Text { default, .. } => {
                SettingValue::String(default.clone())
            }
            SettingConfig::NumberInput { default, .. } => {
                SettingValue::Number(*default)
            }
            SettingConfig::Slider { default, .. } => {
                SettingValue::Number(*default)
            }
            SettingConfig::Select { default, .. } => {
                SettingValue::String(default.clone())
            }
        }
    }

    pub fn checkbox(id: &str, default: bool) -> SettingConfig {
        SettingConfig::Checkbox {
            id: id.to_string(),
            default,
            disabled: None,
        }
    }

    pub fn text(id: &str, default: &str) -> SettingConfig {
        SettingConfig::Text {
            id: id.to_string(),
            default: default.to_string(),
            disabled: None,
        }
    }

    pub fn number(id: &str, default: f64) -> SettingConfig {
        SettingConfig::NumberInput {
            id: id.to_string(),
            default,
            min: None,
            max: None,
            step: None,
            disabled: None,
        }
    }

    pub fn slider(
        id: &str,
        default: f64,
        range: (f64, f64),
        step: f64,
    ) -> SettingConfig {
        SettingConfig::Slider {
            id: id.to_string(),
            default,
            min: range.0,
            max: range.1,
            step,
            labels: vec![],
            label_count: 2,
            disabled: None,
        }
    }

    pub fn select<S>(id: &str, default: &str, options: &[S]) -> SettingConfig
    where
        S: AsRef<str>,
    {
        SettingConfig::Select {
            id: id.to_string(),
            default: default.to_string(),
            options: options.iter().map(|s| s.as_ref().to_string()).collect(),
            deferred: false,
            disabled: None,
        }
    }

    /// A select whose options arrive later (e.g. scraped from a remote
    /// page). Empty until resolved.
    pub fn select_deferred(id: &str, default: &str) -> SettingConfig {
        SettingConfig::Select {
            id: id.to_string(),
            default: default.to_string(),
            options: vec![],
            deferred: true,
            disabled: None,
        }
    }

    /// Attaches the dependency predicate. Chainable.
    pub fn disabled_when(
        mut self,
        predicate: impl Fn(&PendingValues) -> bool + 'static,
    ) -> SettingConfig {
        match &mut self {
            SettingConfig::Checkbox { disabled, .. }
            | SettingConfig::Text { disabled, .. }
            | SettingConfig::NumberInput { disabled, .. }
            | SettingConfig::Slider { disabled, .. }
            | SettingConfig::Select { disabled, .. } => {
                *disabled = Some(Box::new(predicate));
            }
        }
        self
    }

    pub fn is_disabled(&self, pending: &PendingValues) -> bool {
        match self {
            SettingConfig::Checkbox { disabled, .. }
            | SettingConfig::Text { disabled, .. }
            | SettingConfig::NumberInput { disabled, .. }
            | SettingConfig::Slider { disabled, .. }
            | SettingConfig::Select { disabled, .. } => {
                disabled.as_ref().is_some_and(|f| f(pending))
            }
        }
    }

    /// Coerces raw widget input into this setting's value type. Numeric
    /// variants parse free text and degrade to `NaN` on garbage input;
    /// callers reading the pending value are responsible for guarding.
    pub fn coerce(&self, raw: &RawInput) -> SettingValue {
        match self {
            SettingConfig::Checkbox { .. } => match raw {
                RawInput::Toggle(v) => SettingValue::Bool(*v),
                RawInput::Text(s) => SettingValue::Bool(s == "true"),
            },
            SettingConfig::NumberInput { .. }
            | SettingConfig::Slider { .. } => match raw {
                RawInput::Toggle(v) => SettingValue::Number(bool_to_f64(*v)),
                RawInput::Text(s) => SettingValue::Number(
                    s.trim().parse::<f64>().unwrap_or(f64::NAN),
                ),
            },
            SettingConfig::Text { .. } | SettingConfig::Select { .. } => {
                match raw {
                    RawInput::Toggle(v) => {
                        SettingValue::String(v.to_string())
                    }
                    RawInput::Text(s) => SettingValue::String(s.clone()),
                }
            }
        }
    }

    /// True when `value` carries the variant this setting stores. Used to
    /// reject stored values whose type drifted (e.g. a hand-edited store
    /// file).
    pub fn accepts(&self, value: &SettingValue) -> bool {
        value.same_variant(&self.default_value())
    }

    pub fn variant_string(&self) -> String {
        (match self {
            Self::Checkbox { .. } => "Checkbox",
            Self::Text { .. } => "Text",
            Self::NumberInput { .. } => "NumberInput",
            Self::Select { .. } => "Select",
            Self::Slider { .. } => "Slider",
        })
        .to_string()
    }
}

impl Clone for SettingConfig {
    fn clone(&self) -> Self {
        match self {
            SettingConfig::Checkbox {
                id,
                default,
                disabled: _,
            } => SettingConfig::Checkbox {
                id: id.clone(),
                default: *default,
                disabled: None,
            },
            SettingConfig::Text {
                id,
                default,
                disabled: _,
            } => SettingConfig::Text {
                id: id.clone(),
                default: default.clone(),
                disabled: None,
            },
            SettingConfig::NumberInput {
                id,
                default,
                min,
                max,
                step,
                disabled: _,
            } => SettingConfig::NumberInput {
                id: id.clone(),
                default: *default,
                min: *min,
                max: *max,
                step: *step,
                disabled: None,
            },
            SettingConfig::Slider {
                id,
                default,
                min,
                max,
                step,
                labels,
                label_count,
                disabled: _,
            } => SettingConfig::Slider {
                id: id.clone(),
                default: *default,
                min: *min,
                max: *max,
                step: *step,
                labels: labels.clone(),
                label_count: *label_count,
                disabled: None,
            },
            SettingConfig::Select {
                id,
                default,
                options,
                deferred,
                disabled: _,
            } => SettingConfig::Select {
                id: id.clone(),
                default: default.clone(),
                options: options.clone(),
                deferred: *deferred,
                disabled: None,
            },
        }
    }
}

impl fmt::Debug for SettingConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingConfig::Checkbox {
                id,
                default,
                disabled,
            } => f
                .debug_struct("Checkbox")
                .field("id", id)
                .field("default", default)
                .field("disabled", &disabled.as_ref().map(|_| "<function>"))
                .finish(),
            SettingConfig::Text {
                id,
                default,
                disabled,
            } => f
                .debug_struct("Text")
                .field("id", id)
                .field("default", default)
                .field("disabled", &disabled.as_ref().map(|_| "<function>"))
                .finish(),
            SettingConfig::NumberInput {
                id,
                default,
                min,
                max,
                step,
                disabled,
            } => f
                .debug_struct("NumberInput")
                .field("id", id)
                .field("default", default)
                .field("min", min)
                .field("max", max)
                .field("step", step)
                .field("disabled", &disabled.as_ref().map(|_| "<function>"))
                .finish(),
            SettingConfig::Slider {
                id,
                default,
                min,
                max,
                step,
                labels,
                label_count,
                disabled,
            } => f
                .debug_struct("Slider")
                .field("id", id)
                .field("default", default)
                .field("min", min)
                .field("max", max)
                .field("step", step)
                .field("labels", labels)
                .field("label_count", label_count)
                .field("disabled", &disabled.as_ref().map(|_| "<function>"))
                .finish(),
            SettingConfig::Select {
                id,
                default,
                options,
                deferred,
                disabled,
            } => f
                .debug_struct("Select")
                .field("id", id)
                .field("default", default)
                .field("options", options)
                .field("deferred", deferred)
                .field("disabled", &disabled.as_ref().map(|_| "<function>"))
                .finish(),
        }
    }
}
