//! Turns the registry into a sectioned, collapsible form model and feeds
//! user interaction back into it.
//!
//! # Event Flow
//! ```md
//! Frontend Interaction ->
//! FormEvent ->
//! FormEngine::apply (coerce input, fire live handlers, recompute disabled) ->
//! FormEngine::render (fresh FormModel for the frontend)
//! ```
//! The model is a plain serializable tree so any frontend (web view, TUI,
//! test harness) can consume it without linking against widget code.

pub mod slider;

use log::warn;
use serde::{Deserialize, Serialize};

use crate::i18n::Translator;
use crate::runtime::storage::{SettingsStore, StoreError};
use crate::settings::config::{RawInput, SettingConfig};
use crate::settings::registry::{RegistryEntry, SettingsRegistry};

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub enum WidgetKind {
    Checkbox,
    NumberInput,
    Select,
    Slider,
    Text,
}

/// Provides a uniform type for all widget variants rather than an enum per
/// kind. Over-packing keeps the frontend contract flat: every row carries
/// the same fields and unused ones hold defaults.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Widget {
    pub kind: WidgetKind,
    /// The displayed (pending) value, stringly typed for the frontend
    pub value: String,
    pub disabled: bool,
    pub options: Vec<SelectOptionView>,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub step: Option<f64>,
    pub ticks: Vec<f64>,
    pub labels: Vec<String>,
    pub bubble_percent: f64,
    pub bubble_text: String,
}

impl Default for Widget {
    fn default() -> Self {
        Self {
            kind: WidgetKind::Checkbox,
            value: "".to_string(),
            disabled: false,
            options: vec![],
            min: None,
            max: None,
            step: None,
            ticks: vec![],
            labels: vec![],
            bubble_percent: 0.0,
            bubble_text: "".to_string(),
        }
    }
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct SelectOptionView {
    pub key: String,
    pub label: String,
    pub selected: bool,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct FormRow {
    pub id: String,
    /// Localized title
    pub label: String,
    /// Localized description, shown as an on-demand popover
    pub help: String,
    pub widget: Widget,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct FormSection {
    /// Empty for the implicit group before the first heading
    pub title: String,
    /// Explanatory prose lines (headings that follow another heading)
    pub description: Vec<String>,
    pub collapsed: bool,
    pub rows: Vec<FormRow>,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct FormModel {
    pub sections: Vec<FormSection>,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub enum FormEvent {
    Input { id: String, value: RawInput },
    ToggleSection(usize),
    Save,
    Cancel,
}

#[derive(Debug, PartialEq)]
pub enum FormOutcome {
    Updated,
    /// Number of settings flushed to the store
    Saved(usize),
    Reverted,
}

/// Walks the registry into sections and applies form events. Collapse state
/// lives here (it is view state, not setting state); the first section is
/// expanded by default, all later ones start collapsed.
pub struct FormEngine {
    collapsed: Vec<bool>,
}

impl FormEngine {
    pub fn new(registry: &SettingsRegistry) -> Self {
        let sections = section_layout(registry.entries());
        Self {
            collapsed: (0..sections.len()).map(|i| i != 0).collect(),
        }
    }

    pub fn render(
        &self,
        registry: &SettingsRegistry,
        translator: &Translator,
    ) -> FormModel {
        let sections = section_layout(registry.entries())
            .into_iter()
            .enumerate()
            .map(|(index, draft)| FormSection {
                title: draft.title,
                description: draft.description,
                collapsed: self
                    .collapsed
                    .get(index)
                    .copied()
                    .unwrap_or(index != 0),
                rows: draft
                    .setting_ids
                    .iter()
                    .map(|id| FormRow {
                        id: id.clone(),
                        label: translator.setting_name(id),
                        help: translator.setting_description(id),
                        widget: widget_for(registry, translator, id),
                    })
                    .collect(),
            })
            .collect();

        FormModel { sections }
    }

    /// Applies one frontend event. Input events synchronously fire the
    /// setting's live handlers and recompute every disabled flag before
    /// returning, so a following [`Self::render`] can never show stale
    /// disabled state.
    pub fn apply(
        &mut self,
        registry: &mut SettingsRegistry,
        store: &mut dyn SettingsStore,
        event: FormEvent,
    ) -> Result<FormOutcome, StoreError> {
        match event {
            FormEvent::Input { id, value } => {
                registry.apply_input(&id, &value);
                registry.recompute_disabled();
                Ok(FormOutcome::Updated)
            }
            FormEvent::ToggleSection(index) => {
                match self.collapsed.get_mut(index) {
                    Some(flag) => *flag = !*flag,
                    None => warn!("no section at index {}", index),
                }
                Ok(FormOutcome::Updated)
            }
            FormEvent::Save => {
                let written = registry.save_all(store)?;
                Ok(FormOutcome::Saved(written))
            }
            FormEvent::Cancel => {
                registry.reset_all(store);
                registry.recompute_disabled();
                Ok(FormOutcome::Reverted)
            }
        }
    }
}

struct SectionDraft {
    title: String,
    description: Vec<String>,
    setting_ids: Vec<String>,
}

/// Partitions the ordered entry list into sections. A heading opens a new
/// section unless it immediately follows another heading, in which case it
/// becomes explanatory prose of the still-open section. Settings before any
/// heading form an implicit untitled group.
fn section_layout(entries: &[RegistryEntry]) -> Vec<SectionDraft> {
    let mut sections: Vec<SectionDraft> = Vec::new();
    let mut previous_was_heading = false;

    for entry in entries {
        match entry {
            RegistryEntry::Heading(label) => {
                if previous_was_heading {
                    if let Some(section) = sections.last_mut() {
                        section.description.push(label.clone());
                    }
                } else {
                    sections.push(SectionDraft {
                        title: label.clone(),
                        description: vec![],
                        setting_ids: vec![],
                    });
                }
                previous_was_heading = true;
            }
            RegistryEntry::Setting(id) => {
                if sections.is_empty() {
                    sections.push(SectionDraft {
                        title: "".to_string(),
                        description: vec![],
                        setting_ids: vec![],
                    });
                }
                sections
                    .last_mut()
                    .expect("a section exists")
                    .setting_ids
                    .push(id.clone());
                previous_was_heading = false;
            }
        }
    }

    sections
}

fn widget_for(
    registry: &SettingsRegistry,
    translator: &Translator,
    id: &str,
) -> Widget {
    let mut widget = Widget {
        disabled: registry.is_disabled(id),
        value: registry.input_value(id).to_string(),
        ..Widget::default()
    };

    match registry.config(id).expect("row ids come from the registry") {
        SettingConfig::Checkbox { .. } => {
            widget.kind = WidgetKind::Checkbox;
        }
        SettingConfig::Text { .. } => {
            widget.kind = WidgetKind::Text;
        }
        SettingConfig::NumberInput { min, max, step, .. } => {
            widget.kind = WidgetKind::NumberInput;
            widget.min = *min;
            widget.max = *max;
            widget.step = *step;
        }
        SettingConfig::Slider {
            min,
            max,
            step,
            labels,
            label_count,
            ..
        } => {
            widget.kind = WidgetKind::Slider;
            widget.min = Some(*min);
            widget.max = Some(*max);
            widget.step = Some(*step);
            widget.ticks = slider::tick_values(*min, *max, *step);
            widget.labels = slider::labels(*min, *max, *label_count, labels);

            let value = registry
                .input_value(id)
                .as_number()
                .unwrap_or(f64::NAN);
            widget.bubble_percent = slider::bubble_percent(value, *min, *max);
            widget.bubble_text = slider::bubble_text(value, *min, *max, labels);
        }
        SettingConfig::Select { options, .. } => {
            widget.kind = WidgetKind::Select;
            let current = registry.input_value(id);
            let current = current.as_str().unwrap_or("");
            widget.options = options
                .iter()
                .map(|key| SelectOptionView {
                    key: key.clone(),
                    label: translator.option_label(id, key),
                    selected: key == current,
                })
                .collect();
        }
    }

    widget
}
