//! Typed settings registry and reactive form engine powering the campus
//! portal tweaks.
//!
//! The pieces fit together like this: a [`runtime::SettingsStore`] holds
//! persisted values under namespaced keys, [`runtime::migrations`] rewrites
//! legacy keys on startup, a [`settings::SettingsRegistry`] hydrates one
//! pending value per declared setting, and a [`form::FormEngine`] turns the
//! registry into a sectioned form model and feeds user input back into it.
//! [`settings::SettingsHub`] wires all of that up in the right order —
//! consumers (the portal feature modules) usually only talk to the hub.

pub mod core;
pub mod form;
pub mod i18n;
pub mod runtime;
pub mod settings;

pub use crate::core::prelude;
