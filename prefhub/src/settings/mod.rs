pub mod config;
pub mod hub;
pub mod registry;
pub mod value;

pub use config::{DisabledFn, InputHandler, RawInput, SettingConfig};
pub use hub::SettingsHub;
pub use registry::{
    PendingValues, RegistryBuilder, RegistryEntry, SettingsEntry,
    SettingsRegistry,
};
pub use value::SettingValue;
