pub mod settings;
pub mod store;

pub use settings::{HapticSettings, ParamId};
pub use store::{SettingsChange, SettingsStore};
