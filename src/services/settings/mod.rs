// Settings service module
// Loads drag-and-drop configuration from TOML

pub mod service;

pub use service::SettingsService;
