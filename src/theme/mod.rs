//! Palette, settings and configuration paths.

mod config;
mod paths;
mod settings;
mod store;
mod types;

pub use config::{API_URL_ENV, AppConfig, DEFAULT_API_URL};
pub use paths::{config_dir, logs_dir, settings_path};
pub use settings::{SETTINGS_SKELETON, load_settings_from, parse_settings, settings};
pub use store::theme;
pub use types::{Settings, Theme};

#[cfg(test)]
static TEST_MUTEX: std::sync::OnceLock<std::sync::Mutex<()>> = std::sync::OnceLock::new();

#[cfg(test)]
pub(crate) fn test_mutex() -> &'static std::sync::Mutex<()> {
    TEST_MUTEX.get_or_init(|| std::sync::Mutex::new(()))
}
