//! TOML configuration: types, hierarchy loading, validation.

mod errors;
mod loading;
mod types;

pub use errors::ConfigError;
pub use loading::{load_hierarchy, load_hierarchy_from, merge_configs, validate_config};
pub use types::{DEFAULT_NO_FILES_MESSAGE, GitConfig, HookConfig, KakkoConfig};

impl KakkoConfig {
    /// Load configuration from the hierarchy of config files.
    ///
    /// See [`loading::load_hierarchy`] for details.
    pub fn load_hierarchy() -> Result<Self, ConfigError> {
        loading::load_hierarchy()
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        loading::validate_config(self)
    }
}
