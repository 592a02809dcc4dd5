mod manager;

pub use manager::{ConfigFile, ConfigManager, DefaultsConfig, ResolveOptions, resolve_config};
