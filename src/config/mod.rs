// Core configuration types
mod core;
mod loader;

pub use self::core::{AnalysisSettings, ErrwrapConfig, IgnoreConfig, OutputConfig};
pub use loader::{
    directory_ancestors, load_config, load_config_from, parse_and_validate_config,
    CONFIG_FILE_NAME,
};
