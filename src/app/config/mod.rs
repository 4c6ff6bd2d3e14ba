mod load_config;

pub use load_config::{load_config, parse_config_content, resolve_config_path};
