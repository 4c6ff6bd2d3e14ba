pub mod build_environment;
pub mod configuration;
pub mod error;
pub mod sdk_root;
pub mod search_path;

pub use build_environment::{BuildEnvironment, NDK_MODULE_PATH_VAR, SDK_PATH_VAR};
pub use configuration::{BootstrapConfig, CONFIG_FILE, DriverConfig, SearchConfig};
pub use error::AppError;
pub use sdk_root::{DEFAULT_SEARCH_DEPTH, MARKER_DIR, SdkRoot, SearchDepth};
pub use search_path::SearchPath;
