mod command_driver;
mod driver_registry;
mod root_locator;

pub use command_driver::{COMMAND_DRIVER, CommandDriver};
pub use driver_registry::DriverRegistry;
pub use root_locator::FilesystemRootLocator;
