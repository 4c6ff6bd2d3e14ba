use std::collections::BTreeMap;

use crate::domain::{AppError, DriverConfig};
use crate::ports::BuildDriver;
use crate::services::{COMMAND_DRIVER, CommandDriver};

type DriverFactory = Box<dyn Fn(&DriverConfig) -> Box<dyn BuildDriver>>;

/// Name-to-factory table of build drivers.
pub struct DriverRegistry {
    factories: BTreeMap<String, DriverFactory>,
}

impl DriverRegistry {
    /// Registry with no drivers.
    pub fn empty() -> Self {
        Self { factories: BTreeMap::new() }
    }

    /// Register (or replace) a driver factory.
    pub fn register<F>(&mut self, name: impl Into<String>, factory: F)
    where
        F: Fn(&DriverConfig) -> Box<dyn BuildDriver> + 'static,
    {
        self.factories.insert(name.into(), Box::new(factory));
    }

    pub fn names(&self) -> Vec<&str> {
        self.factories.keys().map(String::as_str).collect()
    }

    /// Instantiate the driver named in `config`.
    pub fn resolve(&self, config: &DriverConfig) -> Result<Box<dyn BuildDriver>, AppError> {
        let factory =
            self.factories.get(&config.name).ok_or_else(|| AppError::UnknownDriver {
                name: config.name.clone(),
                available: self.names().join(", "),
            })?;
        Ok(factory(config))
    }
}

impl Default for DriverRegistry {
    fn default() -> Self {
        let mut registry = Self::empty();
        registry.register(COMMAND_DRIVER, |config| Box::new(CommandDriver::from_config(config)));
        registry
    }
}
