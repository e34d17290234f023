//! # Built-in Jurisdictions
//!
//! One module per jurisdiction. Each exposes a `register` function that
//! installs its rules on a registry builder; [`register_all`] calls them in
//! turn and is what [`init_registry`](crate::init_registry) uses.

pub mod us;

use lanerules_core::ConfigurationError;

use crate::registry::TrafficRulesRegistryBuilder;

/// Register every built-in jurisdiction.
pub fn register_all(builder: &mut TrafficRulesRegistryBuilder) -> Result<(), ConfigurationError> {
    us::register(builder)?;
    Ok(())
}
