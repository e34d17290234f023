//! # Traffic Rules Registry
//!
//! Maps `(jurisdiction, participant)` keys to factories producing
//! [`TrafficRules`] instances.
//!
//! ## Lifecycle
//!
//! Registration happens on a [`TrafficRulesRegistryBuilder`] during process
//! start. [`TrafficRulesRegistryBuilder::build`] freezes it into an immutable
//! [`TrafficRulesRegistry`] that is passed to every consumer. The frozen
//! registry has no mutation API, so concurrent lookups need no locking.
//!
//! ## Errors
//!
//! Duplicate registration and lookups of unregistered keys are
//! [`ConfigurationError`]s. Neither is defaulted or retried.

use std::collections::HashMap;
use std::sync::Arc;

use lanerules_core::{ConfigurationError, JurisdictionId, Participant};

use crate::config::RulesConfig;
use crate::rules::TrafficRules;

/// Factory producing a rules instance for one registry key.
pub type RulesFactory = Arc<dyn Fn() -> Arc<dyn TrafficRules> + Send + Sync>;

/// Registry key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RulesKey {
    /// Jurisdiction.
    pub location: JurisdictionId,
    /// Participant class.
    pub participant: Participant,
}

impl std::fmt::Display for RulesKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.location, self.participant)
    }
}

/// Mutable registration phase of the registry.
#[derive(Default)]
pub struct TrafficRulesRegistryBuilder {
    entries: HashMap<RulesKey, RulesFactory>,
}

impl std::fmt::Debug for TrafficRulesRegistryBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TrafficRulesRegistryBuilder")
            .field("entry_count", &self.entries.len())
            .finish_non_exhaustive()
    }
}

impl TrafficRulesRegistryBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `factory` under `(location, participant)`.
    ///
    /// # Errors
    ///
    /// [`ConfigurationError::DuplicateRegistration`] if the key is taken.
    /// The existing entry is left untouched.
    pub fn register<F, R>(
        &mut self,
        location: JurisdictionId,
        participant: Participant,
        factory: F,
    ) -> Result<&mut Self, ConfigurationError>
    where
        F: Fn() -> R + Send + Sync + 'static,
        R: TrafficRules + 'static,
    {
        let key = RulesKey {
            location,
            participant,
        };
        if self.entries.contains_key(&key) {
            return Err(ConfigurationError::DuplicateRegistration {
                location: key.location,
                participant: key.participant,
            });
        }

        tracing::debug!(location = %key.location, participant = %key.participant, "registered traffic rules");
        let factory: RulesFactory = Arc::new(move || Arc::new(factory()) as Arc<dyn TrafficRules>);
        self.entries.insert(key, factory);
        Ok(self)
    }

    /// Freeze the registrations.
    pub fn build(self) -> TrafficRulesRegistry {
        TrafficRulesRegistry {
            entries: self.entries,
        }
    }
}

/// Immutable table of registered traffic rules.
#[derive(Clone)]
pub struct TrafficRulesRegistry {
    entries: HashMap<RulesKey, RulesFactory>,
}

impl std::fmt::Debug for TrafficRulesRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TrafficRulesRegistry")
            .field("keys", &self.keys())
            .finish_non_exhaustive()
    }
}

impl TrafficRulesRegistry {
    /// Start a new registration phase.
    pub fn builder() -> TrafficRulesRegistryBuilder {
        TrafficRulesRegistryBuilder::new()
    }

    /// Instantiate the rules registered for `(location, participant)`.
    ///
    /// # Errors
    ///
    /// [`ConfigurationError::UnsupportedCombination`] naming both key parts
    /// if nothing is registered for them.
    pub fn lookup(
        &self,
        location: &JurisdictionId,
        participant: Participant,
    ) -> Result<Arc<dyn TrafficRules>, ConfigurationError> {
        let key = RulesKey {
            location: location.clone(),
            participant,
        };
        match self.entries.get(&key) {
            Some(factory) => Ok(factory()),
            None => {
                tracing::warn!(location = %location, participant = %participant, "no traffic rules registered");
                Err(ConfigurationError::UnsupportedCombination {
                    location: key.location,
                    participant,
                })
            }
        }
    }

    /// Instantiate the rules selected by `config`.
    pub fn create(&self, config: &RulesConfig) -> Result<Arc<dyn TrafficRules>, ConfigurationError> {
        self.lookup(&config.location, config.participant)
    }

    /// Whether rules are registered for `(location, participant)`.
    pub fn contains(&self, location: &JurisdictionId, participant: Participant) -> bool {
        self.entries.contains_key(&RulesKey {
            location: location.clone(),
            participant,
        })
    }

    /// All registered keys, sorted by jurisdiction then participant.
    pub fn keys(&self) -> Vec<RulesKey> {
        let mut keys: Vec<RulesKey> = self.entries.keys().cloned().collect();
        keys.sort();
        keys
    }

    /// Number of registered keys.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
