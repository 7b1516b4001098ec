use std::sync::{Arc, PoisonError, RwLock};

use super::engine::TierRecommendationEngine;
use super::table::{TierConfiguration, TierTableError};

/// Process-wide holder for the active configuration table.
///
/// Readers take an `Arc` snapshot and keep it for the whole call; `replace` swaps the pointer,
/// so in-flight recommendations never observe a half-updated table.
#[derive(Debug)]
pub struct TierConfigurationStore {
    current: RwLock<Arc<TierConfiguration>>,
}

impl TierConfigurationStore {
    pub fn new(config: TierConfiguration) -> Result<Self, TierTableError> {
        config.validate()?;
        Ok(Self {
            current: RwLock::new(Arc::new(config)),
        })
    }

    pub fn snapshot(&self) -> Arc<TierConfiguration> {
        self.current
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn engine(&self) -> TierRecommendationEngine {
        TierRecommendationEngine::from_snapshot(self.snapshot())
    }

    /// Validate and install a new table, returning the one it replaced.
    pub fn replace(
        &self,
        config: TierConfiguration,
    ) -> Result<Arc<TierConfiguration>, TierTableError> {
        config.validate()?;
        let mut guard = self
            .current
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        Ok(std::mem::replace(&mut *guard, Arc::new(config)))
    }
}

impl Default for TierConfigurationStore {
    fn default() -> Self {
        Self {
            current: RwLock::new(Arc::new(TierConfiguration::standard())),
        }
    }
}
