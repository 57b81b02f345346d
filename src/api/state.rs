//! Application state for the cabin pricing API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::config::ConfigLoader;

use super::occupancy::{InMemoryOccupancy, OccupancySource};

/// Shared application state.
///
/// Contains the rate configuration, loaded once per process, and the
/// source of occupied-date snapshots.
#[derive(Clone)]
pub struct AppState {
    /// The loaded rate configuration.
    config: Arc<ConfigLoader>,
    /// Where occupied dates come from.
    occupancy: Arc<dyn OccupancySource>,
}

impl AppState {
    /// Creates a new application state with an empty in-memory occupancy
    /// store.
    pub fn new(config: ConfigLoader) -> Self {
        Self::with_occupancy(config, Arc::new(InMemoryOccupancy::new()))
    }

    /// Creates a new application state backed by the given occupancy source.
    pub fn with_occupancy(config: ConfigLoader, occupancy: Arc<dyn OccupancySource>) -> Self {
        Self {
            config: Arc::new(config),
            occupancy,
        }
    }

    /// Returns a reference to the configuration loader.
    pub fn config(&self) -> &ConfigLoader {
        &self.config
    }

    /// Returns the occupancy source.
    pub fn occupancy(&self) -> &dyn OccupancySource {
        self.occupancy.as_ref()
    }
}
