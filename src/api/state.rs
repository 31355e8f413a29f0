//! Application state for the report API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::config::{ConfigLoader, ReportConfig};
use crate::render::{DocumentRenderer, JsonLayoutRenderer};

/// Shared application state.
///
/// Holds the immutable report configuration and the renderer used for
/// layout documents. Cloning is cheap; both are reference counted.
#[derive(Clone)]
pub struct AppState {
    config: Arc<ReportConfig>,
    renderer: Arc<dyn DocumentRenderer>,
}

impl AppState {
    /// Creates a new application state from a loaded configuration.
    pub fn new(loader: ConfigLoader) -> Self {
        Self::with_renderer(loader.into_config(), JsonLayoutRenderer)
    }

    /// Creates a state with a custom document renderer.
    pub fn with_renderer(config: ReportConfig, renderer: impl DocumentRenderer + 'static) -> Self {
        Self {
            config: Arc::new(config),
            renderer: Arc::new(renderer),
        }
    }

    /// Returns the report configuration.
    pub fn config(&self) -> &ReportConfig {
        &self.config
    }

    /// Returns the document renderer.
    pub fn renderer(&self) -> &dyn DocumentRenderer {
        self.renderer.as_ref()
    }
}
