//! Application configuration.

use std::time::Duration;

use abacus_core::EngineConfig;

/// How long a keypad button stays highlighted after a key press.
pub const DEFAULT_PULSE: Duration = Duration::from_millis(100);

/// Configuration for [`crate::App`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppConfig {
    /// Calculator engine settings.
    pub engine: EngineConfig,
    /// Pressed-highlight duration.
    pub pulse: Duration,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self { engine: EngineConfig::default(), pulse: DEFAULT_PULSE }
    }
}
