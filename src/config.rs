// Tunables for the touch handler, persisted to localStorage like the other UI settings
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

pub const STORAGE_KEY: &str = "ts_config";

/// Gestures smaller than this on both axes are delivered raw, without easing (pixels).
pub const DEFAULT_IMMEDIATE_THRESHOLD: f64 = 20.0;
/// Frames per easing run (~60fps / 2).
pub const DEFAULT_FRAMES: u32 = 30;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
#[serde(default)]
pub struct TouchScrollConfig {
    pub immediate_threshold: f64,
    pub frames: u32,
}

impl Default for TouchScrollConfig {
    fn default() -> Self {
        Self {
            immediate_threshold: DEFAULT_IMMEDIATE_THRESHOLD,
            frames: DEFAULT_FRAMES,
        }
    }
}

impl TouchScrollConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.immediate_threshold.is_finite() || self.immediate_threshold < 0.0 {
            return Err(ConfigError::InvalidThreshold(self.immediate_threshold));
        }
        if self.frames == 0 {
            return Err(ConfigError::ZeroFrames);
        }
        Ok(())
    }

    /// Parse a stored JSON blob. Missing fields take their defaults; invalid values are rejected.
    pub fn from_json(raw: &str) -> Option<Self> {
        let cfg: Self = serde_json::from_str(raw).ok()?;
        match cfg.validate() {
            Ok(()) => Some(cfg),
            Err(e) => {
                tracing::warn!(error = %e, "ignoring stored touch scroll config");
                None
            }
        }
    }

    /// Load from localStorage, falling back to defaults.
    pub fn load() -> Self {
        if let Some(win) = web_sys::window() {
            if let Ok(Some(store)) = win.local_storage() {
                if let Ok(Some(raw)) = store.get_item(STORAGE_KEY) {
                    if let Some(cfg) = Self::from_json(&raw) {
                        return cfg;
                    }
                }
            }
        }
        Self::default()
    }

    pub fn save(&self) {
        if let Some(win) = web_sys::window() {
            if let Ok(Some(store)) = win.local_storage() {
                if let Ok(s) = serde_json::to_string(self) {
                    let _ = store.set_item(STORAGE_KEY, &s);
                }
            }
        }
    }
}
