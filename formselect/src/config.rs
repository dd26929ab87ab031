//! Select widget configuration.

use std::time::Duration;

use formdom::{Easing, TransitionConfig};
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Class that marks a select for native rendering.
pub const NATIVE_CLASS: &str = "browser-default";

/// Attribute that marks a select for native rendering.
pub const NATIVE_ATTR: &str = "data-native";

/// Options shared by every instance created with them.
///
/// Durations are in milliseconds. Setting both to zero makes open and close
/// transitions complete synchronously.
///
/// ```ignore
/// let options = SelectOptions::from_json(r#"{ "openAnimationDuration": 0 }"#)?;
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SelectOptions {
    /// Duration of the popup's open transition.
    pub open_animation_duration: u64,
    /// Duration of the popup's close transition.
    pub close_animation_duration: u64,
    /// Class that opts a select out of the widget.
    pub native_class: String,
}

impl Default for SelectOptions {
    fn default() -> Self {
        Self {
            open_animation_duration: 150,
            close_animation_duration: 250,
            native_class: NATIVE_CLASS.to_string(),
        }
    }
}

impl SelectOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Options with zero-length transitions.
    pub fn instant() -> Self {
        Self::default()
            .open_animation_duration(0)
            .close_animation_duration(0)
    }

    /// Parse options from a JSON document. Missing fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn open_animation_duration(mut self, ms: u64) -> Self {
        self.open_animation_duration = ms;
        self
    }

    pub fn close_animation_duration(mut self, ms: u64) -> Self {
        self.close_animation_duration = ms;
        self
    }

    pub fn native_class(mut self, class: impl Into<String>) -> Self {
        self.native_class = class.into();
        self
    }

    pub fn open_duration(&self) -> Duration {
        Duration::from_millis(self.open_animation_duration)
    }

    pub fn close_duration(&self) -> Duration {
        Duration::from_millis(self.close_animation_duration)
    }

    pub(crate) fn open_transition(&self) -> TransitionConfig {
        TransitionConfig::new(self.open_duration(), Easing::EaseOut)
    }

    pub(crate) fn close_transition(&self) -> TransitionConfig {
        TransitionConfig::new(self.close_duration(), Easing::EaseIn)
    }
}
