//! Overlay configuration and its JSON persistence.
//!
//! [`ChaseConfig`] derives serde traits so hosts can store it in any format.
//! With the `std` feature the overlay also reads and writes its own section of
//! the host's shared JSON configuration document.

use serde::{Deserialize, Serialize};

/// Section key of the overlay inside the host configuration document.
pub const CONFIG_SECTION: &str = "SanderLogoChase";

/// Runtime configuration of the logo chase overlay.
///
/// There are two ways to load it, and they treat missing keys differently:
///
/// * Deserializing through serde starts from [`ChaseConfig::default`], so every
///   missing key gets its factory default.
/// * `read_from_config` (feature `std`) applies the host section on top of the
///   current value, so missing keys keep whatever was loaded before. Use it for
///   hot reloads of a running overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[serde(rename_all = "camelCase", default)]
pub struct ChaseConfig {
    /// When false the overlay draws nothing.
    pub enabled: bool,

    /// How long the static logo is shown before the blue wipe starts.
    #[serde(rename = "holdDuration")]
    pub hold_duration_ms: u32,

    /// Delay between two wipe cursor steps.
    #[serde(rename = "wipeDelay")]
    pub wipe_delay_ms: u32,

    /// Number of LEDs the overlay covers.
    pub led_count: u16,
}

impl ChaseConfig {
    pub const DEFAULT_HOLD_DURATION_MS: u32 = 10_000;
    pub const DEFAULT_WIPE_DELAY_MS: u32 = 30;
    pub const DEFAULT_LED_COUNT: u16 = 122;

    /// Returns `led_count` as an index bound.
    #[inline]
    pub fn led_count(&self) -> usize {
        usize::from(self.led_count)
    }
}

impl Default for ChaseConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            hold_duration_ms: Self::DEFAULT_HOLD_DURATION_MS,
            wipe_delay_ms: Self::DEFAULT_WIPE_DELAY_MS,
            led_count: Self::DEFAULT_LED_COUNT,
        }
    }
}

#[cfg(feature = "std")]
mod json {
    use super::{CONFIG_SECTION, ChaseConfig};
    use serde_json::{Map, Value, json};

    const KEY_ENABLED: &str = "enabled";
    const KEY_HOLD_DURATION: &str = "holdDuration";
    const KEY_WIPE_DELAY: &str = "wipeDelay";
    const KEY_LED_COUNT: &str = "ledCount";

    /// Copies `key` into `target` when present and representable.
    fn read_value<T>(section: &Map<String, Value>, key: &str, target: &mut T) -> bool
    where
        T: TryFrom<u64>,
    {
        match section
            .get(key)
            .and_then(Value::as_u64)
            .and_then(|raw| T::try_from(raw).ok())
        {
            Some(value) => {
                *target = value;
                true
            }
            None => false,
        }
    }

    impl ChaseConfig {
        /// Applies the overlay section of `root` on top of the current values.
        ///
        /// Keys that are absent, mistyped or out of range keep their current
        /// value. Returns false if the section or any key could not be used, so
        /// the caller can decide whether to persist defaults.
        pub fn read_from_config(&mut self, root: &Value) -> bool {
            let Some(section) = root.get(CONFIG_SECTION).and_then(Value::as_object) else {
                return false;
            };

            let mut complete = true;

            match section.get(KEY_ENABLED).and_then(Value::as_bool) {
                Some(enabled) => self.enabled = enabled,
                None => complete = false,
            }
            complete &= read_value(section, KEY_HOLD_DURATION, &mut self.hold_duration_ms);
            complete &= read_value(section, KEY_WIPE_DELAY, &mut self.wipe_delay_ms);
            complete &= read_value(section, KEY_LED_COUNT, &mut self.led_count);

            complete
        }

        /// Writes the overlay section into `root`, replacing any previous one.
        pub fn add_to_config(&self, root: &mut Map<String, Value>) {
            root.insert(
                CONFIG_SECTION.into(),
                json!({
                    "enabled": self.enabled,
                    "holdDuration": self.hold_duration_ms,
                    "wipeDelay": self.wipe_delay_ms,
                    "ledCount": self.led_count,
                }),
            );
        }
    }
}
