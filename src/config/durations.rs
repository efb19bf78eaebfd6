use std::time::Duration;

use humantime::parse_duration;
use serde::Deserialize;
use serde::de::Error as _;
use serde_with::DeserializeAs;

/// Reads durations written as humantime strings (`"1500ms"`, `"1s 500ms"`).
pub(crate) struct HumantimeDuration;

impl<'de> DeserializeAs<'de, Duration> for HumantimeDuration {
    fn deserialize_as<D>(deserializer: D) -> std::result::Result<Duration, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        parse_duration(raw.trim())
            .map_err(|err| D::Error::custom(format!("invalid duration {raw:?}: {err}")))
    }
}
