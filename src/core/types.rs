use crate::errors::{Error, Result};
use crate::extensions::enums::valid_csv;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use std::time::Duration;
use strum_macros::{AsRefStr, Display, EnumIter as EnumIterDerive, EnumString};

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, Display, AsRefStr, EnumIterDerive)]
#[strum(ascii_case_insensitive)]
pub enum BoolFormat {
    #[strum(serialize = "true", serialize = "True", to_string = "True")]
    TextTrue,

    #[strum(serialize = "false", serialize = "False", to_string = "False")]
    TextFalse,
}

impl BoolFormat {
    #[inline]
    fn to_bool(self) -> bool {
        matches!(self, BoolFormat::TextTrue)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Bool(pub bool);

impl Bool {
    pub fn try_from_str(s: &str) -> Result<Self> {
        match BoolFormat::from_str(s.trim()) {
            Ok(fmt) => Ok(Bool(fmt.to_bool())),
            Err(_) => Err(Error::domain(format!(
                "Invalid string value for boolean: '{}'. Valid values: {}",
                s,
                valid_csv::<BoolFormat>()
            ))),
        }
    }
}

impl fmt::Display for Bool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", if self.0 { "True" } else { "False" })
    }
}

impl Serialize for Bool {
    fn serialize<S: Serializer>(
        &self,
        serializer: S,
    ) -> std::result::Result<<S as Serializer>::Ok, <S as Serializer>::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Bool {
    fn deserialize<D: Deserializer<'de>>(
        deserializer: D,
    ) -> std::result::Result<Bool, <D as Deserializer<'de>>::Error> {
        let b = String::deserialize(deserializer)?;
        Bool::try_from_str(&b).map_err(serde::de::Error::custom)
    }
}

/// Upper bound for any configured delay or interval: one day.
pub const MAX_SECONDS: f64 = 86_400.0;

/// Number of seconds in `0..=MAX_SECONDS` (fractions allowed).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Seconds(f64);

impl Seconds {
    pub fn new(value: f64) -> Option<Self> {
        let in_range = (0.0..=MAX_SECONDS).contains(&value);
        (in_range && Duration::try_from_secs_f64(value).is_ok()).then_some(Seconds(value))
    }

    /// Like [`Seconds::new`], mapping invalid input to zero.
    pub fn clamped(value: f64) -> Self {
        Seconds::new(value).unwrap_or(Seconds(0.0))
    }

    pub fn try_from_str(s: &str) -> Result<Self> {
        s.trim()
            .parse::<f64>()
            .ok()
            .and_then(Seconds::new)
            .ok_or_else(|| {
                Error::domain(format!(
                    "Invalid number of seconds: '{}'. Expected a number between 0 and {MAX_SECONDS} such as 0.5",
                    s.trim()
                ))
            })
    }

    pub fn value(&self) -> f64 {
        self.0
    }

    pub fn as_duration(&self) -> Duration {
        Duration::try_from_secs_f64(self.0).unwrap_or(Duration::ZERO)
    }
}

impl fmt::Display for Seconds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}s", self.0)
    }
}

impl<'de> Deserialize<'de> for Seconds {
    fn deserialize<D: Deserializer<'de>>(
        deserializer: D,
    ) -> std::result::Result<Seconds, <D as Deserializer<'de>>::Error> {
        let raw = f64::deserialize(deserializer)?;
        Seconds::new(raw).ok_or_else(|| {
            serde::de::Error::custom(format!("expected a number of seconds between 0 and {MAX_SECONDS}, got {raw}"))
        })
    }
}
