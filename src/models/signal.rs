use super::decode::{Record, optional_number};
use serde::Deserialize;
use std::str::FromStr;

/// Trade direction of a signal.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, strum::Display, strum::EnumString)]
#[strum(serialize_all = "UPPERCASE", ascii_case_insensitive)]
pub enum Side {
    Buy,
    Sell,
}

impl TryFrom<String> for Side {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Side::from_str(value.trim()).map_err(|_| format!("unknown side {:?}", value))
    }
}

impl<'de> Deserialize<'de> for Side {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Side::try_from(raw).map_err(serde::de::Error::custom)
    }
}

/// A single trade recommendation as served by `GET /signals`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Signal {
    pub id: i64,
    pub pair: String,
    pub side: Side,
    #[serde(default)]
    pub reason: Option<String>,
    pub time_utc: String,
    #[serde(default, deserialize_with = "optional_number")]
    pub sl: Option<f64>,
    #[serde(default, deserialize_with = "optional_number")]
    pub tp: Option<f64>,
    #[serde(default)]
    pub raw: Option<String>,
}

impl Signal {
    /// The stated reason, or the raw source text when no reason was given.
    pub fn reason(&self) -> &str {
        [self.reason.as_deref(), self.raw.as_deref()]
            .into_iter()
            .flatten()
            .map(str::trim)
            .find(|text| !text.is_empty())
            .unwrap_or_default()
    }
}

impl Record for Signal {
    fn check(&self) -> Result<(), String> {
        if self.pair.trim().is_empty() {
            return Err(format!("signal {} has no pair", self.id));
        }
        Ok(())
    }
}
