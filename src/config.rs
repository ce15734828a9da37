use std::path::PathBuf;

use serde::{Deserialize, Deserializer};
use tracing_subscriber::filter::LevelFilter;

#[derive(Deserialize)]
pub struct Config {
    pub source: Source,
    #[serde(default)]
    pub log: Log,
}

impl Config {
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }
}

#[derive(Deserialize)]
pub struct Source {
    /// JSON document holding the ticket counters.
    pub path: PathBuf,
}

#[derive(Deserialize)]
pub struct Log {
    #[serde(
        default = "default_level",
        deserialize_with = "deserialize_level"
    )]
    pub level: LevelFilter,
}

impl Default for Log {
    fn default() -> Self {
        Self {
            level: default_level(),
        }
    }
}

fn default_level() -> LevelFilter {
    LevelFilter::INFO
}

fn deserialize_level<'de, D>(
    deserializer: D,
) -> Result<LevelFilter, D::Error>
where
    D: Deserializer<'de>,
{
    let level = String::deserialize(deserializer)?;
    level.parse().map_err(serde::de::Error::custom)
}
