use std::path::Path;

use serde::Deserialize;
use watching_core::StreamerRecord;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub bind: String,
    pub port: u16,
    /// Channels being watched when the server starts.
    /// Twitch only lets the miner watch 2 at once.
    pub watching: Vec<String>,
    /// Known streamers, absent means none yet
    #[serde(default)]
    pub streamers: Option<Vec<StreamerRecord>>,
}

// tmp struct to parse the config from a file with other stuff in it
#[derive(Deserialize)]
struct AC {
    analytics: Config,
}

impl Config {
    /// read config from a file where it's under a key
    /// named "analytics"
    pub fn from_file_keyed<P>(p: P) -> Result<Self, serde_dhall::Error>
    where
        P: AsRef<Path>,
    {
        let tmp: AC = serde_dhall::from_file(p).parse()?;
        Ok(tmp.analytics)
    }

    pub fn from_str_keyed(s: &str) -> Result<Self, serde_dhall::Error> {
        let tmp: AC = serde_dhall::from_str(s).parse()?;
        Ok(tmp.analytics)
    }
}
