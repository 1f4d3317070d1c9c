use serde::ser::{Serialize, SerializeStruct, Serializer};

use crate::streamer::Streamer;

/// What `channels_str` says when nothing is being watched.
pub const NOTHING_WATCHED: &str = "none";

/// Body of the `/watching` response.
///
/// Only `watching` and `online` are stored. The counts and the legacy
/// fields (`count`, `channels`, `channels_str`) are derived from them
/// when serializing, so older consumers always get values consistent
/// with the canonical ones.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StatusPayload {
    watching: Vec<String>,
    online: Vec<String>,
}

impl StatusPayload {
    /// Channels actively watched, in the order the miner gave them.
    /// Twitch caps this at 2 but whatever is given is echoed back.
    pub fn watching(&self) -> &[String] {
        &self.watching
    }

    /// Every live channel, watched or not.
    pub fn online(&self) -> &[String] {
        &self.online
    }

    pub fn count_watching(&self) -> usize {
        self.watching.len()
    }

    pub fn count_online(&self) -> usize {
        self.online.len()
    }

    /// Legacy alias of `count_watching`
    pub fn count(&self) -> usize {
        self.count_watching()
    }

    /// Legacy alias of `watching`
    pub fn channels(&self) -> &[String] {
        self.watching()
    }

    /// Legacy human readable list: "a, b", or "none"
    pub fn channels_str(&self) -> String {
        if self.watching.is_empty() {
            NOTHING_WATCHED.to_string()
        } else {
            self.watching.join(", ")
        }
    }
}

impl Serialize for StatusPayload {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut st = serializer.serialize_struct("StatusPayload", 7)?;
        st.serialize_field("watching", self.watching())?;
        st.serialize_field("online", self.online())?;
        st.serialize_field("count_watching", &self.count_watching())?;
        st.serialize_field("count_online", &self.count_online())?;
        st.serialize_field("count", &self.count())?;
        st.serialize_field("channels", self.channels())?;
        st.serialize_field("channels_str", &self.channels_str())?;
        st.end()
    }
}

/// Compute the watching status.
///
/// `watching` is trusted as is: it isn't checked against `streamers`,
/// so a stale name without a record (or with an offline one) still shows
/// up. `online` keeps the iteration order of `streamers` and doesn't
/// deduplicate usernames.
pub fn resolve<'a, S, I>(watching: &[String], streamers: I) -> StatusPayload
where
    S: Streamer + 'a,
    I: IntoIterator<Item = &'a S>,
{
    let online = streamers
        .into_iter()
        .filter(|s| s.is_online())
        .map(|s| s.username().to_string())
        .collect();

    StatusPayload {
        watching: watching.to_vec(),
        online,
    }
}

/// Same as [`resolve`], for callers which may not have any streamer
/// collection at all. A missing collection is the same as an empty one.
pub fn resolve_or_empty<S: Streamer>(watching: &[String], streamers: Option<&[S]>) -> StatusPayload {
    resolve(watching, streamers.unwrap_or_default())
}
