use std::sync::Arc;

use parking_lot::RwLock;
use watching_core::{StatusPayload, StreamerRecord};

/// Twitch won't credit watch time for more channels than that at once.
pub const MAX_WATCHED: usize = 2;

#[derive(Debug, Default)]
struct Snapshot {
    watching: Vec<String>,
    streamers: Vec<StreamerRecord>,
}

/// Shared view of what the miner is doing, read by every request.
/// Cloning it is cheap and all clones see the same state.
#[derive(Debug, Clone, Default)]
pub struct StatusHandle {
    inner: Arc<RwLock<Snapshot>>,
}

impl StatusHandle {
    pub(crate) fn new(watching: Vec<String>, streamers: Vec<StreamerRecord>) -> Self {
        warn_over_limit(&watching);
        StatusHandle {
            inner: Arc::new(RwLock::new(Snapshot {
                watching,
                streamers,
            })),
        }
    }

    pub fn set_watching(&self, watching: Vec<String>) {
        warn_over_limit(&watching);
        log::debug!("now watching {:?}", watching);
        self.inner.write().watching = watching;
    }

    pub fn set_streamers(&self, streamers: Vec<StreamerRecord>) {
        log::debug!("tracking {} streamer(s)", streamers.len());
        self.inner.write().streamers = streamers;
    }

    /// Flip the live status of every record named `username`.
    /// Returns false if no such streamer is known.
    pub fn set_online(&self, username: &str, is_online: bool) -> bool {
        let mut snapshot = self.inner.write();
        let mut found = false;
        for streamer in snapshot.streamers.iter_mut().filter(|s| s.username == username) {
            streamer.is_online = is_online;
            found = true;
        }
        if !found {
            log::warn!("status update for unknown streamer {username}, ignoring");
        }
        found
    }

    pub fn status(&self) -> StatusPayload {
        let snapshot = self.inner.read();
        watching_core::resolve(&snapshot.watching, &snapshot.streamers)
    }
}

fn warn_over_limit(watching: &[String]) {
    if watching.len() > MAX_WATCHED {
        log::warn!(
            "{} channels marked as watched, twitch only counts {}: {:?}",
            watching.len(),
            MAX_WATCHED,
            watching
        );
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use pretty_assertions::assert_eq;

    fn names(ns: &[&str]) -> Vec<String> {
        ns.iter().map(|n| n.to_string()).collect()
    }

    #[test]
    fn test_updates_are_shared() {
        let handle = StatusHandle::new(vec![], vec![StreamerRecord::new("a", false)]);
        let other = handle.clone();

        other.set_watching(names(&["a"]));
        assert!(other.set_online("a", true));

        let status = handle.status();
        assert_eq!(status.watching(), names(&["a"]).as_slice());
        assert_eq!(status.online(), names(&["a"]).as_slice());
    }

    #[test]
    fn test_set_online_unknown() {
        let handle = StatusHandle::new(vec![], vec![StreamerRecord::new("a", true)]);
        assert!(!handle.set_online("nope", true));
        assert_eq!(handle.status().online(), names(&["a"]).as_slice());
    }

    #[test]
    fn test_set_online_duplicates() {
        let handle = StatusHandle::new(
            vec![],
            vec![StreamerRecord::new("a", false), StreamerRecord::new("a", false)],
        );
        assert!(handle.set_online("a", true));
        assert_eq!(handle.status().online(), names(&["a", "a"]).as_slice());
    }

    #[test]
    fn test_set_streamers_replaces() {
        let handle = StatusHandle::default();
        handle.set_streamers(vec![StreamerRecord::new("a", true)]);
        handle.set_streamers(vec![StreamerRecord::new("b", true)]);
        assert_eq!(handle.status().online(), names(&["b"]).as_slice());
    }

    #[test]
    fn test_over_limit_is_kept() {
        let handle = StatusHandle::default();
        handle.set_watching(names(&["a", "b", "c"]));
        assert_eq!(handle.status().count_watching(), 3);
    }
}
