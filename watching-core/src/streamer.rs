use serde::{Deserialize, Serialize};

/// Read-only view over whatever the streamer tracking side keeps around.
/// Only the two fields needed to compute the watching status are exposed.
pub trait Streamer {
    /// The user_login, shown in the URL at www.twitch.tv/<username>
    fn username(&self) -> &str;

    /// Whether the stream is live right now
    fn is_online(&self) -> bool;
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreamerRecord {
    pub username: String,
    pub is_online: bool,
}

impl StreamerRecord {
    pub fn new<S: Into<String>>(username: S, is_online: bool) -> Self {
        StreamerRecord {
            username: username.into(),
            is_online,
        }
    }
}

impl Streamer for StreamerRecord {
    fn username(&self) -> &str {
        &self.username
    }

    fn is_online(&self) -> bool {
        self.is_online
    }
}

impl<T: Streamer + ?Sized> Streamer for &T {
    fn username(&self) -> &str {
        (**self).username()
    }

    fn is_online(&self) -> bool {
        (**self).is_online()
    }
}
