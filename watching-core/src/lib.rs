//! What the analytics server reports on `/watching`: the channels the
//! miner is actively watching (at most 2 on twitch) and every channel
//! currently live.

mod status;
mod streamer;

pub use status::{resolve, resolve_or_empty, StatusPayload, NOTHING_WATCHED};
pub use streamer::{Streamer, StreamerRecord};
