pub mod config;
pub mod errors;
mod server;
mod state;

pub use server::AnalyticsServer;
pub use state::{StatusHandle, MAX_WATCHED};
pub use watching_core::{StatusPayload, Streamer, StreamerRecord};
