use std::net::{IpAddr, SocketAddr};

use axum::{extract::State, routing, Json, Router};
use watching_core::{StatusPayload, StreamerRecord};

use crate::config::Config;
use crate::errors::{AnalyticsError, Result};
use crate::state::StatusHandle;

pub struct AnalyticsServer {
    handle: StatusHandle,
}

impl AnalyticsServer {
    /// A server which doesn't know about any streamer yet.
    pub fn new(currently_watching: Vec<String>) -> Self {
        AnalyticsServer {
            handle: StatusHandle::new(currently_watching, vec![]),
        }
    }

    pub fn with_streamers(self, streamers: Vec<StreamerRecord>) -> Self {
        self.handle.set_streamers(streamers);
        self
    }

    pub fn from_config(config: &Config) -> Self {
        AnalyticsServer {
            handle: StatusHandle::new(
                config.watching.clone(),
                config.streamers.clone().unwrap_or_default(),
            ),
        }
    }

    /// Where the miner pushes its updates
    pub fn handle(&self) -> StatusHandle {
        self.handle.clone()
    }

    pub fn router(&self) -> Router<()> {
        axum::Router::new()
            .route("/watching", routing::get(watching_get))
            .with_state(self.handle.clone())
    }

    pub async fn run(self, bind: &str, port: u16) -> Result<()> {
        let ip: IpAddr = bind
            .parse()
            .map_err(|err| AnalyticsError::InvalidBind(bind.to_string(), err))?;
        let addr = SocketAddr::new(ip, port);

        log::info!("analytics server listening on http://{addr}");
        let result = axum::Server::try_bind(&addr)?
            .serve(self.router().into_make_service())
            .await;
        log::error!("The analytics server shutdown {:?}", result);
        result?;
        Err(AnalyticsError::Exited)
    }
}

async fn watching_get(State(handle): State<StatusHandle>) -> Json<StatusPayload> {
    let status = handle.status();
    log::debug!(
        "watching {:?}, {} online",
        status.watching(),
        status.count_online()
    );
    Json(status)
}
