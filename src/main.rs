use analytics_server::{config::Config, AnalyticsServer};
use anyhow::{anyhow, Context, Result};
use log::info;
use std::path::PathBuf;
use structopt::StructOpt;

#[derive(Debug, StructOpt)]
struct Opt {
    /// dhall file with the settings under the "analytics" key
    #[structopt(long, parse(from_os_str), default_value = "analytics_config.dhall")]
    config: PathBuf,

    /// overrides the address from the config file
    #[structopt(long)]
    bind: Option<String>,

    /// overrides the port from the config file
    #[structopt(long)]
    port: Option<u16>,
}

#[tokio::main(flavor = "multi_thread")]
async fn main() -> Result<()> {
    env_logger::init();

    let opt = Opt::from_args();

    let config = Config::from_file_keyed(&opt.config)
        .with_context(|| format!("Cannot read config from {:?}", opt.config))?;
    info!(
        "Watching {:?}, tracking {} streamer(s)",
        config.watching,
        config.streamers.as_ref().map_or(0, |s| s.len())
    );

    let bind = opt.bind.unwrap_or_else(|| config.bind.clone());
    let port = opt.port.unwrap_or(config.port);

    AnalyticsServer::from_config(&config)
        .run(&bind, port)
        .await
        .context("Analytics server crashed")?;

    Err(anyhow!("Analytics server exited!"))
}
