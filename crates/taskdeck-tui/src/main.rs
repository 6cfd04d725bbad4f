/*
[INPUT]:  CLI arguments and terminal environment
[OUTPUT]: Running task-manager TUI with injected store and feed client
[POS]:    Binary entry point
[UPDATE]: When changing CLI flags or startup flow
*/

use std::sync::{Arc, Mutex};

use anyhow::{Context, Result, anyhow};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use taskdeck_feed::{ClientConfig, FeedClient};
use taskdeck_tui::store;
use taskdeck_tui::tui::{LOG_BUFFER_CAPACITY, LogBuffer, LogBufferHandle, LogWriterFactory, run_tui};

#[derive(Parser, Debug)]
#[command(name = "taskdeck", version, about = "Terminal task manager with a blog feed panel")]
struct Cli {
    #[arg(long = "log-level", value_name = "LEVEL", default_value = "info")]
    log_level: String,
    /// Override the blog feed base URL
    #[arg(long = "feed-url", value_name = "URL")]
    feed_url: Option<String>,
    /// Skip the startup blog feed fetch
    #[arg(long = "no-feed")]
    no_feed: bool,
    /// Validate startup wiring and exit without entering the TUI
    #[arg(long = "dry-run")]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Cli::parse();

    let log_buffer: LogBufferHandle = Arc::new(Mutex::new(LogBuffer::new(LOG_BUFFER_CAPACITY)));
    init_tracing(&args.log_level, log_buffer.clone(), args.dry_run)?;

    let feed_client = if args.no_feed {
        None
    } else {
        Some(build_feed_client(args.feed_url.as_deref())?)
    };

    if args.dry_run {
        info!("dry-run requested; startup wiring validated");
        return Ok(());
    }

    let task_store = store::shared_store();

    info!("starting taskdeck");
    run_tui(task_store, feed_client, log_buffer).await
}

fn init_tracing(log_level: &str, buffer: LogBufferHandle, to_stderr: bool) -> Result<()> {
    let filter = EnvFilter::try_new(log_level).context("invalid log level")?;
    // In the TUI, log lines render in the Logs panel instead of stdout
    let builder = tracing_subscriber::fmt().with_env_filter(filter).with_ansi(false);
    let result = if to_stderr {
        builder.with_writer(std::io::stderr).try_init()
    } else {
        builder.with_writer(LogWriterFactory::new(buffer)).try_init()
    };
    result
        .map_err(|err| anyhow!(err))
        .context("initialize tracing subscriber")?;
    Ok(())
}

fn build_feed_client(feed_url: Option<&str>) -> Result<FeedClient> {
    let client = match feed_url {
        Some(url) => FeedClient::with_config_and_base_url(ClientConfig::default(), url)
            .with_context(|| format!("invalid feed URL: {url}"))?,
        None => FeedClient::new().context("create feed client")?,
    };
    Ok(client)
}
