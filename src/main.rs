//! hash-router command line.
//!
//! # Commands
//! - `resolve`: match URLs against the configured route table and print one
//!   JSON line per URL
//! - `watch`: run the routing driver; every non-blank stdin line is a hash
//!   change and each matched route echoes `handler(params)` to stdout
//!
//! ```text
//!  stdin lines ──▶ HashLocation ──▶ HashDriver ──▶ NamedRouter ──▶ StdoutTarget
//!                                      ▲
//!  routes.toml ──▶ ConfigWatcher ──────┘ (hot reload)
//! ```

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use serde::Serialize;
use tokio::io::{AsyncBufReadExt, BufReader};

use hash_router::config::{load_config, ConfigWatcher, RouterConfig};
use hash_router::dispatch::{HandlerRegistry, NamedRouter};
use hash_router::driver::{Controller, HashDriver, HashLocation, StdoutTarget};
use hash_router::lifecycle::{signals, Shutdown};
use hash_router::observability::init_logging;
use hash_router::routing::{RouteParams, RouteTable};
use hash_router::RouterError;

#[derive(Parser)]
#[command(name = "hash-router")]
#[command(about = "Resolve and drive hash-fragment routes from a TOML route table", long_about = None)]
struct Cli {
    /// Route configuration file
    #[arg(short, long, default_value = "routes.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve URLs and print the matches as JSON lines
    Resolve {
        /// URLs such as "#/users/42"
        #[arg(required = true)]
        urls: Vec<String>,
    },
    /// Route stdin lines as hash changes until EOF or Ctrl-C
    ///
    /// Blank lines are ignored; navigate to the root route with `#` or `#/`.
    Watch {
        /// Override the configured initial URL
        #[arg(long)]
        initial: Option<String>,

        /// Do not reload routes when the config file changes
        #[arg(long)]
        no_reload: bool,
    },
}

#[derive(Serialize)]
struct Resolution<'a> {
    url: &'a str,
    matched: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pattern: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    handler: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    params: Option<RouteParams>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = load_config(&cli.config)?;

    init_logging(&config.observability);
    tracing::info!(
        config = ?cli.config,
        routes = config.routes.len(),
        "hash-router v{} starting",
        env!("CARGO_PKG_VERSION")
    );

    match cli.command {
        Commands::Resolve { urls } => resolve(&config, &urls)?,
        Commands::Watch { initial, no_reload } => {
            let initial = initial.unwrap_or_else(|| config.driver.initial_url.clone());
            let reload = config.driver.watch_config && !no_reload;
            watch(&cli.config, config, initial, reload).await?;
        }
    }

    Ok(())
}

fn resolve(config: &RouterConfig, urls: &[String]) -> Result<(), serde_json::Error> {
    let table = RouteTable::from_routes(config.route_pairs());

    for url in urls {
        let resolution = match table.resolve(url).into_match() {
            Some(m) => Resolution {
                url,
                matched: true,
                pattern: Some(m.pattern.as_str()),
                handler: Some(*m.handler),
                params: Some(m.params),
            },
            None => Resolution {
                url,
                matched: false,
                pattern: None,
                handler: None,
                params: None,
            },
        };
        println!("{}", serde_json::to_string(&resolution)?);
    }
    Ok(())
}

/// Renders `name({"param":"value"})` for the matched route.
fn echo_controller(name: String) -> Controller {
    Box::new(move |params: &RouteParams| {
        let params = serde_json::to_string(params).unwrap_or_default();
        Some(format!("{}({})", name, params))
    })
}

async fn watch(
    config_path: &Path,
    config: RouterConfig,
    initial: String,
    reload: bool,
) -> Result<(), RouterError> {
    let mut registry = HandlerRegistry::new();
    register_echo_handlers(&config, &mut registry);

    let router = NamedRouter::new(config.route_pairs(), registry);
    let driver = HashDriver::new(router)
        .with_target(StdoutTarget)
        .with_reload_hook(register_echo_handlers);

    let shutdown = Shutdown::new();
    let shutdown_rx = shutdown.subscribe();
    signals::spawn_ctrl_c_handler(shutdown.clone());

    // Keep the watcher alive for the lifetime of the driver.
    let (_watcher, reloads) = if reload {
        let (watcher, updates) = ConfigWatcher::new(config_path);
        (Some(watcher.run()?), Some(updates))
    } else {
        (None, None)
    };

    // Subscribe before stdin can navigate.
    let location = HashLocation::new(initial);
    let (initial, changes) = location.subscribe()?;
    spawn_stdin_reader(location, shutdown.clone());

    driver
        .run_subscribed(initial, changes, reloads, shutdown_rx)
        .await;

    tracing::info!("Shutdown complete");
    Ok(())
}

/// Give every handler name in `config` an echo controller.
fn register_echo_handlers(config: &RouterConfig, registry: &mut HandlerRegistry<Option<String>>) {
    for route in &config.routes {
        if !registry.contains(&route.handler) {
            tracing::debug!(handler = %route.handler, "Registering echo handler");
            registry.register(route.handler.clone(), echo_controller(route.handler.clone()));
        }
    }
}

/// The URL a stdin line navigates to, if any.
fn stdin_url(line: &str) -> Option<&str> {
    let url = line.trim();
    (!url.is_empty()).then_some(url)
}

fn spawn_stdin_reader(location: HashLocation, shutdown: Shutdown) {
    tokio::spawn(async move {
        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        loop {
            match lines.next_line().await {
                Ok(Some(line)) => {
                    if let Some(url) = stdin_url(&line) {
                        location.set_hash(url);
                    }
                }
                Ok(None) => break,
                Err(e) => {
                    tracing::error!("Failed to read stdin: {}", e);
                    break;
                }
            }
        }
        tracing::debug!("stdin closed");
        shutdown.trigger();
    });
}
