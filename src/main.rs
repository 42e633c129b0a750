//! uinputd - input automation daemon
//!
//! Creates a virtual keyboard on /dev/uinput and types text received
//! over a Unix socket.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use log::{error, info, warn};
use tokio::signal::unix::{signal, SignalKind};
use tokio::sync::watch;

use uinputd::config::{Config, LoggingConfig};
use uinputd::device::{self, UinputDevice};
use uinputd::dispatch::Dispatcher;
use uinputd::layouts::Registry;
use uinputd::server::Server;

fn print_help() {
    println!(
        r#"uinputd {} - input automation daemon (virtual keyboard over uinput)

USAGE:
    uinputd [OPTIONS]

OPTIONS:
    -h, --help              Print this help message
    -V, --version           Print version information
    -c, --config PATH       Use this config file instead of the search path
    --init-config           Write a config template (to --config PATH if given)
    -f, --force             Overwrite an existing config with --init-config
    --list-layouts          Print the available keyboard layouts

ENVIRONMENT:
    UINPUTD_CONFIG          Config file path
    UINPUTD_LAYOUT          Default layout (overrides config)
    UINPUTD_SOCKET_PATH     Socket path (overrides config)
    UINPUTD_LOG_LEVEL       debug, info, warn, error (overrides config)
    RUST_LOG                Full env_logger filter

CONFIG FILE:
    ~/.config/uinputd/config.toml, then /etc/uinputd/config.toml

EXAMPLES:
    sudo uinputd                      Run with root privileges (required for /dev/uinput)
    uinputd --init-config             Generate the default config
    uinput-client type "Hello"        Type text through the running daemon
"#,
        env!("CARGO_PKG_VERSION")
    );
}

/// Value of `--name VALUE` or `--name=VALUE`
fn arg_value<'a>(args: &'a [String], names: &[&str]) -> Option<&'a str> {
    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        for &name in names {
            if arg == name {
                return iter.next().map(String::as_str);
            }
            if let Some(value) = arg.strip_prefix(name).and_then(|rest| rest.strip_prefix('=')) {
                return Some(value);
            }
        }
    }
    None
}

fn list_layouts(registry: &Registry) {
    for name in registry.available() {
        let Ok(layout) = registry.get(&name) else {
            continue;
        };
        let dead: String = layout.dead_key_symbols().into_iter().collect();
        if dead.is_empty() {
            println!("{:<4} {} characters", name, layout.characters().len());
        } else {
            println!(
                "{:<4} {} characters, dead keys: {}",
                name,
                layout.characters().len(),
                dead
            );
        }
    }
}

/// Global log level: RUST_LOG's own filter, else the configured level
fn startup_level(rust_log: bool, logging: &LoggingConfig) -> log::LevelFilter {
    if rust_log {
        log::max_level()
    } else {
        logging.level_filter()
    }
}

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().collect();

    // --help
    if args.iter().any(|a| a == "--help" || a == "-h") {
        print_help();
        return Ok(());
    }

    // --version
    if args.iter().any(|a| a == "--version" || a == "-V") {
        println!("uinputd {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    let config_arg = arg_value(&args, &["--config", "-c"]).map(PathBuf::from);

    // Config file generation mode
    if args.iter().any(|a| a == "--init-config") {
        let force = args.iter().any(|a| a == "--force" || a == "-f");
        let path = Config::write_template(config_arg.as_deref(), force)?;
        println!("Config file generated: {}", path.display());
        return Ok(());
    }

    let registry = Arc::new(Registry::new());

    if args.iter().any(|a| a == "--list-layouts") {
        list_layouts(&registry);
        return Ok(());
    }

    // Logger before config so load warnings are visible; the configured
    // level is applied afterwards unless RUST_LOG is set
    let rust_log = std::env::var_os("RUST_LOG").is_some();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("trace")).init();
    log::set_max_level(startup_level(rust_log, &LoggingConfig::default()));

    info!("uinputd {} starting...", env!("CARGO_PKG_VERSION"));
    let cfg = Config::load(config_arg.as_deref())?;
    log::set_max_level(startup_level(rust_log, &cfg.logging));

    cfg.validate(&registry)?;
    info!(
        "Default layout: {} (available: {})",
        cfg.layout,
        registry.available().join(", ")
    );

    if !nix::unistd::geteuid().is_root() {
        warn!("Not running as root; opening {} may fail", device::uinput::UINPUT_PATH);
    }

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("Failed to create tokio runtime")?;

    let result = runtime.block_on(run(cfg, registry));
    if let Err(e) = &result {
        error!("{:#}", e);
    }
    result
}

async fn run(cfg: Config, registry: Arc<Registry>) -> Result<()> {
    let keyboard = UinputDevice::open()?;
    let dispatcher = Dispatcher::new(device::shared(keyboard), registry, cfg.dispatch_defaults());
    let server = Server::bind(&cfg, dispatcher)?;

    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    let mut sigint = signal(SignalKind::interrupt()).context("Failed to install SIGINT handler")?;
    let mut sigterm = signal(SignalKind::terminate()).context("Failed to install SIGTERM handler")?;
    tokio::spawn(async move {
        let name = tokio::select! {
            _ = sigint.recv() => "SIGINT",
            _ = sigterm.recv() => "SIGTERM",
        };
        info!("Received {}, shutting down", name);
        let _ = shutdown_tx.send(true);
    });

    // Notify systemd that we're ready (Type=notify)
    let _ = sd_notify::notify(false, &[sd_notify::NotifyState::Ready]);
    info!("Ready on {}", server.path().display());

    let result = server.run(shutdown_rx).await;

    let _ = sd_notify::notify(false, &[sd_notify::NotifyState::Stopping]);
    info!("uinputd stopped");
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_arg_value_forms() {
        let a = args(&["uinputd", "--config", "/tmp/a.toml"]);
        assert_eq!(arg_value(&a, &["--config", "-c"]), Some("/tmp/a.toml"));

        let a = args(&["uinputd", "--config=/tmp/b.toml"]);
        assert_eq!(arg_value(&a, &["--config", "-c"]), Some("/tmp/b.toml"));

        let a = args(&["uinputd", "-c", "/tmp/c.toml"]);
        assert_eq!(arg_value(&a, &["--config", "-c"]), Some("/tmp/c.toml"));
    }

    #[test]
    fn test_startup_level() {
        let debug = LoggingConfig {
            level: "debug".to_string(),
        };
        assert_eq!(startup_level(false, &debug), log::LevelFilter::Debug);
        assert_eq!(
            startup_level(false, &LoggingConfig::default()),
            log::LevelFilter::Info
        );
    }

    #[test]
    fn test_arg_value_missing() {
        assert_eq!(arg_value(&args(&["uinputd"]), &["--config"]), None);
        assert_eq!(arg_value(&args(&["uinputd", "--config"]), &["--config"]), None);
        assert_eq!(arg_value(&args(&["uinputd", "--configx"]), &["--config"]), None);
    }
}
