//! uinput-client - send one command to a running uinputd

use std::path::PathBuf;

use anyhow::{anyhow, bail, Context, Result};
use log::debug;

use uinputd::client::Client;
use uinputd::config;
use uinputd::input::{keycodes, KeyCode};
use uinputd::protocol::Response;

fn print_help() {
    println!(
        r#"uinput-client {} - send commands to uinputd

USAGE:
    uinput-client [--socket PATH] <COMMAND> [ARGS]

COMMANDS:
    type TEXT [--layout L]                       Type text at once
    stream TEXT [--layout L] [--char-delay MS] [--word-delay MS]
                                                 Type text with delays
    key KEY [--modifier M]                       Press one key (code or name)
    ping                                         Check the daemon is alive

OPTIONS:
    -h, --help              Print this help message
    -V, --version           Print version information
    -s, --socket PATH       Daemon socket (default: $UINPUTD_SOCKET_PATH,
                            $XDG_RUNTIME_DIR/uinputd.sock, /tmp/.uinputd.sock)

EXAMPLES:
    uinput-client type "Bonjour à tous" --layout fr
    uinput-client stream "slow typing" --char-delay 30
    uinput-client key enter
    uinput-client key c --modifier ctrl
"#,
        env!("CARGO_PKG_VERSION")
    );
}

#[derive(Debug, PartialEq)]
enum Command {
    Type {
        text: String,
        layout: Option<String>,
    },
    Stream {
        text: String,
        layout: Option<String>,
        char_delay: u64,
        word_delay: u64,
    },
    Key {
        keycode: KeyCode,
        modifier: String,
    },
    Ping,
}

#[derive(Debug, PartialEq)]
struct Invocation {
    socket: Option<PathBuf>,
    command: Command,
}

/// Numeric keycode or a key name ("enter", "f5", "a")
fn parse_key(value: &str) -> Result<KeyCode> {
    if let Ok(code) = value.parse::<KeyCode>() {
        return Ok(code);
    }
    keycodes::key_from_name(value).ok_or_else(|| anyhow!("Unknown key: {}", value))
}

fn parse_ms(flag: &str, value: &str) -> Result<u64> {
    value
        .parse()
        .with_context(|| format!("{} expects milliseconds, got {:?}", flag, value))
}

fn parse_args(args: &[String]) -> Result<Invocation> {
    let mut socket = None;
    let mut layout = None;
    let mut modifier = String::new();
    let mut char_delay = 0;
    let mut word_delay = 0;
    let mut positional = Vec::new();

    let mut iter = args.iter().skip(1);
    while let Some(arg) = iter.next() {
        let flag = arg.as_str();
        let mut value = |flag: &str| {
            iter.next()
                .cloned()
                .ok_or_else(|| anyhow!("{} requires a value", flag))
        };
        match flag {
            "--socket" | "-s" => socket = Some(PathBuf::from(value(flag)?)),
            "--layout" | "-l" => layout = Some(value(flag)?),
            "--modifier" | "-m" => modifier = value(flag)?,
            "--char-delay" => char_delay = parse_ms(flag, &value(flag)?)?,
            "--word-delay" => word_delay = parse_ms(flag, &value(flag)?)?,
            _ => positional.push(arg.clone()),
        }
    }

    let mut positional = positional.into_iter();
    let name = positional
        .next()
        .ok_or_else(|| anyhow!("No command given (try --help)"))?;
    let mut operand = |what: &str| {
        positional
            .next()
            .ok_or_else(|| anyhow!("{} requires {}", name, what))
    };

    let command = match name.as_str() {
        "type" => Command::Type {
            text: operand("TEXT")?,
            layout,
        },
        "stream" => Command::Stream {
            text: operand("TEXT")?,
            layout,
            char_delay,
            word_delay,
        },
        "key" => Command::Key {
            keycode: parse_key(&operand("KEY")?)?,
            modifier,
        },
        "ping" => Command::Ping,
        other => bail!("Unknown command: {} (try --help)", other),
    };

    if let Some(extra) = positional.next() {
        bail!("Unexpected argument: {}", extra);
    }

    Ok(Invocation { socket, command })
}

fn socket_path(explicit: Option<PathBuf>) -> PathBuf {
    explicit
        .or_else(|| std::env::var_os(config::ENV_SOCKET_PATH).map(PathBuf::from))
        .unwrap_or_else(config::default_socket_path)
}

async fn execute(client: &Client, command: Command) -> Result<Response> {
    match command {
        Command::Type { text, layout } => client.type_text(&text, layout.as_deref()).await,
        Command::Stream {
            text,
            layout,
            char_delay,
            word_delay,
        } => {
            client
                .stream_text(&text, layout.as_deref(), char_delay, word_delay)
                .await
        }
        Command::Key { keycode, modifier } => client.send_key(keycode, &modifier).await,
        Command::Ping => client.ping().await,
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args: Vec<String> = std::env::args().collect();

    // --help
    if args.len() < 2 || args.iter().any(|a| a == "--help" || a == "-h") {
        print_help();
        return Ok(());
    }

    // --version
    if args.iter().any(|a| a == "--version" || a == "-V") {
        println!("uinput-client {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    let invocation = parse_args(&args)?;
    let client = Client::new(socket_path(invocation.socket));
    debug!("Using socket {}", client.socket_path().display());

    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("Failed to create tokio runtime")?;
    let response = rt.block_on(execute(&client, invocation.command))?;

    if response.success {
        if let Some(message) = response.message {
            println!("{}", message);
        }
        Ok(())
    } else {
        let error = response.error.unwrap_or_else(|| "unknown error".to_string());
        eprintln!("Error: {}", error);
        std::process::exit(1);
    }
}
