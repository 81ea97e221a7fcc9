use std::env;
use std::io;
use std::path;

use anyhow::bail;
use anyhow::Result;
use clap::value_parser;
use clap::Arg;
use clap::ArgAction;
use clap::ArgMatches;
use clap::Command;
use clap_complete::generate;
use clap_complete::Generator;
use clap_complete::Shell;
use strum::VariantNames;
use tokio::fs;
use tokio::io::AsyncWriteExt;
use yansi::Paint;

use crate::configuration::Config;
use crate::configuration::ConfigKey;
use crate::domain::services::ExchangeService;
use crate::domain::services::SessionIdentity;
use crate::infrastructure::storage::StorageManager;

const HOTKEYS_TEXT: &str = "HOTKEYS:
- Enter or c: Open the chat when it is closed, send the message when it is open.
- Esc: Close the chat.
- Mouse click: Open the chat from the button, close it from [x] or by clicking outside.
- Up/Down, PageUp/PageDown, CTRL+U/CTRL+D: Scroll the conversation.
- q: Quit while the chat is closed.
- CTRL+C: Quit.";

/// Directory holding `debug.log` when logging is enabled with RUST_LOG=classicmode.
pub fn debug_log_dir() -> path::PathBuf {
    if let Ok(dir) = env::var("CLASSICMODE_LOG_DIR") {
        return path::PathBuf::from(dir);
    }

    return dirs::cache_dir()
        .unwrap_or_else(env::temp_dir)
        .join("classicmode");
}

fn print_completions<G: Generator>(gen: G, cmd: &mut Command) {
    generate(gen, cmd, cmd.get_name().to_string(), &mut io::stdout());
}

async fn create_config_file() -> Result<()> {
    let config_file_path_str = Config::default(ConfigKey::ConfigFile);
    let config_file_path = path::PathBuf::from(&config_file_path_str);
    if config_file_path.exists() {
        bail!(format!(
            "Config file already exists at {config_file_path_str}"
        ));
    }

    if let Some(parent) = config_file_path.parent() {
        fs::create_dir_all(parent).await?;
    }

    let mut file = fs::File::create(&config_file_path).await?;
    file.write_all(Config::serialize_default(build()).as_bytes())
        .await?;

    println!("Created default config file at {config_file_path_str}");
    return Ok(());
}

async fn send_message(matches: &ArgMatches, send_matches: &ArgMatches) -> Result<()> {
    Config::load(vec![matches, send_matches]).await?;

    let message = send_matches
        .get_one::<String>("message")
        .map(|message| return message.trim().to_string())
        .unwrap_or_default();
    if message.is_empty() {
        bail!("Message must not be empty");
    }

    let exchange = ExchangeService::from_config().await?;
    let reply = exchange.exchange(&message).await;
    println!("{}", reply.text);

    return Ok(());
}

async fn show_session(matches: &ArgMatches, session_matches: &ArgMatches) -> Result<()> {
    Config::load(vec![matches, session_matches]).await?;

    let storage = StorageManager::get(&Config::get(ConfigKey::StorageFile));
    let session_id = SessionIdentity::get_or_create(storage.as_ref()).await;
    println!("{session_id}");

    return Ok(());
}

async fn clear_session(matches: &ArgMatches, session_matches: &ArgMatches) -> Result<()> {
    Config::load(vec![matches, session_matches]).await?;

    let storage = StorageManager::get(&Config::get(ConfigKey::StorageFile));
    if session_matches.get_flag("all") {
        storage.clear().await?;
    } else {
        SessionIdentity::clear(storage.as_ref()).await?;
    }
    println!("Cleared session. A new one will be created on the next message.");

    return Ok(());
}

fn subcommand_completions() -> Command {
    return Command::new("completions")
        .about("Generates shell completions.")
        .arg(
            clap::Arg::new("shell")
                .short('s')
                .long("shell")
                .help("Which shell to generate completions for.")
                .action(ArgAction::Set)
                .value_parser(value_parser!(Shell))
                .required(true),
        );
}

fn subcommand_config() -> Command {
    return Command::new("config")
        .about("Configuration file options.")
        .subcommand(
            Command::new("create").about("Saves the default config file to the configuration file path. This command will fail if the file exists already.")
        )
        .subcommand(
            Command::new("default").about("Outputs the default configuration file to stdout.")
        )
        .subcommand(
            Command::new("path").about("Returns the default path for the configuration file.")
        );
}

fn subcommand_debug() -> Command {
    return Command::new("debug")
        .about("Debug helpers for Classic Mode")
        .hide(true)
        .subcommand(
            Command::new("log-path").about("Output path to debug log file generated when running Classic Mode with environment variable RUST_LOG=classicmode")
        )
        .subcommand(
            Command::new("enum-config").about("List all config keys as strings.")
        );
}

fn subcommand_send() -> Command {
    return Command::new("send")
        .about("Send one message to the fashion assistant and print the reply.")
        .arg(
            clap::Arg::new("message")
                .short('m')
                .long("message")
                .help("Message to send.")
                .num_args(1)
                .required(true),
        );
}

fn subcommand_session() -> Command {
    return Command::new("session")
        .about("Manage the chat session identifier stored on this machine.")
        .arg_required_else_help(true)
        .subcommand(Command::new("show").about("Print the session ID, creating one if none is stored."))
        .subcommand(
            Command::new("clear")
                .about("Forget the stored session ID.")
                .arg(
                    clap::Arg::new("all")
                        .long("all")
                        .help("Remove everything in local storage, not only the session ID.")
                        .action(ArgAction::SetTrue),
                ),
        );
}

fn global_arg(key: ConfigKey, help: &str) -> Arg {
    let env_name = format!(
        "CLASSICMODE_{}",
        key.to_string().replace('-', "_").to_uppercase()
    );

    let mut help = help.to_string();
    let default = Config::default(key);
    if !default.is_empty() {
        help = format!("{help} [default: {default}]");
    }

    return Arg::new(key.to_string())
        .long(key.to_string())
        .env(env_name)
        .num_args(1)
        .help(help)
        .global(true);
}

pub fn build() -> Command {
    let about = format!(
        "{}\n\nVersion: {}\nCommit: {}",
        env!("CARGO_PKG_DESCRIPTION"),
        env!("CARGO_PKG_VERSION"),
        env!("VERGEN_GIT_DESCRIBE")
    );

    let hotkeys_text = HOTKEYS_TEXT
        .split('\n')
        .map(|line| {
            if line.starts_with('-') {
                return format!("  {line}");
            }
            return Paint::new(format!("CHAT {line}"))
                .underline()
                .bold()
                .to_string();
        })
        .collect::<Vec<String>>()
        .join("\n");

    return Command::new("classicmode")
        .about(about)
        .author(env!("CARGO_PKG_AUTHORS"))
        .version(env!("CARGO_PKG_VERSION"))
        .after_help(hotkeys_text)
        .arg_required_else_help(false)
        .subcommand(Command::new("chat").about("Open the storefront with the chat widget. This is the default."))
        .subcommand(subcommand_completions())
        .subcommand(subcommand_config())
        .subcommand(subcommand_debug())
        .subcommand(Command::new("manpages").about("Generates manpages and outputs to stdout."))
        .subcommand(subcommand_send())
        .subcommand(subcommand_session())
        .arg(
            global_arg(ConfigKey::ConfigFile, "Path to configuration file")
                .short('c'),
        )
        .arg(
            global_arg(ConfigKey::WebhookURL, "URL of the automation webhook that answers chat messages. Required to chat.")
                .short('u'),
        )
        .arg(global_arg(
            ConfigKey::WebhookTimeout,
            "Time to wait in milliseconds for the webhook to reply before giving up.",
        ))
        .arg(global_arg(
            ConfigKey::ReplyDelay,
            "Minimum time in milliseconds before a successful reply is shown.",
        ))
        .arg(global_arg(
            ConfigKey::MobileBreakpoint,
            "Viewport width in pixels at which the chat switches from full screen to a floating panel. One terminal column counts as 8px.",
        ))
        .arg(global_arg(
            ConfigKey::StorageFile,
            "Path to the local storage file holding the chat session ID.",
        ))
        .arg(global_arg(
            ConfigKey::Page,
            "Page path reported to the webhook with each message.",
        ))
        .arg(global_arg(
            ConfigKey::Referrer,
            "Referrer reported to the webhook with each message. Reported as 'direct' when empty.",
        ))
        .arg(global_arg(
            ConfigKey::UserAgent,
            "User agent reported to the webhook with each message.",
        ));
}

/// Handles the command line. Returns true when the storefront should start.
pub async fn parse() -> Result<bool> {
    let matches = build().get_matches();

    match matches.subcommand() {
        Some(("debug", debug_matches)) => {
            match debug_matches.subcommand() {
                Some(("log-path", _)) => {
                    let log_path = debug_log_dir().join("debug.log");
                    println!("{}", log_path.to_string_lossy());
                }
                Some(("enum-config", _)) => {
                    let res = ConfigKey::VARIANTS.join("\n");
                    println!("{}", res);
                }
                _ => {
                    subcommand_debug().print_long_help()?;
                }
            }

            return Ok(false);
        }
        Some(("chat", subcmd_matches)) => {
            Config::load(vec![&matches, subcmd_matches]).await?;
            Config::require(ConfigKey::WebhookURL)?;
        }
        Some(("completions", subcmd_matches)) => {
            if let Some(completions) = subcmd_matches.get_one::<Shell>("shell").copied() {
                let mut app = build();
                print_completions(completions, &mut app);
            }
            return Ok(false);
        }
        Some(("config", subcmd_matches)) => match subcmd_matches.subcommand() {
            Some(("create", _)) => {
                create_config_file().await?;
                return Ok(false);
            }
            Some(("default", _)) => {
                println!("{}", Config::serialize_default(build()));
                return Ok(false);
            }
            Some(("path", _)) => {
                println!("{}", Config::default(ConfigKey::ConfigFile));
                return Ok(false);
            }
            _ => {
                subcommand_config().print_long_help()?;
                return Ok(false);
            }
        },
        Some(("manpages", _)) => {
            clap_mangen::Man::new(build()).render(&mut io::stdout())?;
            return Ok(false);
        }
        Some(("send", send_matches)) => {
            send_message(&matches, send_matches).await?;
            return Ok(false);
        }
        Some(("session", session_matches)) => match session_matches.subcommand() {
            Some(("show", show_matches)) => {
                show_session(&matches, show_matches).await?;
                return Ok(false);
            }
            Some(("clear", clear_matches)) => {
                clear_session(&matches, clear_matches).await?;
                return Ok(false);
            }
            _ => {
                subcommand_session().print_long_help()?;
                return Ok(false);
            }
        },
        _ => {
            Config::load(vec![&matches]).await?;
            Config::require(ConfigKey::WebhookURL)?;
        }
    }

    return Ok(true);
}
