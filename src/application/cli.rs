#[cfg(test)]
#[path = "cli_test.rs"]
mod tests;

use std::env;
use std::io;
use std::path;

use anyhow::bail;
use anyhow::Result;
use clap::builder::PossibleValuesParser;
use clap::value_parser;
use clap::Arg;
use clap::ArgAction;
use clap::ArgGroup;
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
use crate::domain::models::Attachment;
use crate::domain::models::ThemeName;
use crate::domain::services::actions::help_text;
use crate::domain::services::ChatSession;
use crate::infrastructure::classifiers::ClassifierManager;

fn print_completions<G: Generator>(gen: G, cmd: &mut Command) {
    generate(gen, cmd, cmd.get_name().to_string(), &mut io::stdout());
    std::process::exit(0);
}

pub fn log_dir() -> path::PathBuf {
    if let Ok(dir) = env::var("SAFECHAT_LOG_DIR") {
        return path::PathBuf::from(dir);
    }

    return dirs::cache_dir()
        .unwrap_or_else(env::temp_dir)
        .join("safechat");
}

/// Plain text rendition of a session, one entry per visible message.
pub fn format_transcript(session: &ChatSession) -> String {
    return session
        .visible_messages()
        .iter()
        .map(|message| {
            return format!(
                "[{}] {}: {}",
                message.timestamp(),
                message.author,
                message.display_text()
            );
        })
        .collect::<Vec<String>>()
        .join("\n");
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
        if !parent.exists() {
            fs::create_dir_all(parent).await?;
        }
    }

    let mut file = fs::File::create(&config_file_path).await?;
    file.write_all(Config::serialize_default(build()).as_bytes())
        .await?;

    println!("Created default config file at {config_file_path_str}");
    return Ok(());
}

async fn classify_once(classify_matches: &ArgMatches) -> Result<()> {
    let mut session = ChatSession::new();
    if let Some(file) = classify_matches.get_one::<String>("file") {
        session.stage_file(Attachment::from_path(path::Path::new(file)).await?);
    }
    if let Some(text) = classify_matches.get_one::<String>("text") {
        session.set_input(text);
    }

    let classifier = ClassifierManager::get()?;
    if session.submit(classifier.as_ref()).await?.is_none() {
        bail!("Nothing to classify. Pass a non-empty --text or a --file.");
    }

    println!("{}", format_transcript(&session));
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
        .about("Debug helpers for Safechat")
        .hide(true)
        .subcommand(
            Command::new("log-path").about("Output path to debug log file generated when running Safechat with environment variable RUST_LOG=safechat")
        )
        .subcommand(
            Command::new("enum-config").about("List all config keys as strings.")
        );
}

fn subcommand_chat() -> Command {
    return Command::new("chat").about("Start a new chat session.");
}

fn subcommand_classify() -> Command {
    return Command::new("classify")
        .about("Classifies a single message or file and prints the result. A file takes precedence over text.")
        .arg(
            clap::Arg::new("text")
                .long("text")
                .help("Text to classify.")
                .num_args(1),
        )
        .arg(
            clap::Arg::new("file")
                .short('f')
                .long("file")
                .help("Path of a file to classify.")
                .num_args(1),
        )
        .group(
            ArgGroup::new("classify-args")
                .args(["text", "file"])
                .multiple(true)
                .required(true),
        );
}

pub fn build() -> Command {
    let commands_text = help_text()
        .split('\n')
        .map(|line| {
            if line.starts_with('-') {
                return format!("  {line}");
            }
            if line.starts_with("COMMANDS:") || line.starts_with("HOTKEYS:") {
                return Paint::new(format!("CHAT {line}"))
                    .underline()
                    .bold()
                    .to_string();
            }
            return line.to_string();
        })
        .collect::<Vec<String>>()
        .join("\n");

    let about = format!(
        "{}\n\nVersion: {}",
        env!("CARGO_PKG_DESCRIPTION"),
        env!("CARGO_PKG_VERSION"),
    );

    return Command::new("safechat")
        .about(about)
        .author(env!("CARGO_PKG_AUTHORS"))
        .version(env!("CARGO_PKG_VERSION"))
        .after_help(commands_text)
        .arg_required_else_help(false)
        .subcommand(subcommand_chat())
        .subcommand(subcommand_classify())
        .subcommand(subcommand_completions())
        .subcommand(subcommand_config())
        .subcommand(subcommand_debug())
        .arg(
            Arg::new(ConfigKey::ClassifierURL.to_string())
                .long(ConfigKey::ClassifierURL.to_string())
                .env("SAFECHAT_CLASSIFIER_URL")
                .num_args(1)
                .help(format!("Base URL of the classification service. [default: {}]", Config::default(ConfigKey::ClassifierURL)))
                .global(true),
        )
        .arg(
            Arg::new(ConfigKey::ConfigFile.to_string())
                .short('c')
                .long(ConfigKey::ConfigFile.to_string())
                .env("SAFECHAT_CONFIG_FILE")
                .num_args(1)
                .help(format!("Path to configuration file [default: {}]", Config::default(ConfigKey::ConfigFile)))
                .global(true)
        )
        .arg(
            Arg::new(ConfigKey::Theme.to_string())
                .short('t')
                .long(ConfigKey::Theme.to_string())
                .env("SAFECHAT_THEME")
                .num_args(1)
                .help(format!("Sets the colour theme of the chat window. [default: {}]", Config::default(ConfigKey::Theme)))
                .value_parser(PossibleValuesParser::new(ThemeName::VARIANTS))
                .global(true),
        )
        .arg(
            Arg::new(ConfigKey::Username.to_string())
                .short('u')
                .long(ConfigKey::Username.to_string())
                .env("SAFECHAT_USERNAME")
                .num_args(1)
                .help("Your name displayed above your chat bubbles. [default: $USER]")
                .global(true),
        );
}

pub async fn parse() -> Result<bool> {
    let matches = build().get_matches();

    match matches.subcommand() {
        Some(("debug", debug_matches)) => {
            match debug_matches.subcommand() {
                Some(("log-path", _)) => {
                    let log_path = log_dir().join("debug.log");
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
            Config::load(build(), vec![&matches, subcmd_matches]).await?;
        }
        Some(("classify", subcmd_matches)) => {
            Config::load(build(), vec![&matches, subcmd_matches]).await?;
            classify_once(subcmd_matches).await?;
            return Ok(false);
        }
        Some(("completions", subcmd_matches)) => {
            if let Some(completions) = subcmd_matches.get_one::<Shell>("shell").copied() {
                let mut app = build();
                print_completions(completions, &mut app);
            }
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
        _ => {
            Config::load(build(), vec![&matches]).await?;
        }
    }

    return Ok(true);
}
