//! vain: fish-style path shortening for shell prompts
//! Collapses every directory in a path to its first letter and prints the result.

use anyhow::{Context, Result};
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command as ClapCommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use vainpath::commands::shorten::handle_shorten_command;
use vainpath::commands::truncate::handle_truncate_command;
use vainpath::core::{CliConfig, EnvConfig, FileConfig, Settings, DEFAULT_TAIL};

fn build_cli() -> ClapCommand {
    ClapCommand::new("vain")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Shorten filesystem paths for prompt display")
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .global(true)
                .help("Log diagnostics to stderr")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .global(true)
                .value_name("FILE")
                .help("Read settings from FILE instead of the default config.toml")
                .value_parser(value_parser!(PathBuf)),
        )
        .subcommand_required(true)
        .subcommand(
            ClapCommand::new("shorten")
                .about("Collapse every directory of each PATH to its first letter")
                .arg(
                    Arg::new("paths")
                        .value_name("PATH")
                        .num_args(0..)
                        .help("Paths to shorten (defaults to the current directory)"),
                )
                .arg(
                    Arg::new("separator")
                        .long("separator")
                        .short('s')
                        .value_name("CHAR")
                        .help("Path separator (defaults to the platform separator)")
                        .value_parser(value_parser!(char)),
                )
                .arg(
                    Arg::new("max-width")
                        .long("max-width")
                        .short('w')
                        .value_name("N")
                        .help("Cap the shortened path at N characters (0 disables)")
                        .value_parser(value_parser!(usize)),
                )
                .arg(
                    Arg::new("tail")
                        .long("tail")
                        .value_name("TEXT")
                        .help("Marker appended when --max-width cuts the path"),
                )
                .arg(
                    Arg::new("no-tilde")
                        .long("no-tilde")
                        .help("Do not replace the home directory with ~")
                        .action(ArgAction::SetTrue),
                )
                .arg(
                    Arg::new("no-clean")
                        .long("no-clean")
                        .help("Do not resolve '.', '..' and repeated separators first")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            ClapCommand::new("truncate")
                .about("Cap TEXT at a number of characters")
                .arg(Arg::new("text").value_name("TEXT").required(true))
                .arg(
                    Arg::new("width")
                        .long("width")
                        .short('w')
                        .value_name("N")
                        .required(true)
                        .value_parser(value_parser!(usize)),
                )
                .arg(
                    Arg::new("tail")
                        .long("tail")
                        .value_name("TEXT")
                        .default_value(DEFAULT_TAIL),
                ),
        )
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn load_file_config(matches: &ArgMatches) -> Result<FileConfig> {
    match matches.get_one::<PathBuf>("config") {
        Some(path) => FileConfig::load(path),
        None => FileConfig::load_default().context("Failed to load default config"),
    }
}

fn main() -> Result<()> {
    let matches = build_cli().get_matches();
    init_logging(matches.get_flag("verbose"));

    match matches.subcommand() {
        Some(("shorten", sub)) => {
            let cli = CliConfig {
                separator: sub.get_one::<char>("separator").copied(),
                tail: sub.get_one::<String>("tail").cloned(),
                max_width: sub.get_one::<usize>("max-width").copied(),
                no_tilde: sub.get_flag("no-tilde"),
                no_clean: sub.get_flag("no-clean"),
            };
            let settings = Settings::resolve(cli, EnvConfig::from_env(), load_file_config(&matches)?)?;
            let paths = sub
                .get_many::<String>("paths")
                .map(|values| values.cloned().collect())
                .unwrap_or_default();
            handle_shorten_command(paths, &settings)
        }
        Some(("truncate", sub)) => {
            let text = sub.get_one::<String>("text").map(String::as_str).unwrap_or_default();
            let tail = sub.get_one::<String>("tail").map(String::as_str).unwrap_or(DEFAULT_TAIL);
            let width = sub.get_one::<usize>("width").copied().unwrap_or_default();
            handle_truncate_command(text, tail, width)
        }
        _ => Ok(()),
    }
}
