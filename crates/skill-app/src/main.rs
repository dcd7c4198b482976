mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use skill_app::config::DEFAULT_CONFIG_FILE;
use skill_app::{AppConfig, HistoryKind};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "skill-routes")]
#[command(version, about = "Inspect and exercise the Skill Building route table", long_about = None)]
struct Cli {
    /// Config file (missing file means defaults)
    #[arg(short, long, global = true, default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,

    /// Override the configured history mode
    #[arg(long, global = true, value_enum)]
    history: Option<HistoryKind>,

    /// Override the configured base path
    #[arg(long, global = true)]
    base: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the route table
    Routes {
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Resolve a URL or path to a route (exit code 1 when nothing matches)
    Resolve {
        /// URL or path, e.g. /quiz/42 or https://host/#/quiz
        url: String,

        #[arg(long)]
        json: bool,
    },

    /// Build the URL of a named route
    Href {
        /// Route name, e.g. Quiz
        name: String,

        /// Route parameter as key=value
        #[arg(short, long = "param", value_parser = parse_key_val)]
        params: Vec<(String, String)>,

        /// Query pair as key=value
        #[arg(short, long, value_parser = parse_key_val)]
        query: Vec<(String, String)>,

        /// Fragment without `#`
        #[arg(long)]
        hash: Option<String>,
    },

    /// Replay a navigation session
    ///
    /// Steps are paths (/courses), named targets (@Quiz:id=3), `back` or `forward`.
    Navigate {
        #[arg(required = true)]
        steps: Vec<String>,

        #[arg(long)]
        json: bool,
    },
}

fn parse_key_val(raw: &str) -> std::result::Result<(String, String), String> {
    raw.split_once('=')
        .filter(|(k, _)| !k.is_empty())
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .ok_or_else(|| format!("expected key=value, got `{}`", raw))
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let mut config = AppConfig::load(&cli.config)?;
    if let Some(history) = cli.history {
        config.router.history = history;
    }
    if let Some(base) = cli.base {
        config.router.base = base;
    }

    skill_app::logging::init(&config.log.level);
    tracing::debug!(config = ?cli.config, "configuration loaded");

    let router = skill_app::create_router(&config)?;

    let code = match cli.command {
        Commands::Routes { json } => commands::routes::execute(&router, json)?,
        Commands::Resolve { url, json } => commands::resolve::execute(&router, &url, json)?,
        Commands::Href {
            name,
            params,
            query,
            hash,
        } => commands::href::execute(&router, &name, params, query, hash)?,
        Commands::Navigate { steps, json } => commands::navigate::execute(router, &steps, json)?,
    };

    Ok(code)
}
