// file: src/main.rs
// description: commandline application entry point
// reference: application bootstrap and orchestration

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use std::net::IpAddr;
use std::path::PathBuf;
use tracing::{info, warn};
use yandex_passages::utils::logging::{format_success, format_warning};
use yandex_passages::{Config, Extractor, FailurePolicy, SearchScope};

/// Taxonomy searching tool.
///
/// Searches Yandex for the words of each line of a taxonomy file and extracts
/// titles, headlines and passages from the results. The output has one JSON
/// list of extracted texts per line, matching the lines of the input. A Yandex
/// XML username and key from https://xml.yandex.com/settings/ are required;
/// the search type must be set to 'Worldwide' and the current IP registered.
#[derive(Parser)]
#[command(name = "yandex_passages")]
#[command(version)]
#[command(about = "Collect Yandex search passages for every line of a taxonomy file")]
struct Cli {
    /// Input taxonomy file, one term per line
    #[arg(short = 't', long = "taxonomy", value_name = "FILE")]
    taxonomy: PathBuf,

    /// Output file to write search results into
    #[arg(short, long, value_name = "FILE")]
    output: PathBuf,

    /// Yandex username, falls back to `credentials.user` in the config
    #[arg(short = 'u', long = "username", env = "YANDEX_USER")]
    username: Option<String>,

    /// Key provided by Yandex, falls back to `credentials.key` in the config
    #[arg(short = 'k', long = "key", env = "YANDEX_KEY", hide_env_values = true)]
    key: Option<String>,

    #[arg(
        short,
        long,
        value_name = "FILE",
        default_value = yandex_passages::config::DEFAULT_CONFIG_PATH
    )]
    config: PathBuf,

    /// What to do when a line's search fails
    #[arg(long = "on-error", value_enum)]
    on_error: Option<FailurePolicy>,

    /// Number of concurrent searches
    #[arg(long, value_name = "NUM")]
    workers: Option<usize>,

    #[arg(long, value_enum)]
    scope: Option<SearchScope>,

    #[arg(long, value_name = "URL")]
    endpoint: Option<String>,

    /// Local address registered with Yandex XML
    #[arg(long, value_name = "IP")]
    client_ip: Option<IpAddr>,

    #[arg(long, action = ArgAction::SetTrue)]
    no_progress: bool,

    #[arg(long, default_value_t = true, action = ArgAction::Set)]
    color: bool,

    #[arg(short, long, action = ArgAction::SetTrue)]
    verbose: bool,
}

impl Cli {
    fn apply_overrides(&self, mut config: Config) -> Config {
        if let Some(user) = &self.username {
            config.credentials.user = user.clone();
        }
        if let Some(key) = &self.key {
            config.credentials.key = key.clone();
        }
        if let Some(policy) = self.on_error {
            config.pipeline.failure_policy = policy;
        }
        if let Some(workers) = self.workers {
            config.pipeline.workers = workers;
        }
        if let Some(scope) = self.scope {
            config.search.scope = scope;
        }
        if let Some(endpoint) = &self.endpoint {
            config.search.endpoint = Some(endpoint.clone());
        }
        if let Some(ip) = self.client_ip {
            config.search.client_ip = Some(ip);
        }
        if self.no_progress {
            config.pipeline.show_progress = false;
        }

        config
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Before parsing, so `.env` can supply YANDEX_USER and YANDEX_KEY.
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    yandex_passages::utils::logging::init_logger(cli.color, cli.verbose);

    if cli.config.exists() {
        info!("Loading configuration from: {}", cli.config.display());
    }
    let config = Config::load(Some(cli.config.as_path())).context("Failed to load configuration")?;
    let config = cli.apply_overrides(config);

    let extractor = Extractor::from_config(config).context("Invalid configuration")?;

    let stats = match extractor.run(&cli.taxonomy, &cli.output).await {
        Ok(stats) => stats,
        Err(e) => {
            info!("Exiting");
            return Err(e).context(format!(
                "Search of {} did not complete",
                cli.taxonomy.display()
            ));
        }
    };

    if stats.terms_failed > 0 {
        warn!("{} lines were written as [] after failed searches", stats.terms_failed);
        eprintln!(
            "{}",
            format_warning(&format!(
                "{} of {} lines failed",
                stats.terms_failed,
                stats.lines_written()
            ))
        );
    }

    eprintln!(
        "{}",
        format_success(&format!(
            "Wrote {} lines to {}",
            stats.lines_written(),
            cli.output.display()
        ))
    );
    info!("Done");

    Ok(())
}
