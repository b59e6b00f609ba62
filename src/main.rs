// file: src/main.rs
// description: commandline application entry point with command handling
// reference: application bootstrap and orchestration

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use content_finder::exporter::markdown::{render_images, render_videos};
use content_finder::models::topic::BLANK_TOPIC_MESSAGE;
use content_finder::utils::logging::{format_heading, format_success, format_warning};
use content_finder::{Config, ContentAggregator, JsonExporter, Topic};
use std::path::PathBuf;
use tracing::{info, warn};

#[derive(Parser)]
#[command(name = "content_finder")]
#[command(author = "cipher")]
#[command(version = "0.1.0")]
#[command(about = "Find educational images and videos for a topic", long_about = None)]
struct Cli {
    #[arg(
        short,
        long,
        value_name = "FILE",
        default_value = "config/default.toml"
    )]
    config: PathBuf,

    #[arg(long, default_value_t = true, action = ArgAction::Set)]
    color: bool,

    #[arg(short, long, action = ArgAction::SetTrue)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search both sources for a topic
    Search {
        /// Topic to search for
        topic: String,

        /// Print the result as JSON instead of markdown
        #[arg(long)]
        json: bool,

        /// Also write the result to a JSON file in this directory
        #[arg(short, long)]
        output: Option<PathBuf>,

        #[arg(short, long)]
        pretty: bool,
    },

    /// Print the effective configuration
    Config,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    content_finder::utils::logging::init_logger(cli.color, cli.verbose);

    let config = if cli.config.exists() {
        info!("Loading configuration from: {}", cli.config.display());
        Config::load(Some(cli.config.as_path())).context("Failed to load configuration")?
    } else {
        warn!(
            "Config file {} not found, using default configuration",
            cli.config.display()
        );
        Config::load(None).unwrap_or_else(|e| {
            warn!("Falling back to built-in defaults: {}", e);
            Config::default_config()
        })
    };

    match cli.command {
        Commands::Search {
            topic,
            json,
            output,
            pretty,
        } => {
            cmd_search(&config, &topic, json, output, pretty).await?;
        }
        Commands::Config => {
            println!("{}", serde_json::to_string_pretty(&config)?);
        }
    }

    Ok(())
}

async fn cmd_search(
    config: &Config,
    raw_topic: &str,
    json: bool,
    output: Option<PathBuf>,
    pretty: bool,
) -> Result<()> {
    let Ok(topic) = Topic::parse(raw_topic) else {
        println!("{}", format_warning(BLANK_TOPIC_MESSAGE));
        return Ok(());
    };

    let aggregator =
        ContentAggregator::new(config).context("Failed to initialize content search")?;
    let result = aggregator.search(topic.as_str()).await;

    if json {
        let rendered = if pretty {
            serde_json::to_string_pretty(&result)?
        } else {
            serde_json::to_string(&result)?
        };
        println!("{}", rendered);
    } else {
        println!("\n{}", format_heading(&format!("Images for \"{}\"", topic)));
        println!("{}", render_images(&result.images));
        println!("\n{}", format_heading("Videos"));
        println!("{}\n", render_videos(&result.videos));
    }

    if let Some(dir) = output {
        let exporter = JsonExporter::new(dir).context("Failed to prepare export directory")?;
        let path = exporter
            .export(&topic, &result, pretty)
            .context("Failed to export search result")?;
        println!("{}", format_success(&format!("Saved to {}", path.display())));
    }

    Ok(())
}
