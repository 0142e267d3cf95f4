mod render;
mod search;
mod shell;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use janscope_client::{SearchClient, SearchOptions, SearchType, TranslateKeyword};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "janscope")]
#[command(about = "Compare product prices across Yahoo Shopping, Rakuten, and eBay")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Run one search and print the comparison
    Search {
        /// Free-text keyword, e.g. "nintendo switch"
        keyword: String,

        /// Print the raw records as JSON instead of the comparison table
        #[arg(long)]
        json: bool,

        /// Also write the raw records as JSON to this file
        #[arg(long)]
        output: Option<PathBuf>,

        #[command(flatten)]
        options: SearchArgs,
    },
    /// Read keywords from stdin and search each one
    Shell {
        #[command(flatten)]
        options: SearchArgs,
    },
}

/// Service tuning flags shared by `search` and `shell`.
#[derive(Debug, Clone, Default, Args)]
struct SearchArgs {
    /// How the service groups listings into products
    #[arg(long, value_enum)]
    search_type: Option<SearchTypeArg>,

    /// Which form of the keyword the service searches with
    #[arg(long, value_enum)]
    translate: Option<TranslateArg>,

    /// Items fetched from each marketplace before grouping
    #[arg(long)]
    limit: Option<u32>,

    /// Name similarity (0.0 to 1.0) needed to merge listings in keyword grouping
    #[arg(long)]
    similarity: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum SearchTypeArg {
    Keyword,
    Code,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum TranslateArg {
    Original,
    Translated,
    Both,
}

impl SearchArgs {
    fn to_options(&self) -> SearchOptions {
        SearchOptions {
            search_type: self.search_type.map(|t| match t {
                SearchTypeArg::Keyword => SearchType::Keyword,
                SearchTypeArg::Code => SearchType::ProductCode,
            }),
            translate_keyword: self.translate.map(|t| match t {
                TranslateArg::Original => TranslateKeyword::Original,
                TranslateArg::Translated => TranslateKeyword::Translated,
                TranslateArg::Both => TranslateKeyword::Both,
            }),
            result_limit: self.limit,
            similarity_threshold: self.similarity,
        }
    }
}

fn build_client(
    config: &janscope_core::AppConfig,
    args: &SearchArgs,
) -> anyhow::Result<SearchClient> {
    let client = SearchClient::new(config)?.with_options(args.to_options())?;
    Ok(client)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let Some(command) = cli.command else {
        println!("janscope: run `janscope search <keyword>` or `janscope shell`");
        return Ok(());
    };

    let config = janscope_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
    tracing::debug!(env = %config.env, api_url = %config.api_url, "configuration loaded");

    match command {
        Commands::Search {
            keyword,
            json,
            output,
            options,
        } => {
            let client = build_client(&config, &options)?;
            search::run_search(&client, &keyword, json, output.as_deref()).await?;
        }
        Commands::Shell { options } => {
            let client = build_client(&config, &options)?;
            shell::run_shell(&client).await?;
        }
    }

    Ok(())
}
