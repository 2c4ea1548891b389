//! resell-scout - reseller toolkit CLI
//!
//! Amazon reference prices, arbitrage checks and auction lot search.

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use resell_scout::arbitrage::ResaleCandidate;
use resell_scout::commands::{AnalyzeCommand, AuctionCommand, LotsOptions, SearchCommand};
use resell_scout::config::{Config, OutputFormat};
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "resell-scout",
    version,
    about = "Reseller toolkit: Amazon reference prices, arbitrage checks and auction lots",
    long_about = "Scrapes Amazon search listings with TLS fingerprint emulation, evaluates resale \
                  margins against them, and queries an auction platform's GraphQL API."
)]
struct Cli {
    /// Path to config file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Output format (table, json, markdown, csv)
    #[arg(short, long, global = true)]
    format: Option<OutputFormat>,

    /// Proxy URL (e.g., socks5://host:port)
    #[arg(long, global = true, env = "RESELL_PROXY")]
    proxy: Option<String>,

    /// User-Agent sent to Amazon
    #[arg(long, global = true, env = "RESELL_USER_AGENT")]
    user_agent: Option<String>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Scrape Amazon search listings
    #[command(alias = "s")]
    Search {
        /// Search query
        query: String,

        /// Maximum number of results
        #[arg(short, long)]
        max: Option<usize>,
    },

    /// Decide whether an item is worth reselling
    #[command(alias = "a")]
    Analyze {
        /// Product name, used as the Amazon search query
        #[arg(required_unless_present = "input")]
        product: Option<String>,

        /// Acquisition price before condition adjustment
        #[arg(short, long, required_unless_present = "input")]
        price: Option<f64>,

        /// Condition label, e.g. "New" or "Used - Good"
        #[arg(long, default_value = "New")]
        condition: String,

        /// Shipping cost
        #[arg(long, default_value = "0")]
        shipping: f64,

        /// Fees
        #[arg(long, default_value = "0")]
        fees: f64,

        /// Minimum profit margin in percent
        #[arg(long)]
        min_profit: Option<f64>,

        /// JSON file with an array of candidates to evaluate in one run
        #[arg(short, long, conflicts_with = "product")]
        input: Option<PathBuf>,
    },

    /// List your current auction bids
    Bids,

    /// List lots in an auction
    Lots {
        /// Auction id
        auction_id: i64,

        /// Category id (-1 for all)
        #[arg(long, allow_negative_numbers = true)]
        category: Option<i64>,

        /// Fetch a single page instead of all pages
        #[arg(long)]
        page: Option<u32>,

        /// Lots per page
        #[arg(long)]
        page_length: Option<u32>,

        /// Free-text filter (single-page mode)
        #[arg(long, requires = "page")]
        search: Option<String>,
    },

    /// Place a bid on a lot
    Bid {
        /// Lot id
        lot_id: i64,

        /// Bid amount
        amount: f64,

        /// Confirm a bid the server asked to re-confirm
        #[arg(long)]
        confirm: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new(Level::DEBUG.to_string())
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(Level::WARN.to_string()))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    // Load config with layered overrides
    let mut config = Config::load(cli.config.as_deref())?.with_env();

    // Apply CLI overrides
    if let Some(format) = cli.format {
        config.format = format;
    }
    if let Some(proxy) = cli.proxy {
        config.proxy = Some(proxy);
    }
    if let Some(ua) = cli.user_agent {
        config.user_agent = ua;
    }

    let output = match cli.command {
        Commands::Search { query, max } => {
            if let Some(max) = max {
                config.max_results = max;
            }
            SearchCommand::new(config).execute(&query).await?
        }

        Commands::Analyze { product, price, condition, shipping, fees, min_profit, input } => {
            if let Some(min_profit) = min_profit {
                config.min_profit_percent = min_profit;
            }

            let candidates = match (input, product, price) {
                (Some(path), _, _) => AnalyzeCommand::load_candidates(path)?,
                (None, Some(product), Some(price)) => vec![ResaleCandidate::new(product, price, condition)
                    .with_shipping(shipping)
                    .with_fees(fees)],
                _ => bail!("Provide a product name and --price, or --input"),
            };

            AnalyzeCommand::new(config).execute(&candidates).await?
        }

        Commands::Bids => AuctionCommand::new(config).bids().await?,

        Commands::Lots { auction_id, category, page, page_length, search } => {
            let options = LotsOptions { category, page, page_length, search_text: search };
            AuctionCommand::new(config).lots(auction_id, &options).await?
        }

        Commands::Bid { lot_id, amount, confirm } => {
            AuctionCommand::new(config).bid(lot_id, amount, confirm).await?
        }
    };

    println!("{}", output);

    Ok(())
}
