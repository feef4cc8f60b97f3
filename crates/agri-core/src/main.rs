//! `agrichain`: command-line shell over the AgriChain catalog

use agri_core::{logging, render, AgriChain, AgriConfig, LogFormat};
use agri_model::Role;
use agri_query::{Lookup, ProductCriteria, TransactionCriteria};
use agri_scan::{RandomSelector, ScanSession};
use anyhow::Context;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

#[derive(Parser)]
#[command(name = "agrichain")]
#[command(version, about = "Supply-chain traceability for farm produce")]
struct Cli {
    /// Path to configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Seed fixture (overrides config file)
    #[arg(long, global = true)]
    seed: Option<PathBuf>,

    /// Log output format (overrides config file)
    #[arg(long, global = true, value_enum)]
    log_format: Option<LogFormat>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List products matching a search and filters
    Products {
        /// Case-insensitive text matched against product and farmer names
        #[arg(short, long, default_value = "")]
        search: String,
        /// Produce category, or `all`
        #[arg(long = "type", default_value = "all")]
        category: String,
        /// Lifecycle status, or `all`
        #[arg(long, default_value = "all")]
        status: String,
        /// Quality grade, or `all`
        #[arg(long, default_value = "all")]
        quality: String,
        /// Role whose list title is shown
        #[arg(long, default_value = "consumer")]
        role: Role,
    },
    /// Show ledger entries with summary cards
    Ledger {
        /// Case-insensitive text matched against parties and product id
        #[arg(short, long, default_value = "")]
        search: String,
        /// Entry kind, or `all`
        #[arg(long = "type", default_value = "all")]
        kind: String,
        /// `verified`, `pending`, or `all`
        #[arg(long, default_value = "all")]
        status: String,
    },
    /// Look a product up by its exact QR code
    Lookup {
        /// Traceability code
        code: String,
    },
    /// Show one product with its supply-chain journey
    Detail {
        /// Product identifier
        product_id: String,
    },
    /// Show the stat panels for a role
    Dashboard {
        /// Role to show
        #[arg(long, default_value = "farmer")]
        role: Role,
    },
    /// Show the navigation for a role
    Nav {
        /// Role to show
        #[arg(long, default_value = "farmer")]
        role: Role,
    },
    /// Simulate scanning a product code
    Scan {
        /// Seed for reproducible selection
        #[arg(long)]
        seed_rng: Option<u64>,
        /// Delay before the scan resolves, in milliseconds (overrides config)
        #[arg(long)]
        delay_ms: Option<u64>,
    },
    /// Print the JSON schema of seed fixtures
    Schema,
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => AgriConfig::load(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => AgriConfig::default(),
    };
    if let Some(seed) = cli.seed {
        config = config.with_seed_path(seed);
    }
    if let Some(format) = cli.log_format {
        config.logging = config.logging.with_format(format);
    }

    logging::init(&config.logging)?;
    tracing::debug!(?config, "Starting agrichain");

    run(&config, cli.command).await
}

async fn run(config: &AgriConfig, command: Command) -> anyhow::Result<ExitCode> {
    // Served without loading a seed
    if let Command::Schema = command {
        println!("{}", serde_json::to_string_pretty(&agri_seed::seed_schema())?);
        return Ok(ExitCode::SUCCESS);
    }

    let chain = &AgriChain::from_config(config)?;
    match command {
        Command::Products {
            search,
            category,
            status,
            quality,
            role,
        } => {
            let criteria = ProductCriteria::new()
                .search(&search)
                .constraint("type", &category)?
                .constraint("status", &status)?
                .constraint("quality", &quality)?;
            let products = chain.products(&criteria);
            let title = chain.profile(role).product_list_title;
            print!("{}", render::product_list(chain, title, &products)?);
        }
        Command::Ledger {
            search,
            kind,
            status,
        } => {
            let criteria = TransactionCriteria::new()
                .search(&search)
                .constraint("type", &kind)?
                .constraint("status", &status)?;
            let summary = chain.ledger_summary();
            print!("{}", render::ledger(chain, &summary, &chain.transactions(&criteria))?);
        }
        Command::Lookup { code } => match chain.lookup(&code) {
            Lookup::Found(product) => {
                let detail = chain
                    .product_detail(product.id.as_str())
                    .context("looked-up product has no detail view")?;
                print!("{}", render::product_detail(chain, &detail)?);
            }
            Lookup::NotFound { .. } => {
                eprintln!("{}", render::NOT_FOUND);
                return Ok(ExitCode::FAILURE);
            }
        },
        Command::Detail { product_id } => {
            let Some(detail) = chain.product_detail(&product_id) else {
                eprintln!("No product with id {product_id}");
                return Ok(ExitCode::FAILURE);
            };
            print!("{}", render::product_detail(chain, &detail)?);
        }
        Command::Dashboard { role } => {
            print!("{}", render::dashboard(chain, role, &chain.dashboard(role))?);
        }
        Command::Nav { role } => {
            print!("{}", render::navigation(chain.navigation(role))?);
        }
        Command::Scan { seed_rng, delay_ms } => {
            let delay = delay_ms.map_or_else(|| config.scan_delay(), Duration::from_millis);
            let mut session: ScanSession = chain.scan_session().with_delay(delay);
            if let Some(seed) = seed_rng {
                session = session.with_selector(RandomSelector::seeded(seed));
            }
            println!("Scanning...");
            let product = session.start(chain.scan_candidates())?.wait().await?;
            print!("{}", render::scanned(chain, &product));
        }
        Command::Schema => {}
    }
    Ok(ExitCode::SUCCESS)
}
