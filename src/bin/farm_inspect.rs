//! Farm screen inspector
//!
//! Loads a token snapshot from JSON and prints what the Farming or Harvest
//! screen shows for it, optionally pressing the action button against a
//! dry-run wallet.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use farm_screens_sdk::{
    farming::{ensure_unique_addresses, InfoPanel},
    logging::{init_logging, LoggingConfig},
    utils::{format_address, format_balance, format_percentage, format_usd},
    CollectionView, DryRunWallet, FarmConfig, FarmMode, FarmScreen, FarmSnapshot, Navigator, Route,
    ScreenView,
};

#[derive(Clone, Copy, ValueEnum)]
enum Mode {
    /// Farming screen
    Deposit,
    /// Harvest screen
    Withdraw,
}

#[derive(Parser)]
#[command(name = "farm-inspect")]
#[command(about = "Inspect the farming screens for a token snapshot")]
#[command(version)]
struct Args {
    /// JSON file holding the snapshot (chain_id, tokens, loading)
    #[arg(short, long)]
    snapshot: PathBuf,

    /// Screen to evaluate
    #[arg(short, long, value_enum, default_value = "deposit")]
    mode: Mode,

    /// Address of the token to select
    #[arg(long)]
    select: Option<String>,

    /// Amount to enter
    #[arg(short, long)]
    amount: Option<String>,

    /// Treat the farm contract as already approved for the selected token
    #[arg(long)]
    allowed: bool,

    /// Press the action button against a dry-run wallet
    #[arg(long)]
    simulate: bool,

    /// Path to the configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,
}

/// Follows links by printing where the app would go
struct ConsoleNavigator;

impl Navigator for ConsoleNavigator {
    fn navigate(&self, route: Route) {
        println!("-> {} ({})", route.path(), route.screen_name());
    }
}

fn load_config(path: Option<PathBuf>) -> Result<FarmConfig> {
    let path = path.unwrap_or_else(FarmConfig::default_path);
    if path.exists() {
        FarmConfig::load(&path)
            .with_context(|| format!("Failed to load config from {}", path.display()))
    } else {
        Ok(FarmConfig::default())
    }
}

fn print_view(view: &ScreenView, config: &FarmConfig, navigator: &dyn Navigator) {
    let view = match view {
        ScreenView::WrongNetwork { network_name } => {
            println!(
                "Change network to {}",
                network_name.as_deref().unwrap_or("the supported network")
            );
            return;
        }
        ScreenView::Ready(view) => view,
    };

    match &view.collection {
        CollectionView::Loading => println!("Fetching..."),
        CollectionView::Empty => println!("No farms to show"),
        CollectionView::Items(items) => {
            for token in items {
                let selected = view.selected.as_ref().map(|s| s.address.as_str())
                    == Some(token.address.as_str());
                println!(
                    "{} {:<14} {:<16} {:>14} {:>9} {}",
                    if selected { "*" } else { " " },
                    format_address(&token.address),
                    token.display_symbol(),
                    format_usd(token.value_usd_or_zero(), 2),
                    format_percentage(token.apy.unwrap_or(0.0)),
                    token.multiplier_label(),
                );
            }
        }
    }

    println!("Amount: {:?}", view.amount);
    println!("Action: {:?}", view.action);

    let (reward_a, reward_b) = &config.reward_symbols;
    match &view.info {
        Some(InfoPanel::Deposit(info)) => {
            println!(
                "  {} {} per year",
                format_balance(info.reward_per_year, 18, 8),
                reward_a
            );
            println!("  My balance: {}", format_balance(info.balance, info.decimals, 8));
            println!("  Total value locked: {}", format_usd(info.total_value_usd, 2));
            println!("  APY: {}", format_percentage(info.apy));
        }
        Some(InfoPanel::Harvest(info)) => {
            if let Some(reward) = info.pending_reward_a {
                println!("  Pending {}: {}", reward_a, format_balance(reward, 18, 8));
            }
            if let Some(reward) = info.pending_reward_b {
                println!("  Pending {}: {}", reward_b, format_balance(reward, 18, 8));
            }
            if let Some(deposited) = info.deposited {
                println!("  Deposited: {}", format_balance(deposited, info.decimals, 8));
            }
        }
        None => {}
    }

    if let Some(error) = &view.error {
        println!("Error: {}", error);
    }
    if let Some(link) = &view.link {
        println!("Add liquidity first");
        navigator.navigate(link.clone());
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let mut logging = LoggingConfig::from_env();
    if args.debug {
        logging = logging.debug();
    }
    init_logging(&logging)?;

    let config = load_config(args.config)?;
    let content = fs::read_to_string(&args.snapshot)
        .with_context(|| format!("Failed to read snapshot {}", args.snapshot.display()))?;
    let snapshot: FarmSnapshot =
        serde_json::from_str(&content).context("Failed to parse snapshot")?;
    if let Err(e) = ensure_unique_addresses(&snapshot.tokens) {
        tracing::warn!("{}", e);
    }

    let mode = match args.mode {
        Mode::Deposit => FarmMode::Deposit,
        Mode::Withdraw => FarmMode::Withdraw,
    };
    let mut screen = FarmScreen::new(mode, config);

    if let Some(address) = &args.select {
        let token = snapshot
            .tokens
            .iter()
            .find(|t| &t.address == address)
            .cloned()
            .with_context(|| format!("Token {} is not in the snapshot", address))?;
        screen.on_select(token);
        if args.allowed {
            screen.on_allowance_fetched(address, true);
        }
    }
    if let Some(amount) = args.amount {
        screen.on_amount_change(amount);
    }

    print_view(&screen.view(&snapshot), screen.config(), &ConsoleNavigator);

    if args.simulate {
        let outcome = screen.on_action_press(&snapshot, &DryRunWallet).await?;
        println!();
        println!("Outcome: {:?}", outcome);
        print_view(&screen.view(&snapshot), screen.config(), &ConsoleNavigator);
    }

    Ok(())
}
