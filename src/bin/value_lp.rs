//! One-shot LP position valuation against live services
//!
//! Diagnostic tool: resolves, values and classifies a single LP holding
//! and prints the breakdown. Prices are supplied on the command line
//! because the price oracle is an external collaborator.

use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;

use lpscope::application::{LpAnalysisService, LpPositionReport};
use lpscope::domain::oracle::StaticPriceOracle;
use lpscope::infrastructure::amm::HttpAmmClient;
use lpscope::infrastructure::chain::IndexerHttpClient;
use lpscope::shared::config::{ConfigLoader, EngineConfig};
use lpscope::shared::types::LpToken;

#[derive(Parser, Debug)]
#[command(version, about = "Value and classify a single Algorand LP position")]
struct Args {
    /// On-chain asset id of the LP token
    #[arg(long)]
    asset_id: u64,

    /// LP token ticker, e.g. TMPOOL2
    #[arg(long)]
    ticker: String,

    /// LP display name, e.g. "TinymanPool2.0 xALGO-ALGO"
    #[arg(long)]
    name: String,

    /// Decimal units of the LP token held
    #[arg(long)]
    amount: f64,

    /// Leg prices as TICKER=USD, repeatable
    #[arg(long = "price", value_parser = parse_price)]
    prices: Vec<(String, f64)>,

    /// Path to config file (optional)
    #[arg(long)]
    config: Option<String>,
}

fn parse_price(raw: &str) -> Result<(String, f64), String> {
    let (ticker, price) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected TICKER=USD, got '{}'", raw))?;
    let price: f64 = price
        .parse()
        .map_err(|e| format!("bad price '{}': {}", price, e))?;
    Ok((ticker.to_string(), price))
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt().with_env_filter("info").init();
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => ConfigLoader::load_config(path)?,
        None => EngineConfig::default(),
    };

    let timeout = Duration::from_millis(config.request_timeout_ms);
    let chain = Arc::new(IndexerHttpClient::new(config.indexer_url.clone(), timeout));
    let amm = Arc::new(HttpAmmClient::new(config.amm_api_url.clone(), timeout));
    let service = LpAnalysisService::from_config(&config, chain, amm)?;

    let lp = LpToken {
        ticker: args.ticker,
        name: args.name,
        held_amount: args.amount,
        asset_id: args.asset_id,
    };
    let oracle = StaticPriceOracle::new(args.prices);

    match service.analyze_position(&lp, &oracle).await {
        LpPositionReport::Valued { breakdown, components } => {
            println!("💧 {} ({} units)", breakdown.lp_ticker, breakdown.lp_amount);
            println!(
                "   {}: {} (${:.2})",
                breakdown.asset1.ticker, breakdown.asset1.amount, breakdown.asset1.usd_value
            );
            println!(
                "   {}: {} (${:.2})",
                breakdown.asset2.ticker, breakdown.asset2.amount, breakdown.asset2.usd_value
            );
            println!("   Total: ${:.2}", breakdown.total_usd);
            println!("\n📊 Components:");
            for (category, record) in components {
                println!("   [{}] {} -> ${:.2}", category, record.name, record.usd_value);
            }
        }
        LpPositionReport::Unvalued { ticker, amount } => {
            println!("⚠️  {} could not be valued; holding {} units ($0)", ticker, amount);
        }
    }

    Ok(())
}
