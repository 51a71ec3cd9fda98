mod cli;

use std::io::{BufWriter, stderr, stdout};
use std::process::exit;
use std::time::{Duration, Instant};

use anyhow::Result;
use tracing::level_filters::LevelFilter;
use tracing::{error, info};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{Layer, fmt};

use weekly_top_purchases::calendar::{Clock, FixedClock, SystemClock};
use weekly_top_purchases::engine::SpendPipeline;
use weekly_top_purchases::loader::LoadError;
use weekly_top_purchases::models::AggregatedPurchase;

use crate::cli::Cli;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::init();

    setup_logging(parse_log_level(&cli.log_level));

    let result = match cli.now {
        Some(now) => rank_purchases(&cli, FixedClock::new(now)).await,
        None => rank_purchases(&cli, SystemClock).await
    };

    //NOTE: Nothing is rendered on failure, the error only goes to the log
    let purchases = match result {
        Ok(purchases) => purchases,
        Err(error) => {
            error!("{error}");
            exit(1);
        }
    };

    let output = BufWriter::new(stdout().lock());
    cli.format.presenter(output).render(&purchases)?;

    Ok(())
}

async fn rank_purchases<C: Clock>(cli: &Cli, clock: C) -> Result<Vec<AggregatedPurchase>, LoadError> {
    let mut pipeline = SpendPipeline::new(clock).with_top_k(cli.top);

    for pattern in &cli.exclusions {
        pipeline = pipeline.with_exclusion(pattern.as_str());
    }

    if let Some(milliseconds) = cli.read_timeout_ms {
        pipeline = pipeline.with_read_timeout(Duration::from_millis(milliseconds));
    }

    let timer = Instant::now();
    let purchases = pipeline.run(&cli.files).await?;
    let duration = timer.elapsed();

    info!("Ranked {} purchase(s) in: {duration:?}", purchases.len());

    Ok(purchases)
}

fn parse_log_level(level: &str) -> LevelFilter {
    match level.to_lowercase().as_str() {
        "trace" => LevelFilter::TRACE,
        "debug" => LevelFilter::DEBUG,
        "info" => LevelFilter::INFO,
        "warn" => LevelFilter::WARN,
        "error" => LevelFilter::ERROR,
        _ => {
            eprintln!("Invalid log level '{}', defaulting to 'error'", level);
            LevelFilter::ERROR
        }
    }
}

fn setup_logging(level: LevelFilter) {
    //NOTE: stdout carries the rendered purchases, so logs go to stderr
    let terminal_log = fmt::layer()
        .with_target(false)
        .with_writer(stderr)
        .with_filter(level);

    tracing_subscriber::registry()
        .with(terminal_log)
        .init();
}
