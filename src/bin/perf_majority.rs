use anyhow::Context;
use clap::Parser;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use majority_bench::report::{table_header, table_row, write_html};
use majority_bench::{BenchConfig, Benchmark};

/// Times Boyer-Moore voting, sort-based and brute force majority finders on a
/// growing array and writes the results to benchmark.html.
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Log every checkpoint to stderr.
    #[arg(short, long)]
    verbose: bool,
}

fn init_logging(level: &str) {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logging(if args.verbose { "debug" } else { "info" });

    let config = BenchConfig::default();
    let bench = Benchmark::new(config.clone()).context("invalid benchmark configuration")?;

    println!("{}", table_header());
    let rows = bench.run(|row| println!("{}", table_row(row)))?;

    write_html(&config.output_path, &rows, &config)
        .with_context(|| format!("writing {}", config.output_path.display()))?;
    println!("\nWrote {}", config.output_path.display());

    Ok(())
}
