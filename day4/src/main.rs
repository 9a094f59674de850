use anyhow::Context;
use tracing::info;
use tracing_subscriber::EnvFilter;

use day4::{count_in_range, AdjacencyRule};

const LO: u32 = 109165;
const HI: u32 = 576723;

fn main() -> anyhow::Result<()> {
    // logs go to stderr, stdout only carries the result
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let rule = AdjacencyRule::default();
    let ok = count_in_range(LO, HI, rule)
        .with_context(|| format!("unable to scan {}..={}", LO, HI))?;

    info!(count = ok, ?rule, "finished");
    println!("Result: {}", ok);

    Ok(())
}
