//! Usage: racer <url-a> <url-b>
//!
//! Settings come from `$DRILLS_CONFIG` when set.

use idiom_drills::config::DrillsConfig;
use idiom_drills::{configurable_racer, telemetry};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    telemetry::init();
    let config = DrillsConfig::load(None)?;

    let mut args = std::env::args().skip(1);
    let (Some(a), Some(b)) = (args.next(), args.next()) else {
        eprintln!("usage: racer <url-a> <url-b>");
        std::process::exit(2);
    };

    let winner = configurable_racer(&a, &b, config.racer.timeout()).await?;
    println!("{winner}");
    Ok(())
}
