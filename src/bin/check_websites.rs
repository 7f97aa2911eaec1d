//! Usage: check_websites <url>...
//!
//! Settings come from `$DRILLS_CONFIG` when set.

use idiom_drills::config::DrillsConfig;
use idiom_drills::{check_websites_async, http_checker, telemetry};
use reqwest::Client;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    telemetry::init();
    let config = DrillsConfig::load(None)?;

    let urls: Vec<String> = std::env::args().skip(1).collect();
    if urls.is_empty() {
        eprintln!("usage: check_websites <url>...");
        std::process::exit(2);
    }

    let client = Client::builder().timeout(config.checker.timeout()).build()?;
    let results = check_websites_async(http_checker(client), &urls).await;

    for url in &urls {
        let status = match results.get(url) {
            Some(true) => "up",
            Some(false) => "down",
            None => "unknown",
        };
        println!("{status:>7}  {url}");
    }
    Ok(())
}
