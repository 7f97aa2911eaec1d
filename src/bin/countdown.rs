use idiom_drills::config::DrillsConfig;
use idiom_drills::countdown::{ConfigurableSleeper, Countdown};
use idiom_drills::telemetry;
use std::io::{self, Write};
use tracing::debug;

fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    telemetry::init();
    let config = DrillsConfig::load(std::env::args_os().nth(1).map(Into::into))?;
    debug!(?config.countdown, "starting countdown");

    let sleeper = ConfigurableSleeper::real(config.countdown.pause());
    let stdout = io::stdout();
    let mut out = stdout.lock();
    Countdown::default()
        .start(config.countdown.start)
        .run(&mut out, sleeper)?;
    writeln!(out)?;
    Ok(())
}
