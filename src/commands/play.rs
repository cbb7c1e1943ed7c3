use crate::cli::PlayArgs;
use crate::config::Config;
use crate::session;
use eyre::Result;
use std::io;

pub fn run(config: &Config, args: &PlayArgs) -> Result<()> {
    let config = apply_overrides(config, args);

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut out = io::stdout();

    session::play(&config, &mut input, &mut out)?;
    Ok(())
}

fn apply_overrides(config: &Config, args: &PlayArgs) -> Config {
    let mut config = config.clone();
    if let Some(ref output) = args.output {
        config.output.path = output.clone();
    }
    config
}
