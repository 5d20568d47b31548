use homestead_cli::config::Config;
use homestead_cli::{build_state, commands, init_tracing, startup};

fn main() -> anyhow::Result<()> {
    let (cli, config) = match startup(std::env::args_os(), Config::from_env) {
        Ok(parsed) => parsed,
        Err(err) => match err.downcast::<clap::Error>() {
            Ok(usage) => usage.exit(),
            Err(err) => return Err(err),
        },
    };
    init_tracing(&config);
    tracing::debug!("Starting with {:?}", config);

    let state = build_state(&config);
    let output = commands::run(cli, &state)?;
    print!("{}", output);
    Ok(())
}
