use clap::Parser;
use junit_report::cli::commands::cmd_convert;
use junit_report::cli::config::{Cli, load_config, log_level, resolve_options};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // RUST_LOG overrides the -v derived level
    let env = env_logger::Env::default().default_filter_or(log_level(cli.verbose));
    env_logger::Builder::from_env(env)
        .format_timestamp(None)
        .init();

    let config = load_config(cli.config.as_deref());
    let options = resolve_options(&cli, &config);

    let clean = cmd_convert(&cli.source, cli.destination.as_deref(), &options, cli.verbose)?;
    if !clean {
        std::process::exit(1);
    }

    Ok(())
}
