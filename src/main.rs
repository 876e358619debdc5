use std::process::ExitCode;

use anyhow::Result;

use skyscrapers_check::config::Config;
use skyscrapers_check::report::{exit_status, BoardReport};

fn main() -> Result<ExitCode> {
    // Parse configuration from command line and config files
    let config = Config::from_args_and_env()?;

    // RUST_LOG, when set, overrides --log-level
    env_logger::Builder::new()
        .parse_filters(&config.log_level)
        .parse_default_env()
        .init();

    if let Some(path) = &config.config_file {
        log::info!("using config {}", path.display());
    }

    let mut reports = Vec::with_capacity(config.boards.len());
    for path in &config.boards {
        let report = BoardReport::check(path, &config.markers);
        println!("{}", report.render(config.format)?);
        reports.push(report);
    }

    Ok(ExitCode::from(exit_status(&reports)))
}
