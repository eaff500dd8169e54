use std::process::ExitCode;

use storefront_cli::console::ConsoleReporter;
use storefront_infra::PipelineConfig;

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let config = PipelineConfig::from_env();
    storefront_observability::init(config.log_format);

    let reporter = ConsoleReporter::stdio(&config.program_name);
    let outcome = storefront_cli::app::run(&config, std::env::args_os().skip(1), &reporter).await;
    reporter.flush()?;

    Ok(match outcome {
        Ok(_) => ExitCode::SUCCESS,
        Err(_) => ExitCode::FAILURE,
    })
}
