use clap::Parser;
use color_eyre::Result;
use flashbox::{app::App, cli::Cli, logging};
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();
    let _log_guard = if cli.debug {
        Some(logging::init_logging()?)
    } else {
        None
    };
    let options = cli.to_options();
    info!(
        display_time = options.display_time,
        delay_time = options.delay_time,
        repetitions = options.repetitions,
        fps = options.fps,
        "startup options: "
    );

    info!("initialising terminal");
    let terminal = ratatui::init();
    let app_result = App::new(options).run(terminal).await;
    match &app_result {
        Ok(()) => {}
        Err(error_value) => error!(error = ?error_value, "flashbox exited with error"),
    }

    info!("restoring terminal");
    ratatui::restore();
    app_result
}
