//! pathviz: an interactive A* visualiser in the terminal.

mod cli;

use std::fs::File;
use std::sync::Mutex;
use std::time::Duration;

use clap::Parser;
use pathviz_crossterm::CrosstermDriver;
use pathviz_ui::{App, AppConfig};
use tracing_subscriber::{EnvFilter, fmt};

use cli::Cli;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_logging(&cli)?;
    log::info!(
        "starting: {n}x{n} board, step delay {}ms",
        cli.step_delay_ms,
        n = cli.size
    );

    let driver = CrosstermDriver::new().with_mouse(!cli.no_mouse);
    let mut app = App::new(AppConfig {
        driver,
        grid_size: cli.size,
        cell_width: cli.cell_width,
        step_delay: Duration::from_millis(cli.step_delay_ms),
    });
    if let Err(e) = app.run() {
        log::error!("{e}");
        eprintln!("pathviz: {e}");
        std::process::exit(1);
    }
    log::info!("bye");
    Ok(())
}

/// Send log records to `--log-file`; the terminal belongs to the board.
/// `RUST_LOG` overrides the default `info` level.
fn init_logging(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let file = File::create(&cli.log_file)?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .try_init()
        .map_err(|e| -> Box<dyn std::error::Error> { e })
}
