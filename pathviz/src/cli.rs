use std::path::PathBuf;

use clap::Parser;
use pathviz_ui::DEFAULT_CELL_WIDTH;

#[derive(Debug, Parser)]
#[command(
    name = "pathviz",
    about = "Draw walls on a grid and watch A* find its way around them",
    author,
    version
)]
pub struct Cli {
    /// Number of rows (and columns) of the board.
    #[arg(long, short = 's', default_value_t = 50, value_parser = clap::value_parser!(i32).range(2..=200))]
    pub size: i32,

    /// Terminal columns per board cell.
    #[arg(long, default_value_t = DEFAULT_CELL_WIDTH, value_parser = clap::value_parser!(i32).range(1..=4))]
    pub cell_width: i32,

    /// Pause between two animated search steps, in milliseconds.
    #[arg(long, default_value_t = 5, env = "PATHVIZ_STEP_DELAY_MS")]
    pub step_delay_ms: u64,

    /// Do not capture the mouse (keyboard only).
    #[arg(long)]
    pub no_mouse: bool,

    /// Where log output goes; the terminal itself is taken by the board.
    #[arg(long, default_value = "pathviz.log")]
    pub log_file: PathBuf,
}
