use std::{
    io::{IsTerminal, Write},
    path::{Path, PathBuf},
};

use anyhow::Context;
use backtrack_maze::{Cell, MazeGenerator};
use clap::Parser;
use crossterm::{
    queue,
    style::{self, Color, Stylize},
};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

/// Generate a perfect maze by recursive backtracking and print it
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Width and height of the grid, must be odd
    #[arg(long, default_value_t = MazeGenerator::DEFAULT_SIZE)]
    size: u16,

    /// Column of the starting room, must be odd
    #[arg(long, default_value_t = MazeGenerator::DEFAULT_START.0)]
    start_x: u16,

    /// Row of the starting room, must be odd
    #[arg(long, default_value_t = MazeGenerator::DEFAULT_START.1)]
    start_y: u16,

    /// Random seed
    #[arg(long)]
    seed: Option<u64>,

    /// Print without colors
    #[arg(long)]
    plain: bool,

    /// Write logs to this file instead of stderr
    #[arg(long)]
    log_file: Option<PathBuf>,
}

/// Install the global subscriber. Level comes from RUST_LOG, defaulting to info.
/// The returned guard must be kept alive until exit so buffered file logs get flushed.
fn init_tracing(log_file: Option<&Path>) -> anyhow::Result<Option<WorkerGuard>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let Some(path) = log_file else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
        return Ok(None);
    };

    let file_name = path
        .file_name()
        .with_context(|| format!("log file path {} has no file name", path.display()))?;
    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or(Path::new("."));
    let (writer, guard) = tracing_appender::non_blocking(tracing_appender::rolling::never(
        dir, file_name,
    ));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .init();
    Ok(Some(guard))
}

/// Print the maze in the same layout as `MazeGenerator::render`, with colored walls and the
/// start room highlighted.
fn print_styled(maze: &MazeGenerator, out: &mut impl Write) -> std::io::Result<()> {
    let start = maze.start();
    for (y, row) in maze.grid().rows().enumerate().rev() {
        for (x, &cell) in row.iter().enumerate() {
            let styled = match cell {
                Cell::Wall => cell.glyph().with(Color::DarkGrey),
                _ if (x as u16, y as u16) == start => cell.glyph().on(Color::Green),
                _ => cell.glyph().with(Color::Reset),
            };
            queue!(out, style::PrintStyledContent(styled))?;
        }
        queue!(out, style::Print("\n"))?;
    }
    out.flush()
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let _guard = init_tracing(args.log_file.as_deref())?;

    let maze = match args.seed {
        Some(seed) => MazeGenerator::with_seed(args.size, args.start_x, args.start_y, seed),
        None => MazeGenerator::new(args.size, args.start_x, args.start_y),
    }
    .with_context(|| {
        format!(
            "cannot generate a {0}x{0} maze starting at ({1}, {2})",
            args.size, args.start_x, args.start_y
        )
    })?;
    tracing::info!(
        "Generated {}x{} maze with {} passages",
        maze.size(),
        maze.size(),
        maze.passages()
    );

    let mut stdout = std::io::stdout().lock();
    if args.plain || !stdout.is_terminal() {
        if !args.plain {
            tracing::debug!("stdout is not a terminal, printing without colors");
        }
        write!(stdout, "{}", maze)?;
        stdout.flush()?;
    } else {
        print_styled(&maze, &mut stdout)?;
    }
    Ok(())
}
