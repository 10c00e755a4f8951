//! Terminal playback of a pulsing heart.
//!
//! Builds a heart, then loops over its precomputed frames, binning the
//! particles into terminal cells and shading each cell by density.
//!
//! Run with: `cargo run --example terminal_heart --release [seed]`
//! Set `RUST_LOG=heartbeat=debug` to see construction logs.
//! Press `q`, `Esc` or `Ctrl-C` to quit.

use std::io::{self, Write};
use std::time::Instant;

use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute, queue,
    style::{Color, Print, ResetColor, SetForegroundColor},
    terminal::{self, EnterAlternateScreen, LeaveAlternateScreen},
};
use heartbeat::prelude::*;
use tracing_subscriber::EnvFilter;

const SHADES: &[char] = &[' ', '.', ':', '*', 'o', '#', '@'];

fn main() -> io::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let seed = std::env::args().nth(1).and_then(|s| s.parse().ok());
    let mut config = HeartConfig::new();
    if let Some(seed) = seed {
        config = config.with_seed(seed);
    }

    let built = Instant::now();
    let heart = Heart::new(config).map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;
    tracing::info!(elapsed = ?built.elapsed(), frames = heart.cycle_length(), "heart ready");

    let mut out = io::stdout();
    execute!(out, EnterAlternateScreen, cursor::Hide)?;
    terminal::enable_raw_mode()?;

    let result = run(&heart, &mut out);

    terminal::disable_raw_mode()?;
    execute!(out, ResetColor, cursor::Show, LeaveAlternateScreen)?;
    result
}

fn run(heart: &Heart, out: &mut impl Write) -> io::Result<()> {
    let config = heart.config();
    let color = to_color(config.color);
    let mut frame = 0i64;

    loop {
        if event::poll(config.frame_interval)? {
            if let Event::Key(key) = event::read()? {
                let ctrl_c = key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL);
                if key.kind == KeyEventKind::Press && (ctrl_c || matches!(key.code, KeyCode::Char('q') | KeyCode::Esc)) {
                    return Ok(());
                }
            }
        }

        let (cols, rows) = terminal::size()?;
        let grid = bin(heart.get_frame(frame), config.canvas_width, config.canvas_height, cols, rows);
        let peak = grid.iter().copied().max().unwrap_or(0).max(1);

        queue!(out, cursor::MoveTo(0, 0), SetForegroundColor(color))?;
        for (row, line) in grid.chunks(cols as usize).enumerate() {
            let text: String = line
                .iter()
                .map(|&n| {
                    let level = (n * (SHADES.len() as u32 - 1)).div_ceil(peak) as usize;
                    SHADES[level.min(SHADES.len() - 1)]
                })
                .collect();
            queue!(out, cursor::MoveTo(0, row as u16), Print(text))?;
        }
        out.flush()?;

        frame += 1;
    }
}

/// Accumulate particle area per terminal cell.
fn bin(particles: &[Particle], width: u32, height: u32, cols: u16, rows: u16) -> Vec<u32> {
    let (cols, rows) = (cols.max(1) as usize, rows.max(1) as usize);
    let mut grid = vec![0u32; cols * rows];
    for p in particles {
        if p.x < 0.0 || p.y < 0.0 {
            continue;
        }
        let cx = (p.x / width as f32 * cols as f32) as usize;
        let cy = (p.y / height as f32 * rows as f32) as usize;
        if cx < cols && cy < rows {
            grid[cy * cols + cx] += p.size;
        }
    }
    grid
}

fn to_color(c: Vec3) -> Color {
    let channel = |v: f32| (v.clamp(0.0, 1.0) * 255.0) as u8;
    Color::Rgb { r: channel(c.x), g: channel(c.y), b: channel(c.z) }
}
