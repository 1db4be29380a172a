use std::fs;
use std::io;
use std::path::PathBuf;
use std::str::FromStr;
use std::thread;
use std::time;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;

use crossterm::cursor;
use crossterm::event;
use crossterm::event::Event as CtEvent;
use crossterm::event::KeyCode;
use crossterm::event::KeyEvent;
use crossterm::event::KeyModifiers;
use crossterm::execute;
use crossterm::style;
use crossterm::terminal;

use tracing_subscriber::EnvFilter;

use toruslife::pattern::Pattern;
use toruslife::render::Board;
use toruslife::sim::Config;
use toruslife::sim::Simulation;

/// Animate Conway's Game of Life on a toroidal grid
#[derive(Parser)]
struct Args {
    /// Grid height. Ignored when a pattern file is given
    #[arg(long, default_value_t = 50)]
    height: usize,

    /// Grid width. Ignored when a pattern file is given
    #[arg(long, default_value_t = 50)]
    width: usize,

    /// Probability that a cell starts alive
    #[arg(long, default_value_t = 0.1)]
    proportion: f64,

    /// Seed of the pseudo-random generator
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Seed the board from a plaintext pattern file instead of randomly
    #[arg(long)]
    pattern: Option<PathBuf>,

    /// Milliseconds between generations
    #[arg(long, default_value_t = 1000)]
    tick: u64,
}

enum Event {
    TogglePause,
    Exit,
}

fn handle_event(event: CtEvent) -> Option<Event> {
    match event {
        CtEvent::Key(key_event) => match key_event {
            KeyEvent {
                code: KeyCode::Char('q'),
                ..
            }
            | KeyEvent {
                code: KeyCode::Char('c'),
                modifiers: KeyModifiers::CONTROL,
                ..
            } => Some(Event::Exit),
            KeyEvent {
                code: KeyCode::Char(' '),
                ..
            } => Some(Event::TogglePause),
            _ => None,
        },
        _ => None,
    }
}

fn run(sim: &mut Simulation, board: &mut Board, tick: Duration) -> anyhow::Result<()> {
    let mut stdout = io::stdout();
    let mut paused = false;

    loop {
        let grid = sim.grid()?;
        let alive = grid.count_alive();
        board.draw(grid);

        execute!(
            stdout,
            terminal::Clear(terminal::ClearType::All),
            cursor::MoveTo(0, 0),
        )?;

        for line in board.render().lines() {
            execute!(stdout, style::Print(line), cursor::MoveToNextLine(1))?;
        }

        let status = format!(
            "generation {} | alive {alive}{} | [space] pause, [q] quit",
            sim.generation(),
            if paused { " | paused" } else { "" },
        );
        execute!(stdout, style::Print(status), cursor::MoveToNextLine(1))?;

        // Poll events for as long as the tick
        let t = time::SystemTime::now();
        let event = if event::poll(tick)? {
            handle_event(event::read()?)
        } else {
            None
        };
        let dt = t.elapsed()?;

        match event {
            Some(Event::Exit) => break,
            Some(Event::TogglePause) => paused = !paused,
            None => {}
        }

        thread::sleep(tick.saturating_sub(dt));

        if !paused {
            sim.update()?;
        }
    }

    Ok(())
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    let mut sim = match &args.pattern {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("Failed to read pattern file {}", path.display()))?;
            let pattern = Pattern::from_str(&text)
                .with_context(|| format!("Failed to parse pattern file {}", path.display()))?;

            Simulation::from_pattern(pattern)
        }
        None => Simulation::new(Config {
            grid_height: args.height,
            grid_width: args.width,
            init_alive_proportion: args.proportion,
            random_state: args.seed,
            init_pattern: None,
        })?,
    };

    sim.initialize();

    let mut board = Board::new(sim.height(), sim.width());
    let tick = Duration::from_millis(args.tick);

    terminal::enable_raw_mode()?;
    let res = run(&mut sim, &mut board, tick);
    terminal::disable_raw_mode()?;

    res
}
