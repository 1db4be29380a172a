use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use thiserror::Error;
use tracing::debug;
use tracing::warn;

use crate::cell::Cell;
use crate::grid::Grid;
use crate::pattern::Pattern;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Grid dimensions must be positive, got {height}x{width}")]
    EmptyGrid { height: usize, width: usize },

    #[error("Alive proportion must be in [0, 1], got {0}")]
    ProportionOutOfRange(f64),
}

#[derive(Error, Debug)]
pub enum SimError {
    #[error("Simulation is not initialized. Call initialize first")]
    NotInitialized,
}

/// Starting configuration of a simulation.
///
/// There are two ways to seed the board: give the grid dimensions together
/// with an alive proportion and a seed, and the board fills with random
/// cells; or give an explicit pattern. A pattern always wins: its shape
/// becomes the grid shape and the random parameters go unused.
///
/// The defaults are a 50x50 grid with 10% of cells alive under seed 42.
#[derive(Clone, Debug)]
pub struct Config {
    pub grid_height: usize,
    pub grid_width: usize,

    /// Probability that a cell starts alive, random mode only
    pub init_alive_proportion: f64,

    /// Seed of the pseudo-random generator, random mode only. The same seed
    /// and proportion always reproduce the same board.
    pub random_state: u64,

    pub init_pattern: Option<Pattern>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            grid_height: 50,
            grid_width: 50,
            init_alive_proportion: 0.1,
            random_state: 42,
            init_pattern: None,
        }
    }
}

/// How generation 0 gets built, resolved from [`Config`] at construction
#[derive(Clone, Debug)]
pub enum SeedMode {
    /// Copy an explicit pattern
    Pattern(Pattern),

    /// Draw every cell independently from a seeded generator
    Random { alive_proportion: f64, seed: u64 },
}

/// The Game of Life engine.
///
/// Construction records the configuration only; the board does not exist
/// until [`initialize`] is called. From then on, [`update`] advances the
/// board one generation per call, forever. The rule is B3/S23 and the
/// boundary policy is toroidal wraparound (see [`Grid::neighbors`]).
///
/// [`initialize`]: Simulation::initialize
/// [`update`]: Simulation::update
#[derive(Debug)]
pub struct Simulation {
    seed: SeedMode,
    height: usize,
    width: usize,
    grid: Option<Grid>,
    generation: u64,
}

impl Simulation {
    pub fn new(config: Config) -> Result<Self, ConfigError> {
        let seed = match config.init_pattern {
            Some(pattern) => {
                if (config.grid_height, config.grid_width) != (pattern.height(), pattern.width()) {
                    warn!(
                        "Grid dimensions {}x{} ignored. Using the {}x{} pattern shape",
                        config.grid_height,
                        config.grid_width,
                        pattern.height(),
                        pattern.width()
                    );
                }

                SeedMode::Pattern(pattern)
            }
            None => {
                if config.grid_height == 0 || config.grid_width == 0 {
                    return Err(ConfigError::EmptyGrid {
                        height: config.grid_height,
                        width: config.grid_width,
                    });
                }

                let proportion = config.init_alive_proportion;
                if !(0.0..=1.0).contains(&proportion) {
                    return Err(ConfigError::ProportionOutOfRange(proportion));
                }

                SeedMode::Random {
                    alive_proportion: proportion,
                    seed: config.random_state,
                }
            }
        };

        let (height, width) = match &seed {
            SeedMode::Pattern(pattern) => (pattern.height(), pattern.width()),
            SeedMode::Random { .. } => (config.grid_height, config.grid_width),
        };

        Ok(Self {
            seed,
            height,
            width,
            grid: None,
            generation: 0,
        })
    }

    /// A simulation seeded from an explicit pattern
    pub fn from_pattern(pattern: Pattern) -> Self {
        Self {
            height: pattern.height(),
            width: pattern.width(),
            seed: SeedMode::Pattern(pattern),
            grid: None,
            generation: 0,
        }
    }

    /// A randomly seeded simulation
    pub fn random(
        height: usize,
        width: usize,
        alive_proportion: f64,
        seed: u64,
    ) -> Result<Self, ConfigError> {
        Self::new(Config {
            grid_height: height,
            grid_width: width,
            init_alive_proportion: alive_proportion,
            random_state: seed,
            init_pattern: None,
        })
    }

    /// Materialize generation 0.
    ///
    /// In pattern mode the board becomes a copy of the pattern. In random
    /// mode every cell is drawn independently, in row-major order, from a
    /// generator seeded with `random_state`, so the same configuration
    /// always reproduces the same board. Calling this again resets the
    /// simulation to that same generation 0 regardless of how many updates
    /// ran in between.
    pub fn initialize(&mut self) {
        let mut grid = Grid::new(self.height, self.width);

        match &self.seed {
            SeedMode::Pattern(pattern) => {
                for r in 0..self.height {
                    for c in 0..self.width {
                        grid.set(r, c, pattern.get(r, c));
                    }
                }
            }
            SeedMode::Random {
                alive_proportion,
                seed,
            } => {
                let mut rng = ChaCha8Rng::seed_from_u64(*seed);

                for r in 0..self.height {
                    for c in 0..self.width {
                        grid.set(r, c, Cell::from_alive(rng.gen_bool(*alive_proportion)));
                    }
                }
            }
        }

        debug!(
            height = self.height,
            width = self.width,
            alive = grid.count_alive(),
            "initialized generation 0"
        );

        self.grid = Some(grid);
        self.generation = 0;
    }

    /// Advance the board by exactly one generation.
    ///
    /// Every cell's next state is computed from a snapshot of the previous
    /// generation, never from a half-updated neighbor:
    ///
    /// * an alive cell with 2 or 3 alive neighbors stays alive,
    /// * a dead cell with exactly 3 alive neighbors comes alive,
    /// * every other cell is dead.
    pub fn update(&mut self) -> Result<(), SimError> {
        let grid = self.grid.as_mut().ok_or(SimError::NotInitialized)?;

        let prev = grid.clone();

        for r in 0..prev.height() {
            for c in 0..prev.width() {
                let num_alive = prev.alive_neighbors(r, c);

                let next = match (prev.get(r, c), num_alive) {
                    (Cell::Alive, 2 | 3) => Cell::Alive,
                    (Cell::Dead, 3) => Cell::Alive,
                    _ => Cell::Dead,
                };

                grid.set(r, c, next);
            }
        }

        self.generation += 1;

        Ok(())
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    /// Generations advanced since the last [`initialize`](Simulation::initialize)
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// The current board
    pub fn grid(&self) -> Result<&Grid, SimError> {
        self.grid.as_ref().ok_or(SimError::NotInitialized)
    }
}
