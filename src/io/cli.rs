//! Command-line interface for generating one or more pipe patterns

use crate::algorithm::executor::CollapseExecutor;
use crate::algorithm::selection::RandomSelector;
use crate::io::configuration::{DEFAULT_HEIGHT, DEFAULT_PATTERN_COUNT, DEFAULT_WIDTH};
use crate::io::error::{Result, WithContext, invalid_parameter};
use crate::io::progress::ProgressManager;
use crate::io::render::{render_board, render_entropy_map};
use crate::spatial::grid::Grid;
use crate::spatial::tiles::Palette;
use clap::{Parser, ValueEnum};
use rand::Rng;
use std::io::Write;
use std::time::Instant;
use tracing::info;

/// Glyph set used to draw the pattern
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum TileStyle {
    /// Double-line box drawing (╔═╗)
    #[default]
    Double,
    /// Single-line box drawing (┌─┐)
    Light,
}

impl TileStyle {
    /// Palette drawn in this style
    pub fn palette(self) -> Palette {
        match self {
            Self::Double => Palette::double_line(),
            Self::Light => Palette::light_line(),
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "pipetile")]
#[command(
    version,
    about = "Create pipe patterns with wave function collapse"
)]
/// Command-line arguments for the pattern generation tool
pub struct Cli {
    /// Width of generated pattern in tiles
    #[arg(long, default_value_t = DEFAULT_WIDTH)]
    pub width: usize,

    /// Height of generated pattern in tiles
    #[arg(long, default_value_t = DEFAULT_HEIGHT)]
    pub height: usize,

    /// How many patterns to generate
    #[arg(short = 'n', long = "n-iter", default_value_t = DEFAULT_PATTERN_COUNT)]
    pub n_iter: usize,

    /// Random seed for reproducible generation (pattern i uses seed + i)
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Glyph set for the output
    #[arg(long, value_enum, default_value_t = TileStyle::Double)]
    pub style: TileStyle,

    /// Also print the final entropy map of each pattern
    #[arg(short, long)]
    pub entropy: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Seed for the pattern at `index`, if seeding was requested
    pub const fn seed_for(&self, index: usize) -> Option<u64> {
        match self.seed {
            Some(seed) => Some(seed.wrapping_add(index as u64)),
            None => None,
        }
    }

    /// Validate argument combinations clap cannot express
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` for a zero pattern count or a grid
    /// dimension `Grid::new` would reject.
    pub fn validate(&self) -> Result<()> {
        if self.n_iter == 0 {
            return Err(invalid_parameter(
                "n-iter",
                &self.n_iter,
                &"at least one pattern must be generated",
            ));
        }
        Grid::new(self.width, 1)?;
        Grid::new(1, self.height)?;
        Ok(())
    }
}

/// Drives pattern generation for a parsed command line
pub struct PatternGenerator {
    cli: Cli,
    palette: Palette,
    progress_manager: Option<ProgressManager>,
}

impl PatternGenerator {
    /// Create a generator for the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);
        let palette = cli.style.palette();

        Self {
            cli,
            palette,
            progress_manager,
        }
    }

    /// Palette patterns are drawn from
    pub const fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Generate every requested pattern and write it to stdout
    ///
    /// # Errors
    ///
    /// Returns an error if arguments are invalid, a pattern hits a
    /// contradiction, or stdout cannot be written.
    pub fn process(&mut self) -> Result<()> {
        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        self.process_into(&mut out)
    }

    /// Generate every requested pattern and write it to `out`
    ///
    /// Each pattern is followed by a blank line; with `--entropy` its entropy
    /// map follows the board.
    ///
    /// # Errors
    ///
    /// Returns an error if arguments are invalid, a pattern hits a
    /// contradiction, or `out` cannot be written.
    pub fn process_into(&mut self, out: &mut impl Write) -> Result<()> {
        self.cli.validate()?;

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(self.cli.n_iter);
        }

        let mut grids = Vec::with_capacity(self.cli.n_iter);
        for index in 0..self.cli.n_iter {
            grids.push(self.generate(index)?);
        }

        if let Some(ref pm) = self.progress_manager {
            pm.finish();
        }

        for grid in &grids {
            writeln!(out, "{}\n", render_board(grid)).with_operation("write board")?;
            if self.cli.entropy {
                writeln!(out, "{}\n", render_entropy_map(grid))
                    .with_operation("write entropy map")?;
            }
        }
        out.flush().with_operation("flush output")?;

        Ok(())
    }

    /// Generate the pattern at `index` with its own random source
    ///
    /// # Errors
    ///
    /// Returns an error if the grid cannot be built or a contradiction occurs.
    pub fn generate(&self, index: usize) -> Result<Grid> {
        match self.cli.seed_for(index) {
            Some(seed) => self.generate_with(index, RandomSelector::new(seed)),
            None => self.generate_with(index, RandomSelector::from_os_rng()),
        }
    }

    fn generate_with<R: Rng>(
        &self,
        index: usize,
        random_selector: RandomSelector<R>,
    ) -> Result<Grid> {
        let start_time = Instant::now();
        let grid = Grid::new(self.cli.width, self.cli.height)?;
        let mut executor = CollapseExecutor::new(grid, &self.palette, random_selector);
        let total_steps = executor.total_steps();

        if let Some(ref pm) = self.progress_manager {
            pm.start_pattern(index, total_steps);
        }

        for step in 1..=total_steps {
            executor.step()?;
            if let Some(ref pm) = self.progress_manager {
                pm.update_step(step, start_time.elapsed());
            }
        }

        let grid = executor.finish();

        if let Some(ref pm) = self.progress_manager {
            pm.complete_pattern(start_time.elapsed());
        }
        info!(
            pattern = index + 1,
            elapsed_ms = start_time.elapsed().as_millis(),
            "pattern generated"
        );

        Ok(grid)
    }
}
