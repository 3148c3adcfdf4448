//! Command-line interface for rearranging, scrambling and checking images

use crate::algorithm::ordering::{format_ordering, inverse, shuffled};
use crate::algorithm::rearrange::rearrange_with_progress;
use crate::algorithm::validation::is_valid;
use crate::io::configuration::{DEFAULT_SEED, OUTPUT_EXTENSION, OUTPUT_SUFFIX};
use crate::io::error::{RearrangeError, Result, invalid_parameter};
use crate::io::image::read_dimensions;
use crate::io::progress::ProgressManager;
use crate::spatial::grid::{TileGrid, TileSize};
use clap::Parser;
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(name = "retile")]
#[command(
    author,
    version,
    about = "Split an image into tiles and reassemble them in a given order"
)]
/// Command-line arguments for the tile rearrangement tool
// Independent mode flags read more clearly as booleans than as an enum
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Source image, in any format the codec supports
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Output PNG path (defaults to <input>_rearranged.png)
    #[arg(value_name = "OUTPUT")]
    pub output: Option<PathBuf>,

    /// Tile size as WIDTHxHEIGHT, or a single number for square tiles
    #[arg(short, long, value_name = "SIZE")]
    pub tile_size: TileSize,

    /// Comma separated source tile index for each destination cell
    #[arg(
        short,
        long,
        value_delimiter = ',',
        required_unless_present = "shuffle",
        conflicts_with = "shuffle"
    )]
    pub ordering: Option<Vec<usize>>,

    /// Generate a random ordering instead of supplying one
    #[arg(short, long)]
    pub shuffle: bool,

    /// Seed for --shuffle
    #[arg(long, default_value_t = DEFAULT_SEED, requires = "shuffle")]
    pub seed: u64,

    /// Apply the inverse of the ordering, undoing an earlier rearrangement
    #[arg(short, long)]
    pub inverse: bool,

    /// Only check whether the arguments are valid for the image
    #[arg(short, long)]
    pub check: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase log detail (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Output path, derived from the input path when not given
    pub fn output_path(&self) -> PathBuf {
        self.output
            .clone()
            .unwrap_or_else(|| Self::default_output_path(&self.input))
    }

    /// `<stem>_rearranged.png` next to the input file
    pub fn default_output_path(input_path: &Path) -> PathBuf {
        let stem = input_path.file_stem().unwrap_or_default();
        let output_name = format!(
            "{}{}.{}",
            stem.to_string_lossy(),
            OUTPUT_SUFFIX,
            OUTPUT_EXTENSION
        );

        if let Some(parent) = input_path.parent() {
            parent.join(output_name)
        } else {
            PathBuf::from(output_name)
        }
    }
}

/// What a run produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Arguments were checked without writing anything
    Checked {
        /// Whether the arguments are valid for the image
        valid: bool,
    },
    /// An output image was written
    Written {
        /// Path of the output image
        path: PathBuf,
        /// Ordering that was applied
        ordering: Vec<usize>,
    },
}

/// Executes one CLI invocation
pub struct Runner {
    cli: Cli,
    progress_manager: ProgressManager,
}

impl Runner {
    /// Create a runner for the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = if cli.should_show_progress() {
            ProgressManager::new()
        } else {
            ProgressManager::disabled()
        };

        Self {
            cli,
            progress_manager,
        }
    }

    /// Arguments this runner was created with
    pub const fn cli(&self) -> &Cli {
        &self.cli
    }

    /// Carry out the invocation
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The input image cannot be read
    /// - No ordering was supplied, or `--inverse` was given an ordering that
    ///   is not a permutation
    /// - The tile size or ordering are not valid for the image
    /// - The output image cannot be written
    ///
    /// With `--check`, only an unreadable input is an error; every problem
    /// with the tile size or ordering is reported as [`Outcome::Checked`].
    pub fn run(&mut self) -> Result<Outcome> {
        if self.cli.check {
            return self.check();
        }

        let ordering = self.resolve_ordering()?;

        let output_path = self.cli.output_path();
        self.progress_manager.start(&self.cli.input, ordering.len());

        let progress = &self.progress_manager;
        let result = rearrange_with_progress(
            &self.cli.input,
            self.cli.tile_size,
            &ordering,
            &output_path,
            |placed, total| progress.update(placed, total),
        );
        let placed = self.progress_manager.finish();
        result?;
        tracing::debug!(placed, "Placed tiles");

        Ok(Outcome::Written {
            path: output_path,
            ordering,
        })
    }

    fn check(&self) -> Result<Outcome> {
        let image_size = read_dimensions(&self.cli.input)?;
        let valid = match self.resolve_ordering() {
            Ok(ordering) => is_valid(image_size, self.cli.tile_size, &ordering),
            Err(RearrangeError::InvalidArguments | RearrangeError::InvalidParameter { .. }) => {
                false
            }
            Err(error) => return Err(error),
        };

        tracing::info!(valid, "Checked arguments");
        Ok(Outcome::Checked { valid })
    }

    fn resolve_ordering(&self) -> Result<Vec<usize>> {
        let ordering = if self.cli.shuffle {
            let image_size = read_dimensions(&self.cli.input)?;
            let grid = TileGrid::new(image_size, self.cli.tile_size)
                .ok_or(RearrangeError::InvalidArguments)?;
            shuffled(grid.tile_count(), self.cli.seed)
        } else {
            self.cli.ordering.clone().ok_or_else(|| {
                invalid_parameter("ordering", &"", &"an ordering or --shuffle is required")
            })?
        };

        if self.cli.inverse {
            inverse(&ordering).ok_or_else(|| {
                invalid_parameter(
                    "ordering",
                    &format_ordering(&ordering),
                    &"only a permutation can be inverted",
                )
            })
        } else {
            Ok(ordering)
        }
    }
}

/// Print what a run produced
///
/// Shuffled orderings are printed so the scramble can be undone later with
/// `--ordering <list> --inverse`.
// Allow print for the tool's primary output
#[allow(clippy::print_stdout)]
pub fn report(cli: &Cli, outcome: &Outcome) {
    match outcome {
        Outcome::Checked { valid: true } => println!("valid"),
        Outcome::Checked { valid: false } => println!("invalid"),
        Outcome::Written { path, ordering } => {
            if cli.shuffle {
                println!("{}", format_ordering(ordering));
            }
            if !cli.quiet {
                println!("{}", path.display());
            }
        }
    }
}
