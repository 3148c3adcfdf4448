//! Progress display for tile placement

use crate::io::configuration::{PROGRESS_BAR_WIDTH, PROGRESS_MIN_TILES};
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::path::Path;
use std::sync::LazyLock;

static PROGRESS_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    let template = format!(
        "{{prefix}} [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}} tiles"
    );
    ProgressStyle::default_bar()
        .template(&template)
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Tracks how many tiles have been placed into the output image
///
/// Small grids finish before a bar is worth drawing, so the bar stays hidden
/// below [`PROGRESS_MIN_TILES`].
pub struct ProgressManager {
    bar: ProgressBar,
    enabled: bool,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressManager {
    /// Create a progress manager that draws to stderr
    pub fn new() -> Self {
        Self {
            bar: ProgressBar::hidden(),
            enabled: true,
        }
    }

    /// Create a progress manager that never draws
    pub fn disabled() -> Self {
        Self {
            bar: ProgressBar::hidden(),
            enabled: false,
        }
    }

    /// Prepare the bar for an image with `tile_count` tiles
    pub fn start(&mut self, path: &Path, tile_count: usize) {
        if !self.enabled || tile_count < PROGRESS_MIN_TILES {
            return;
        }

        let bar = ProgressBar::with_draw_target(
            Some(tile_count as u64),
            ProgressDrawTarget::stderr(),
        );
        bar.set_style(PROGRESS_STYLE.clone());
        bar.set_prefix(
            path.file_name()
                .unwrap_or_default()
                .to_string_lossy()
                .to_string(),
        );
        self.bar = bar;
    }

    /// Report that `placed` of `total` tiles are in position
    pub fn update(&self, placed: usize, total: usize) {
        self.bar.set_length(total as u64);
        self.bar.set_position(placed as u64);
    }

    /// Clear the bar from the terminal, returning how many tiles were placed
    pub fn finish(&self) -> u64 {
        self.bar.finish_and_clear();
        self.bar.position()
    }
}
