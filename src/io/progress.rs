//! Batch progress reporting

use std::sync::LazyLock;

use indicatif::{ProgressBar, ProgressStyle};

static BATCH_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("[{elapsed_precise}] Sprites: [{bar:40.cyan/blue}] {pos}/{len} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Coordinates progress display for batch generation
///
/// Generation of a single sprite can take many rejected attempts, so the bar
/// advances per accepted sprite and carries the current label as its message.
pub struct ProgressManager {
    batch_bar: Option<ProgressBar>,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressManager {
    /// Create a progress manager with no visible bar yet
    pub const fn new() -> Self {
        Self { batch_bar: None }
    }

    /// Show the batch bar sized to the sprite count
    pub fn initialize(&mut self, sprite_count: usize) {
        let bar = ProgressBar::new(sprite_count as u64);
        bar.set_style(BATCH_STYLE.clone());
        self.batch_bar = Some(bar);
    }

    /// Announce the sprite currently being generated
    pub fn start_sprite(&self, label: &str) {
        if let Some(ref bar) = self.batch_bar {
            bar.set_message(label.to_string());
        }
    }

    /// Mark one sprite as completed
    pub fn complete_sprite(&self) {
        if let Some(ref bar) = self.batch_bar {
            bar.inc(1);
        }
    }

    /// Clear the display
    pub fn finish(&self) {
        if let Some(ref bar) = self.batch_bar {
            bar.finish_and_clear();
        }
    }
}
