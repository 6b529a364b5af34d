//! Command-line interface for batch sprite generation

use clap::Parser;
use std::path::PathBuf;

use crate::generator::{ShapeFamily, SizeClass, SpriteSynthesizer, SynthesisConfig};
use crate::io::ascii::grid_to_ascii;
use crate::io::configuration::{
    DEFAULT_ACCENT_COLOR, DEFAULT_BORDER_COLOR, DEFAULT_COUNT, DEFAULT_HULL_COLOR,
    DEFAULT_MAX_ATTEMPTS, DEFAULT_SEED, SHEET_PADDING,
};
use crate::io::error::{Result, invalid_parameter};
use crate::io::image::{export_sheet_png, export_sprite_png};
use crate::io::palette::SpritePalette;
use crate::io::progress::ProgressManager;
use crate::spatial::Grid;

#[derive(Parser)]
#[command(name = "spritewalk")]
#[command(
    author,
    version,
    about = "Generate pixel-art sprite silhouettes with seeded random walks"
)]
/// Command-line arguments for the sprite generation tool
pub struct Cli {
    /// Shape family to generate: vessel, asteroid, station, console or tile
    #[arg(value_name = "FAMILY")]
    pub family: String,

    /// Number of sprites to generate
    #[arg(short, long, default_value_t = DEFAULT_COUNT)]
    pub count: usize,

    /// Size class: small, medium, large or random
    #[arg(short, long, default_value = "medium")]
    pub size: String,

    /// Random seed for reproducible generation
    #[arg(long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Maximum generation attempts per sprite
    #[arg(long, default_value_t = DEFAULT_MAX_ATTEMPTS)]
    pub max_attempts: usize,

    /// Output path; with --sheet a single PNG, otherwise one PNG per sprite
    #[arg(short, long, default_value = "sprites.png")]
    pub out: PathBuf,

    /// Compose all sprites onto one sheet of the given pixel size
    #[arg(long, value_name = "WxH")]
    pub sheet: Option<String>,

    /// Pixel gap between sprites on a sheet
    #[arg(long, default_value_t = SHEET_PADDING)]
    pub margin: u32,

    /// Print sprites as ASCII instead of writing PNGs
    #[arg(long)]
    pub ascii: bool,

    /// Hull color for Filled cells
    #[arg(long, default_value = DEFAULT_HULL_COLOR)]
    pub hull_color: String,

    /// Accent color for Secondary cells
    #[arg(long, default_value = DEFAULT_ACCENT_COLOR)]
    pub accent_color: String,

    /// Border color
    #[arg(long, default_value = DEFAULT_BORDER_COLOR)]
    pub border_color: String,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }
}

/// Parse a `WxH` sheet dimension spec
///
/// # Errors
///
/// Returns [`crate::GenerationError::InvalidParameter`] unless both
/// dimensions are positive integers separated by `x`.
pub fn parse_sheet_dims(spec: &str) -> Result<(u32, u32)> {
    spec.split_once(['x', 'X'])
        .and_then(|(w, h)| {
            let width = w.trim().parse::<u32>().ok()?;
            let height = h.trim().parse::<u32>().ok()?;
            (width > 0 && height > 0).then_some((width, height))
        })
        .ok_or_else(|| {
            invalid_parameter(
                "sheet",
                &spec,
                &"expected WxH with positive integer dimensions",
            )
        })
}

/// Orchestrates batch sprite generation with progress tracking
pub struct BatchGenerator {
    cli: Cli,
    progress: Option<ProgressManager>,
}

impl BatchGenerator {
    /// Create a new batch generator from parsed CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress = cli.should_show_progress().then(ProgressManager::new);

        Self { cli, progress }
    }

    /// Generate and output sprites according to CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error when arguments fail validation, generation exhausts
    /// its attempt bound, or output cannot be written.
    pub fn process(&mut self) -> Result<()> {
        let family: ShapeFamily = self.cli.family.parse()?;
        let size: SizeClass = self.cli.size.parse()?;
        let palette = SpritePalette::from_hex(
            &self.cli.hull_color,
            &self.cli.accent_color,
            &self.cli.border_color,
        )?;
        let sheet_dims = self.cli.sheet.as_deref().map(parse_sheet_dims).transpose()?;

        let mut synthesizer = SpriteSynthesizer::with_config(
            self.cli.seed,
            SynthesisConfig {
                max_attempts: self.cli.max_attempts,
            },
        );

        if let Some(ref mut pm) = self.progress {
            pm.initialize(self.cli.count);
        }

        let mut grids = Vec::with_capacity(self.cli.count);
        for index in 0..self.cli.count {
            if let Some(ref pm) = self.progress {
                pm.start_sprite(&format!("{family} {}/{}", index + 1, self.cli.count));
            }
            grids.push(synthesizer.generate(family, size)?);
            if let Some(ref pm) = self.progress {
                pm.complete_sprite();
            }
        }

        if let Some(ref pm) = self.progress {
            pm.finish();
        }

        self.write_output(&grids, &palette, sheet_dims)
    }

    // Allow print for the ASCII output mode
    #[allow(clippy::print_stdout)]
    fn write_output(
        &self,
        grids: &[Grid],
        palette: &SpritePalette,
        sheet_dims: Option<(u32, u32)>,
    ) -> Result<()> {
        if self.cli.ascii {
            // Allow print for user feedback on conflicting flags
            #[allow(clippy::print_stderr)]
            if sheet_dims.is_some() && !self.cli.quiet {
                eprintln!("Ignoring --sheet: ascii mode prints to stdout");
            }
            for grid in grids {
                println!("{}", grid_to_ascii(grid));
            }
            return Ok(());
        }

        if let Some((width, height)) = sheet_dims {
            return export_sheet_png(
                grids,
                palette,
                width,
                height,
                self.cli.margin,
                &self.cli.out,
            );
        }

        if let [grid] = grids {
            return export_sprite_png(grid, palette, &self.cli.out);
        }
        for (index, grid) in grids.iter().enumerate() {
            export_sprite_png(grid, palette, &self.numbered_output_path(index + 1))?;
        }
        Ok(())
    }

    fn numbered_output_path(&self, number: usize) -> PathBuf {
        let stem = self.cli.out.file_stem().unwrap_or_default();
        let extension = self.cli.out.extension().unwrap_or_default();
        let file_name = format!(
            "{}_{number:03}.{}",
            stem.to_string_lossy(),
            extension.to_string_lossy()
        );
        self.cli.out.with_file_name(file_name)
    }
}
