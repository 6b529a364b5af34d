//! Sprite rasterization and PNG export with transparency handling

use std::path::Path;

use image::{ImageBuffer, Rgba, RgbaImage};

use crate::io::configuration::SHEET_BACKGROUND;
use crate::io::error::{GenerationError, Result};
use crate::io::palette::{SpritePalette, lighten};
use crate::spatial::Grid;
use crate::spatial::cell::CellClass;

const fn opaque(color: [u8; 3]) -> Rgba<u8> {
    let [r, g, b] = color;
    Rgba([r, g, b, 255])
}

/// Rasterize one sprite at one pixel per cell
///
/// Border cells draw in the border color; Filled and Secondary cells in the
/// hull and accent colors lightened by their depth. Empty and Tertiary cells
/// stay transparent, which is what gives noisy interiors their pinholes.
pub fn render_sprite(grid: &Grid, palette: &SpritePalette) -> RgbaImage {
    let mut img = ImageBuffer::new(grid.cols() as u32, grid.rows() as u32);
    for (position, cell) in grid.iter() {
        let color = match cell.class {
            CellClass::Border => opaque(palette.border),
            CellClass::Filled => opaque(lighten(palette.hull, cell.depth)),
            CellClass::Secondary => opaque(lighten(palette.accent, cell.depth)),
            CellClass::Empty | CellClass::Tertiary => Rgba([0, 0, 0, 0]),
        };
        img.put_pixel(position.col as u32, position.row as u32, color);
    }
    img
}

/// Compose sprites onto a single opaque sheet with flow layout
///
/// Sprites place left to right separated by `margin` pixels, wrapping to a
/// new row at the right edge. A sprite that no longer fits vertically is
/// skipped rather than clipped.
pub fn render_sheet(
    grids: &[Grid],
    palette: &SpritePalette,
    width: u32,
    height: u32,
    margin: u32,
) -> RgbaImage {
    let mut sheet = ImageBuffer::from_pixel(width, height, opaque(SHEET_BACKGROUND));
    let mut cursor_x = margin;
    let mut cursor_y = margin;
    let mut row_height = 0u32;

    for grid in grids {
        let sprite = render_sprite(grid, palette);

        if cursor_x > margin && cursor_x + sprite.width() + margin > width {
            cursor_x = margin;
            cursor_y += row_height + margin;
            row_height = 0;
        }
        if cursor_y + sprite.height() + margin > height {
            continue;
        }

        for (x, y, pixel) in sprite.enumerate_pixels() {
            let Rgba([_, _, _, alpha]) = *pixel;
            if alpha == 0 {
                continue;
            }
            let target_x = cursor_x + x;
            let target_y = cursor_y + y;
            if target_x < width && target_y < height {
                sheet.put_pixel(target_x, target_y, *pixel);
            }
        }

        cursor_x += sprite.width() + margin;
        row_height = row_height.max(sprite.height());
    }

    sheet
}

/// Export one sprite as a PNG with a transparent background
///
/// # Errors
///
/// Returns [`GenerationError::FileSystem`] when the parent directory cannot
/// be created and [`GenerationError::ImageExport`] when the save fails.
pub fn export_sprite_png(grid: &Grid, palette: &SpritePalette, path: &Path) -> Result<()> {
    save_png(&render_sprite(grid, palette), path)
}

/// Export a composed sheet as a PNG
///
/// # Errors
///
/// Returns [`GenerationError::FileSystem`] when the parent directory cannot
/// be created and [`GenerationError::ImageExport`] when the save fails.
pub fn export_sheet_png(
    grids: &[Grid],
    palette: &SpritePalette,
    width: u32,
    height: u32,
    margin: u32,
    path: &Path,
) -> Result<()> {
    save_png(&render_sheet(grids, palette, width, height, margin), path)
}

fn save_png(img: &RgbaImage, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| GenerationError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    img.save(path).map_err(|e| GenerationError::ImageExport {
        path: path.to_path_buf(),
        source: e,
    })
}
