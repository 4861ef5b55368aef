//! Raster heat-grid rendering.
//!
//! Draws one filled square per block on a fixed white canvas, using the grid
//! geometry from [`crate::viz::layout`], and persists the canvas with the
//! `image` crate. The whole capability sits behind the `raster` feature so a
//! text-only build stays free of image dependencies; a build without it
//! reports [`RasterError::BackendUnavailable`] instead of failing.

use std::path::Path;

use thiserror::Error;

use crate::util::color::Rgb;

#[cfg(feature = "raster")]
use crate::viz::layout::{compute_layout, GridGeometry, CANVAS_HEIGHT, CANVAS_WIDTH};

/// Failures of the image output path. All of them are recoverable: the text
/// output already written is unaffected.
#[derive(Debug, Error)]
pub enum RasterError {
    /// The binary was built without the `raster` feature.
    #[error("raster support is not compiled in (rebuild with the `raster` feature)")]
    BackendUnavailable,
    /// The canvas could not be encoded or written to disk.
    #[cfg(feature = "raster")]
    #[error("failed to write image: {0}")]
    Write(#[from] image::ImageError),
}

/// Image-rendering capability, selected once at startup and passed to the
/// driver explicitly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RasterBackend {
    Available,
    Unavailable,
}

impl RasterBackend {
    /// Pick the backend this build supports.
    #[must_use]
    pub fn detect() -> Self {
        if cfg!(feature = "raster") {
            Self::Available
        } else {
            Self::Unavailable
        }
    }

    /// Lay out `colors` on the fixed canvas, render the grid and save it to
    /// `path`. The image format follows the path extension.
    ///
    /// # Errors
    /// [`RasterError::BackendUnavailable`] when raster support is compiled
    /// out; [`RasterError::Write`] when encoding or writing fails.
    #[cfg(feature = "raster")]
    pub fn save_grid(self, colors: &[Rgb], min_cell: u32, path: &Path) -> Result<(), RasterError> {
        match self {
            Self::Available => {
                let geometry =
                    compute_layout(colors.len(), CANVAS_WIDTH, CANVAS_HEIGHT, min_cell);
                let canvas = render_grid(colors, geometry);
                canvas.save(path)?;
                Ok(())
            }
            Self::Unavailable => Err(RasterError::BackendUnavailable),
        }
    }

    /// Text-only build: always reports the missing capability.
    ///
    /// # Errors
    /// Always [`RasterError::BackendUnavailable`].
    #[cfg(not(feature = "raster"))]
    pub fn save_grid(
        self,
        _colors: &[Rgb],
        _min_cell: u32,
        _path: &Path,
    ) -> Result<(), RasterError> {
        Err(RasterError::BackendUnavailable)
    }
}

/// Render the color sequence as a centered grid of squares on a white canvas.
///
/// Block `i` lands at row `i / cols`, column `i % cols`. Each square has side
/// `cell_size - 1`, leaving a one-pixel gridline between neighbors. A
/// degenerate geometry (no blocks, or cells too small to see) yields the bare
/// white canvas.
#[cfg(feature = "raster")]
#[must_use]
pub fn render_grid(colors: &[Rgb], geometry: GridGeometry) -> image::RgbImage {
    let white = image::Rgb([255u8, 255, 255]);
    let mut canvas = image::RgbImage::from_pixel(CANVAS_WIDTH, CANVAS_HEIGHT, white);

    if geometry.cols == 0 || geometry.cell_size == 0 {
        return canvas;
    }

    let side = geometry.cell_size - 1;
    for (index, color) in colors.iter().enumerate() {
        let row = index as u32 / geometry.cols;
        let col = index as u32 % geometry.cols;
        let x0 = geometry.left_margin + col * geometry.cell_size;
        let y0 = geometry.top_margin + row * geometry.cell_size;
        let pixel = image::Rgb([color.r, color.g, color.b]);

        for y in y0..y0 + side {
            for x in x0..x0 + side {
                canvas.put_pixel(x, y, pixel);
            }
        }
    }

    canvas
}
