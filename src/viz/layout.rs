//! Square-grid layout over a fixed canvas.
//!
//! Packs `n` blocks into the canvas as equal squares, maximizing the square
//! size. A single vertical column is preferred when its squares still meet
//! the minimum cell size; otherwise every column count is tried and the
//! largest resulting cell wins.

/// Fixed canvas width for the rendered image.
pub const CANVAS_WIDTH: u32 = 400;
/// Fixed canvas height for the rendered image.
pub const CANVAS_HEIGHT: u32 = 800;

/// Minimum acceptable square size for the single-column layout.
///
/// The default of 1 matches the reference rendering; raising it forces the
/// grid search earlier for inputs with many blocks.
pub const MIN_VERTICAL_CELL: u32 = 1;

/// Grid geometry for one rendering pass: column/row arrangement, cell size
/// in pixels and margins that center the grid on the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridGeometry {
    pub cols: u32,
    pub rows: u32,
    pub cell_size: u32,
    pub left_margin: u32,
    pub top_margin: u32,
}

/// Compute the grid arrangement for `n` blocks on a `width` x `height` canvas.
///
/// For `n == 0` the geometry is degenerate (zero columns, rows and cell size)
/// and the renderer draws nothing. For `n > 0`:
/// - if `n` blocks stacked in one column yield squares of at least `min_cell`,
///   that vertical layout is used;
/// - otherwise all column counts `1..=n` are searched and the first strictly
///   largest cell size wins.
#[must_use]
pub fn compute_layout(n: usize, width: u32, height: u32, min_cell: u32) -> GridGeometry {
    if n == 0 {
        return GridGeometry {
            cols: 0,
            rows: 0,
            cell_size: 0,
            left_margin: width / 2,
            top_margin: height / 2,
        };
    }

    let vertical_cell = f64::from(width).min(f64::from(height) / n as f64) as u32;

    let (cols, rows, cell_size) = if vertical_cell >= min_cell {
        (1, n as u32, vertical_cell)
    } else {
        let mut best = (1u32, 1u32, 0u32);
        for cols in 1..=n {
            let rows = n.div_ceil(cols);
            let cell = (f64::from(width) / cols as f64)
                .min(f64::from(height) / rows as f64) as u32;
            if cell > best.2 {
                best = (cols as u32, rows as u32, cell);
            }
        }
        best
    };

    GridGeometry {
        cols,
        rows,
        cell_size,
        left_margin: (width - cols * cell_size) / 2,
        top_margin: (height - rows * cell_size) / 2,
    }
}
