//! Classify an already-decoded greyscale pixel buffer into the cell grid
//! [`crate::marching_squares`] consumes. Decoding the image file itself
//! (PNG or otherwise) is out of scope for this crate.

use crate::marching_squares::{Cell, Grid};

const SOLID_THRESHOLD: u8 = 16;
const FREE_THRESHOLD: u8 = 240;

/// Classify a row-major `width * height` greyscale buffer into a [`Grid`].
///
/// Luminance `< 16` becomes [`Cell::Solid`]; `>= 240` becomes [`Cell::Free`];
/// anything in between becomes [`Cell::Destroyable`]. The outer one-pixel
/// frame is always [`Cell::Solid`], regardless of its luminance, so marching
/// squares never has to special-case the grid boundary. Isolated `Free`
/// cells — those whose four orthogonal neighbours are all non-`Free` — are
/// then coerced to `Solid`, since a single free pixel surrounded by occupied
/// ones cannot usefully separate into its own region.
///
/// Panics if `pixels.len() != width * height`.
pub fn grid_from_luminance(width: usize, height: usize, pixels: &[u8]) -> Grid {
	assert_eq!(pixels.len(), width * height, "pixel buffer size must match dimensions");

	let mut cells = Vec::with_capacity(width * height);
	for y in 0..height {
		for x in 0..width {
			let on_border = x == 0 || y == 0 || x == width - 1 || y == height - 1;
			let cell = if on_border {
				Cell::Solid
			} else {
				classify_luminance(pixels[y * width + x])
			};
			cells.push(cell);
		}
	}

	fill_isolated_free_cells(&mut cells, width, height);
	log::debug!("image: classified a {}x{} grid", width, height);
	Grid::new(width, height, cells)
}

fn classify_luminance(l: u8) -> Cell {
	if l < SOLID_THRESHOLD {
		Cell::Solid
	} else if l >= FREE_THRESHOLD {
		Cell::Free
	} else {
		Cell::Destroyable
	}
}

fn fill_isolated_free_cells(cells: &mut [Cell], width: usize, height: usize) {
	let is_free = |cells: &[Cell], x: usize, y: usize| cells[y * width + x] == Cell::Free;
	let mut to_fill = Vec::new();
	for y in 1..height.saturating_sub(1) {
		for x in 1..width.saturating_sub(1) {
			if is_free(cells, x, y)
				&& !is_free(cells, x - 1, y)
				&& !is_free(cells, x + 1, y)
				&& !is_free(cells, x, y - 1)
				&& !is_free(cells, x, y + 1)
			{
				to_fill.push(y * width + x);
			}
		}
	}
	for idx in to_fill {
		cells[idx] = Cell::Solid;
	}
}
