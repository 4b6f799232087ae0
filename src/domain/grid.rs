use super::Cell;
use rand::Rng;
use rayon::prelude::*;

/// Errors raised while constructing a grid.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum GridError {
    #[error("Grid dimensions must be positive and fit the coordinate range, got {width}x{height}")]
    InvalidDimensions { width: usize, height: usize },
}

/// Relative positions of the eight Moore neighbors.
const NEIGHBOR_OFFSETS: [(i32, i32); 8] = [
    (-1, -1), (0, -1), (1, -1),
    (-1, 0),           (1, 0),
    (-1, 1),  (0, 1),  (1, 1),
];

/// Grid owns the cellular automaton state.
///
/// Cells live in a row-major buffer of fixed size. A second buffer of the same
/// size receives each new generation, then the two are swapped, so a step never
/// reads a cell it has already written and never allocates.
///
/// The boundary is closed: positions outside `[0, width) x [0, height)` read as
/// dead and writes to them are dropped.
#[derive(Clone, Debug)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
    next: Vec<Cell>,
}

impl Grid {
    /// Create a new grid with all cells initially dead
    pub fn new(width: usize, height: usize) -> Result<Self, GridError> {
        let invalid = GridError::InvalidDimensions { width, height };
        if width == 0 || height == 0 || width > i32::MAX as usize || height > i32::MAX as usize {
            return Err(invalid);
        }
        let len = width.checked_mul(height).ok_or(invalid)?;

        Ok(Self {
            width,
            height,
            cells: vec![Cell::Dead; len],
            next: vec![Cell::Dead; len],
        })
    }

    /// Get grid dimensions
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// Convert signed coordinates to a buffer index, `None` when out of bounds
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        let x = usize::try_from(x).ok()?;
        let y = usize::try_from(y).ok()?;
        (x < self.width && y < self.height).then(|| y * self.width + x)
    }

    /// Cell at position, dead when out of bounds
    pub fn get(&self, x: i32, y: i32) -> Cell {
        self.index(x, y).map_or(Cell::Dead, |idx| self.cells[idx])
    }

    /// Whether the cell at position is alive. Out of bounds reads as dead.
    pub fn is_alive(&self, x: i32, y: i32) -> bool {
        self.get(x, y).is_alive()
    }

    /// Write a cell; out-of-bounds writes are dropped.
    /// Returns whether the write landed on the grid.
    pub(crate) fn set(&mut self, x: i32, y: i32, cell: Cell) -> bool {
        match self.index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Flip the cell at position; no-op when out of bounds
    pub fn toggle_cell(&mut self, x: i32, y: i32) {
        if let Some(idx) = self.index(x, y) {
            self.cells[idx] = self.cells[idx].toggle();
        }
    }

    /// Count live Moore neighbors, treating anything off the grid as dead
    pub fn count_live_neighbors(&self, x: i32, y: i32) -> u8 {
        NEIGHBOR_OFFSETS
            .iter()
            .filter(|&&(dx, dy)| self.is_alive(x.saturating_add(dx), y.saturating_add(dy)))
            .count() as u8
    }

    /// Advance one generation (serial)
    pub fn step(&mut self) {
        let (width, height) = (self.width, self.height);
        let current = &self.cells;

        self.next
            .iter_mut()
            .enumerate()
            .for_each(|(idx, slot)| {
                let (x, y) = (idx % width, idx / width);
                *slot = current[idx].evolve(live_neighbors(current, width, height, x, y));
            });

        std::mem::swap(&mut self.cells, &mut self.next);
    }

    /// Advance one generation with rows split across the rayon pool.
    /// Produces exactly the same result as [`Grid::step`].
    pub fn step_parallel(&mut self) {
        let (width, height) = (self.width, self.height);
        let current = &self.cells;

        self.next
            .par_chunks_mut(width)
            .enumerate()
            .for_each(|(y, row)| {
                for (x, slot) in row.iter_mut().enumerate() {
                    let idx = y * width + x;
                    *slot = current[idx].evolve(live_neighbors(current, width, height, x, y));
                }
            });

        std::mem::swap(&mut self.cells, &mut self.next);
    }

    /// Clear all cells to dead state
    pub fn clear(&mut self) {
        self.cells.iter_mut().for_each(|cell| *cell = Cell::Dead);
    }

    /// Fill the grid with coin flips from the thread-local RNG
    pub fn randomize(&mut self) {
        self.randomize_with(&mut rand::rng());
    }

    /// Fill the grid with coin flips drawn from `rng`
    pub fn randomize_with<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cells
            .iter_mut()
            .for_each(|cell| *cell = Cell::from(rng.random_bool(0.5)));
    }

    /// Count total alive cells
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }

    /// Iterate over the positions of live cells in row-major order
    pub fn live_cells(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        let width = self.width;
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_alive())
            .map(move |(idx, _)| ((idx % width) as i32, (idx / width) as i32))
    }
}

/// Neighbor count for an in-bounds position of a row-major buffer.
/// Fast path for `step`: no signed coordinates or bounds checks per neighbor,
/// must agree with `Grid::count_live_neighbors`.
fn live_neighbors(cells: &[Cell], width: usize, height: usize, x: usize, y: usize) -> u8 {
    let xs = x.saturating_sub(1)..=(x + 1).min(width - 1);
    let ys = y.saturating_sub(1)..=(y + 1).min(height - 1);

    ys.flat_map(|ny| xs.clone().map(move |nx| (nx, ny)))
        .filter(|&pos| pos != (x, y))
        .filter(|&(nx, ny)| cells[ny * width + nx].is_alive())
        .count() as u8
}
