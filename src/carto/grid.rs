use log::error;
use num_traits::identities::Zero;
use ord_subset::OrdSubsetIterExt;
use std::ops::{Index, IndexMut};

/* # grids */

/// offsets of the 8-neighbourhood in row-major scan order
pub const AMBIT: [(i32, i32); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// an owned scalar field over a fixed rectangle, row-major
#[derive(Clone, Debug, PartialEq)]
pub struct Grid<T> {
    pub grid: Vec<T>,
    pub width: usize,
    pub height: usize,
}

impl<T> Grid<T> {
    pub fn new(grid: Vec<T>, width: usize, height: usize) -> Self {
        if grid.len() != width * height {
            error!("cannot form a {}x{} grid from given vector", width, height);
            panic!("cannot form a {}x{} grid from given vector", width, height);
        }
        Self {
            grid,
            width,
            height,
        }
    }

    pub fn unravel(&self, x: usize, y: usize) -> usize {
        y * self.width + x
    }

    /// coordinates of a flat index
    pub fn enravel(&self, jndex: usize) -> (usize, usize) {
        (jndex % self.width, jndex / self.width)
    }

    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as usize) < self.width && (y as usize) < self.height
    }

    /// whether a cell lies strictly inside the border ring
    pub fn is_interior(&self, x: usize, y: usize) -> bool {
        x > 0 && y > 0 && x < self.width - 1 && y < self.height - 1
    }

    /// in-bounds 8-neighbours in scan order
    pub fn ambit(&self, x: usize, y: usize) -> impl Iterator<Item = (usize, usize)> + '_ {
        AMBIT.iter().filter_map(move |&(dx, dy)| {
            let (nx, ny) = (x as i32 + dx, y as i32 + dy);
            self.contains(nx, ny)
                .then(|| (nx as usize, ny as usize))
        })
    }

    pub fn from_fn<F>(width: usize, height: usize, mut function: F) -> Self
    where
        F: FnMut(usize, usize) -> T,
    {
        Self {
            grid: (0..width * height)
                .map(|j| function(j % width, j / width))
                .collect(),
            width,
            height,
        }
    }
}

impl<T: Clone> Grid<T> {
    /// create a new grid filled with copies of a single value
    pub fn filled(value: T, width: usize, height: usize) -> Self {
        Self {
            grid: vec![value; width * height],
            width,
            height,
        }
    }

    pub fn fill(&mut self, value: T) {
        self.grid.fill(value);
    }
}

impl<T: Zero + Clone> Grid<T> {
    /// create a new grid filled with zeros
    pub fn zeros(width: usize, height: usize) -> Self {
        Self::filled(T::zero(), width, height)
    }
}

impl<T> Index<(usize, usize)> for Grid<T> {
    type Output = T;

    fn index(&self, (x, y): (usize, usize)) -> &T {
        &self.grid[y * self.width + x]
    }
}

impl<T> IndexMut<(usize, usize)> for Grid<T> {
    fn index_mut(&mut self, (x, y): (usize, usize)) -> &mut T {
        &mut self.grid[y * self.width + x]
    }
}

/* ## statistics */

impl Grid<f64> {
    pub fn min(&self) -> f64 {
        *self
            .grid
            .iter()
            .ord_subset_min()
            .expect("grid is never empty")
    }

    pub fn max(&self) -> f64 {
        *self
            .grid
            .iter()
            .ord_subset_max()
            .expect("grid is never empty")
    }

    pub fn mean(&self) -> f64 {
        self.grid.iter().sum::<f64>() / self.grid.len() as f64
    }

    /// population variance, used to watch erosion smooth the terrain
    pub fn variance(&self) -> f64 {
        let mean = self.mean();
        self.grid.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / self.grid.len() as f64
    }
}
