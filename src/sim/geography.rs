use crate::{
    carto::{grid::Grid, rng::Lcg},
    sim::climate::Climate,
    vars::*,
};
use log::trace;
use rayon::prelude::*;

/* # geography */

#[derive(Clone, Debug, PartialEq)]
pub struct Geography {
    pub elevation: Grid<f64>,
    pub water: Grid<bool>,
    pub desert: Grid<bool>,
    pub river_volume: Grid<f64>,
}

/// elevation from four octaves of value noise; the amplitude series is
/// deliberately not renormalised, so peaks overshoot the nominal scale
pub fn elevation_at(x: usize, y: usize, rng: &Lcg) -> f64 {
    let mut sum = 0.0;
    for octave in 0..GEO_DETAIL {
        let frequency = GEO_FREQ * 2f64.powi(octave);
        let amplitude = GEO_AMP.powi(octave);
        sum += amplitude
            * (2.0 * rng.noise2d(x as f64 * frequency, y as f64 * frequency) - 1.0);
    }
    sum * MAX_ELEVATION
}

fn water_mask(elevation: &Grid<f64>) -> Grid<bool> {
    Grid::new(
        elevation.grid.iter().map(|&e| e <= SEA_LEVEL).collect(),
        elevation.width,
        elevation.height,
    )
}

impl Geography {
    /// synthesise a fresh surface; noise only reads the rng word, so the
    /// cells can be computed in parallel without touching the stream
    pub fn generate(width: usize, height: usize, rng: &Lcg) -> Self {
        trace!("synthesising elevation model");
        let elevation = Grid::new(
            (0..width * height)
                .into_par_iter()
                .map(|j| elevation_at(j % width, j / width, rng))
                .collect::<Vec<f64>>(),
            width,
            height,
        );
        let water = water_mask(&elevation);
        Self {
            elevation,
            water,
            desert: Grid::filled(false, width, height),
            river_volume: Grid::zeros(width, height),
        }
    }

    /// one smoothing pass: relax every interior cell towards the mean of
    /// its eight neighbours; all reads go to a snapshot of the surface,
    /// which keeps the pass isotropic and order independent
    pub fn erode(&mut self) {
        trace!("eroding surface");
        let snapshot = self.elevation.clone();
        self.elevation.grid = (0..snapshot.grid.len())
            .into_par_iter()
            .map(|j| {
                let (x, y) = snapshot.enravel(j);
                let here = snapshot.grid[j];
                if snapshot.is_interior(x, y) {
                    let mean = snapshot
                        .ambit(x, y)
                        .map(|neighbour| snapshot[neighbour])
                        .sum::<f64>()
                        / 8.0;
                    here + EROSION_RATE * (mean - here)
                } else {
                    here
                }
            })
            .collect();
        self.water = water_mask(&self.elevation);
    }

    /// deserts are dry lowlands; deliberately blind to the rainfall field
    pub fn update_deserts(&mut self) {
        trace!("classifying deserts");
        for j in 0..self.desert.grid.len() {
            self.desert.grid[j] =
                !self.water.grid[j] && self.elevation.grid[j] < DESERT_ELEVATION;
        }
    }

    /// trace rivers by walking rain droplets downhill; volumes are rebuilt
    /// from zero on every pass, and every droplet draws its spawn point
    /// from the threaded rng
    pub fn update_rivers(&mut self, climate: &Climate, rng: &mut Lcg) {
        trace!("tracing rivers");
        self.river_volume.fill(0.0);
        let (width, height) = (self.elevation.width, self.elevation.height);
        for _ in 0..DROPLET_FACTOR * width * height {
            let x = (rng.next_f64() * width as f64) as usize;
            let y = (rng.next_f64() * height as f64) as usize;
            if climate.rainfall[(x, y)] < DROPLET_RAIN_GATE {
                continue;
            }
            self.trace_droplet(x, y);
        }
    }

    /// each step strictly descends, so the walk cannot cycle
    fn trace_droplet(&mut self, mut x: usize, mut y: usize) {
        loop {
            self.river_volume[(x, y)] += 1.0;
            if self.water[(x, y)] {
                break;
            }
            let here = self.elevation[(x, y)];
            // first strictly lower neighbour in scan order wins
            match self
                .elevation
                .ambit(x, y)
                .find(|&neighbour| self.elevation[neighbour] < here)
            {
                Some((nx, ny)) => {
                    x = nx;
                    y = ny;
                }
                None => break, // pit
            }
        }
    }
}
