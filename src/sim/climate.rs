use crate::{carto::grid::Grid, sim::geography::Geography, vars::*};
use itertools::iproduct;
use log::trace;
use rayon::prelude::*;

/* # climate */

#[derive(Clone, Debug, PartialEq)]
pub struct Climate {
    pub temperature: Grid<f64>,
    pub pressure: Grid<f64>,
    pub wind_x: Grid<f64>,
    pub wind_y: Grid<f64>,
    pub rainfall: Grid<f64>,
}

impl Climate {
    /// a still atmosphere at reference pressure
    pub fn initialise(width: usize, height: usize) -> Self {
        Self {
            temperature: Grid::zeros(width, height),
            pressure: Grid::filled(SEA_PRESSURE, width, height),
            wind_x: Grid::zeros(width, height),
            wind_y: Grid::zeros(width, height),
            rainfall: Grid::zeros(width, height),
        }
    }

    /// advance the atmosphere one tick from the current surface; the three
    /// passes are data dependent and must run in this order
    pub fn update(&mut self, geography: &Geography) {
        self.update_temperature_pressure(geography);
        self.update_wind();
        self.update_rainfall(geography);
    }

    /// latitude and lapse set the temperature, pressure follows from it
    fn update_temperature_pressure(&mut self, geography: &Geography) {
        trace!("updating temperature and pressure");
        let (width, height) = (self.temperature.width, self.temperature.height);
        let (temperature, pressure): (Vec<f64>, Vec<f64>) = (0..width * height)
            .into_par_iter()
            .map(|j| {
                let row = (j / width) as f64;
                let latitude = (row / (height - 1) as f64 - 0.5).abs() * 2.0;
                let temperature = (1.0 - latitude) * MAX_TEMPERATURE
                    - LAPSE_RATE * geography.elevation.grid[j] / 1000.0;
                (temperature, SEA_PRESSURE - temperature * PRESSURE_FACTOR)
            })
            .unzip();
        self.temperature.grid = temperature;
        self.pressure.grid = pressure;
    }

    /// wind blows from high to low pressure; the border ring keeps its
    /// previous value since the centred difference is undefined there
    fn update_wind(&mut self) {
        trace!("updating wind");
        let (width, height) = (self.pressure.width, self.pressure.height);
        for (y, x) in iproduct!(1..height - 1, 1..width - 1) {
            let gradient_x = (self.pressure[(x + 1, y)] - self.pressure[(x - 1, y)]) * 0.5;
            let gradient_y = (self.pressure[(x, y + 1)] - self.pressure[(x, y - 1)]) * 0.5;
            self.wind_x[(x, y)] = -WIND_FACTOR * gradient_x;
            self.wind_y[(x, y)] = -WIND_FACTOR * gradient_y;
        }
    }

    /// rainfall is evaporation less what the wind carries away, floored
    /// at zero
    fn update_rainfall(&mut self, geography: &Geography) {
        trace!("updating rainfall");
        let (temperature, wind_x, wind_y) = (&self.temperature, &self.wind_x, &self.wind_y);
        self.rainfall.grid = (0..temperature.grid.len())
            .into_par_iter()
            .map(|j| {
                let base = if geography.water.grid[j] {
                    EVAPORATION_WATER
                } else {
                    EVAPORATION_LAND
                };
                let evaporation = base * temperature.grid[j] / MAX_TEMPERATURE;
                let condensation =
                    CONDENSATION_FACTOR * wind_x.grid[j].hypot(wind_y.grid[j]);
                (evaporation - condensation).max(0.0)
            })
            .collect();
    }
}
