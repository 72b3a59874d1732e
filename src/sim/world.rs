use crate::{
    carto::{grid::Grid, rng::Lcg},
    sim::{
        climate::Climate,
        events::{EventLog, StressField},
        geography::Geography,
    },
    vars::*,
};
use log::info;

/* # world cells */

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Terrain {
    Ocean,
    Desert,
    Plains,
    Mountain,
}

/// one cell of the aggregate world; terrain comes from the classifier,
/// stress from the tectonics process
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WorldCell {
    pub terrain: Terrain,
    pub tectonic_stress: f64,
}

impl StressField for Grid<WorldCell> {
    fn stress(&self, x: usize, y: usize) -> f64 {
        self[(x, y)].tectonic_stress
    }

    fn release(&mut self, x: usize, y: usize) {
        self[(x, y)].tectonic_stress = 0.0;
    }
}

/// minimal stand-in for the external biome classifier; just enough
/// terrain to feed the storm sweep and the demo binary
fn classify(geography: &Geography) -> Grid<WorldCell> {
    Grid::new(
        (0..geography.elevation.grid.len())
            .map(|j| {
                let terrain = if geography.water.grid[j] {
                    Terrain::Ocean
                } else if geography.desert.grid[j] {
                    Terrain::Desert
                } else if geography.elevation.grid[j] > MOUNTAIN_ELEVATION {
                    Terrain::Mountain
                } else {
                    Terrain::Plains
                };
                WorldCell {
                    terrain,
                    tectonic_stress: 0.0,
                }
            })
            .collect(),
        geography.elevation.width,
        geography.elevation.height,
    )
}

/* # world */

pub struct World {
    pub geography: Geography,
    pub climate: Climate,
    pub cells: Grid<WorldCell>,
    pub events: EventLog,
    pub rng: Lcg,
}

impl World {
    /// generate a world at the default size
    pub fn generate(seed: u32) -> Self {
        Self::generate_sized(seed, MAP_WIDTH, MAP_HEIGHT, EROSION_PASSES)
    }

    /// surface synthesis, a few erosion passes, desert classification and
    /// a still atmosphere; the rng is created here and threaded through
    /// everything that follows
    pub fn generate_sized(seed: u32, width: usize, height: usize, erosion_passes: usize) -> Self {
        info!("generating {}x{} world from seed {}", width, height, seed);
        let rng = Lcg::new(seed);
        let mut geography = Geography::generate(width, height, &rng);
        for _ in 0..erosion_passes {
            geography.erode();
        }
        geography.update_deserts();
        let cells = classify(&geography);
        Self {
            climate: Climate::initialise(width, height),
            cells,
            events: EventLog::new(),
            rng,
            geography,
        }
    }

    /// advance the world one tick: atmosphere, rivers seeded by the fresh
    /// rainfall, then the event sweeps
    pub fn step(&mut self) {
        self.climate.update(&self.geography);
        self.geography.update_rivers(&self.climate, &mut self.rng);
        let ocean = Grid::new(
            self.cells
                .grid
                .iter()
                .map(|cell| cell.terrain == Terrain::Ocean)
                .collect(),
            self.cells.width,
            self.cells.height,
        );
        self.events.update(&mut self.cells, &ocean, &mut self.rng);
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::vars::SEA_LEVEL;

    #[test]
    fn world_replays_from_seed() {
        let mut one = World::generate_sized(72, 24, 24, 2);
        let mut two = World::generate_sized(72, 24, 24, 2);
        for _ in 0..3 {
            one.step();
            two.step();
        }
        assert_eq!(one.geography, two.geography);
        assert_eq!(one.climate, two.climate);
        assert_eq!(one.cells, two.cells);
        assert_eq!(one.events, two.events);
        assert_eq!(one.rng, two.rng);
    }

    #[test]
    fn seeds_differ() {
        let one = World::generate_sized(72, 24, 24, 2);
        let two = World::generate_sized(73, 24, 24, 2);
        assert_ne!(one.geography.elevation, two.geography.elevation);
    }

    #[test]
    fn water_invariant_holds_through_ticks() {
        let mut world = World::generate_sized(72, 24, 24, 2);
        for _ in 0..3 {
            world.step();
            for j in 0..24 * 24 {
                assert_eq!(
                    world.geography.water.grid[j],
                    world.geography.elevation.grid[j] <= SEA_LEVEL
                );
            }
        }
    }

    #[test]
    fn rainfall_invariant_holds_through_ticks() {
        let mut world = World::generate_sized(72, 24, 24, 2);
        for _ in 0..3 {
            world.step();
            assert!(world.climate.rainfall.min() >= 0.0);
        }
    }

    #[test]
    fn event_pool_bounded_through_ticks() {
        let mut world = World::generate_sized(72, 24, 24, 2);
        for _ in 0..6 {
            for cell in &mut world.cells.grid {
                cell.tectonic_stress = 1.0e9;
            }
            world.step();
            assert!(world.events.count() <= crate::vars::EVENT_CAPACITY);
        }
    }

    #[test]
    fn classifier_marks_oceans() {
        let world = World::generate_sized(72, 24, 24, 2);
        for j in 0..24 * 24 {
            assert_eq!(
                world.cells.grid[j].terrain == Terrain::Ocean,
                world.geography.water.grid[j]
            );
        }
    }
}
