/* # carto */

pub const MAP_WIDTH: usize = 256; // default grid width
pub const MAP_HEIGHT: usize = 256; // default grid height

/* # geography */

pub const SEA_LEVEL: f64 = 0.0; // cells at or below this elevation are water
pub const MAX_ELEVATION: f64 = 4000.0; // scale for the unnormalised noise sum
pub const GEO_DETAIL: i32 = 4; // number of octaves in elevation synthesis
pub const GEO_FREQ: f64 = 0.05; // base frequency, doubled every octave
pub const GEO_AMP: f64 = 0.5; // amplitude decay base, not renormalised
pub const EROSION_RATE: f64 = 0.1; // relaxation towards the neighbourhood mean
pub const EROSION_PASSES: usize = 4; // smoothing passes at world generation
pub const DESERT_ELEVATION: f64 = 500.0; // dry lowland cutoff
pub const MOUNTAIN_ELEVATION: f64 = 2000.0; // highland cutoff for the classifier

/* ## rivers */

pub const DROPLET_FACTOR: usize = 2; // droplets spawned per grid cell
pub const DROPLET_RAIN_GATE: f64 = 0.1; // minimal rainfall to seed a droplet

/* # climate */

pub const MAX_TEMPERATURE: f64 = 40.0; // equatorial sea level temperature
pub const LAPSE_RATE: f64 = 6.5; // temperature drop per kilometer of elevation
pub const SEA_PRESSURE: f64 = 1013.0; // reference pressure at sea level
pub const PRESSURE_FACTOR: f64 = 0.12; // pressure drop per degree
pub const WIND_FACTOR: f64 = 0.01; // wind strength per unit pressure gradient
pub const EVAPORATION_WATER: f64 = 0.2; // evaporation base over water
pub const EVAPORATION_LAND: f64 = 0.05; // evaporation base over land
pub const CONDENSATION_FACTOR: f64 = 0.05; // rainfall lost per unit wind speed

/* # events */

pub const EVENT_CAPACITY: usize = 32; // live events beyond this are dropped
pub const QUAKE_STRESS_FACTOR: f64 = 0.001; // quake chance per unit stress
pub const QUAKE_DURATION: u32 = 2;
pub const STORM_CHANCE: f64 = 0.0005; // per interior ocean cell per tick
pub const STORM_DURATION: u32 = 3;
