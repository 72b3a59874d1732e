/* # deterministic randomness */

// Numerical Recipes constants
const LCG_MUL: u32 = 1_664_525;
const LCG_ADD: u32 = 1_013_904_223;

// replaces a zero seed, which would degenerate parts of the noise hash
const SEED_FALLBACK: u32 = 0x9e37_79b9;

const HASH_X: u32 = 374_761_393;
const HASH_Y: u32 = 668_265_263;

/// a 32-bit linear congruential generator, threaded explicitly through
/// every call that needs randomness so a world replays from its seed
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Lcg {
    state: u32,
}

impl Lcg {
    pub fn new(seed: u32) -> Self {
        Self {
            state: if seed == 0 { SEED_FALLBACK } else { seed },
        }
    }

    /// advance the stream and return the new word scaled to [0, 1)
    pub fn next_f64(&mut self) -> f64 {
        self.state = self.state.wrapping_mul(LCG_MUL).wrapping_add(LCG_ADD);
        f64::from(self.state) * 2f64.powi(-32)
    }

    /// hash one lattice corner, folded with the current stream word
    fn lattice(&self, x: i32, y: i32) -> f64 {
        let mut hash = (x as u32)
            .wrapping_mul(HASH_X)
            .wrapping_add((y as u32).wrapping_mul(HASH_Y));
        hash ^= hash.rotate_left(13);
        hash ^= hash.rotate_right(17);
        hash ^= self.state;
        f64::from(hash) * 2f64.powi(-32)
    }

    /// value noise in [0, 1), smooth-interpolated between hashed lattice
    /// corners; reads the stream word without advancing it
    pub fn noise2d(&self, x: f64, y: f64) -> f64 {
        let (xf, yf) = (x.floor(), y.floor());
        let (x0, y0) = (xf as i32, yf as i32);
        let smooth = |t: f64| t * t * (3.0 - 2.0 * t);
        let (sx, sy) = (smooth(x - xf), smooth(y - yf));

        let n00 = self.lattice(x0, y0);
        let n10 = self.lattice(x0 + 1, y0);
        let n01 = self.lattice(x0, y0 + 1);
        let n11 = self.lattice(x0 + 1, y0 + 1);

        let floor = n00 + sx * (n10 - n00);
        let ceiling = n01 + sx * (n11 - n01);
        floor + sy * (ceiling - floor)
    }
}
