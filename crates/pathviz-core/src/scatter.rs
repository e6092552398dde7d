//! Random wall placement.

use rand::Rng;

use crate::grid::Grid;

impl Grid {
    /// Turn each free non-marker cell into a wall with probability `density`
    /// (clamped to `0.0..=1.0`). Existing walls are kept.
    ///
    /// Returns the number of walls placed.
    pub fn scatter_walls<R: Rng>(&mut self, rng: &mut R, density: f64) -> usize {
        let density = if density.is_nan() {
            0.0
        } else {
            density.clamp(0.0, 1.0)
        };
        let mut placed = 0;
        for p in self.bounds().iter() {
            if p == self.start() || p == self.finish() || self.is_wall(p) {
                continue;
            }
            if rng.random_bool(density) && self.set_wall(p, true).unwrap_or(false) {
                placed += 1;
            }
        }
        log::debug!("scattered {placed} walls at density {density:.2}");
        placed
    }
}
