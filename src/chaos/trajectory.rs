//! Iterator over the states of a chaotic map.

use super::map::ChaoticMap;

/// Orbit of a [`ChaoticMap`] starting from an initial point.
///
/// Each call to `next` applies the map once and yields the post-step
/// state; the initial point itself is never yielded. The iterator is
/// infinite.
///
/// # Examples
///
/// ```
/// use hsmatrix::chaos::{step, Hsm2d, Trajectory};
///
/// let mut orbit = Trajectory::new(Hsm2d::new(4.95), 0.2, 0.4);
/// assert_eq!(orbit.next(), Some(step(0.2, 0.4, 4.95)));
/// ```
#[derive(Debug, Clone)]
pub struct Trajectory<M: ChaoticMap> {
    map: M,
    x: f64,
    y: f64,
}

impl<M: ChaoticMap> Trajectory<M> {
    /// Starts an orbit of `map` at `(x0, y0)`.
    pub fn new(map: M, x0: f64, y0: f64) -> Self {
        Trajectory { map, x: x0, y: y0 }
    }

    /// Advances the orbit `n` steps without yielding, leaving the
    /// trajectory past its initial transient.
    pub fn skip_transient(&mut self, n: usize) {
        for _ in 0..n {
            self.advance();
        }
    }

    /// Current state `(x, y)`.
    pub fn state(&self) -> (f64, f64) {
        (self.x, self.y)
    }

    #[inline]
    fn advance(&mut self) -> (f64, f64) {
        let (x, y) = self.map.step(self.x, self.y);
        self.x = x;
        self.y = y;
        (x, y)
    }
}

impl<M: ChaoticMap> Iterator for Trajectory<M> {
    type Item = (f64, f64);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        Some(self.advance())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}
