//! Trait definitions
use rand::Rng;

/// A source of random draws of type `X`
pub trait Sampleable<X> {
    /// Single draw
    ///
    /// # Example
    ///
    /// ```
    /// use montepi::sampler::UnitSquare;
    /// use montepi::traits::*;
    ///
    /// let mut rng = rand::thread_rng();
    /// let p = UnitSquare.draw(&mut rng);
    ///
    /// assert!(p.in_unit_square());
    /// ```
    fn draw<R: Rng>(&self, rng: &mut R) -> X;

    /// Multiple draws
    ///
    /// # Example
    ///
    /// ```
    /// use montepi::sampler::UnitSquare;
    /// use montepi::traits::*;
    ///
    /// let mut rng = rand::thread_rng();
    /// let ps = UnitSquare.sample(22, &mut rng);
    ///
    /// assert_eq!(ps.len(), 22);
    /// ```
    fn sample<R: Rng>(&self, n: usize, mut rng: &mut R) -> Vec<X> {
        (0..n).map(|_| self.draw(&mut rng)).collect()
    }

    /// Create a never-ending iterator of samples
    ///
    /// # Example
    ///
    /// Estimate π from a stream of points
    ///
    /// ```
    /// use montepi::sampler::UnitSquare;
    /// use montepi::traits::*;
    ///
    /// let mut rng = rand::thread_rng();
    ///
    /// let n = 1_000_000_usize;
    /// let inside = UnitSquare
    ///     .sample_stream(&mut rng)
    ///     .take(n)
    ///     .filter(|p| p.in_quarter_disk())
    ///     .count();
    ///
    /// let pi_est = 4.0 * inside as f64 / n as f64;
    /// assert::close(pi_est, std::f64::consts::PI, 1e-2);
    /// ```
    fn sample_stream<'r, R: Rng>(
        &'r self,
        mut rng: &'r mut R,
    ) -> Box<dyn Iterator<Item = X> + 'r> {
        Box::new(std::iter::repeat_with(move || self.draw(&mut rng)))
    }
}
