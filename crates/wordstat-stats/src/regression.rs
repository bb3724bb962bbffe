/// Ordinary least-squares line `y = slope * x + intercept`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearFit {
    pub slope: f64,
    pub intercept: f64,
    /// Number of points the line was fitted to.
    pub count: usize,
}

impl LinearFit {
    /// Fits a line through `(x, y)` points.
    ///
    /// Returns `None` for fewer than two points or when every `x` is equal.
    ///
    /// # Examples
    ///
    /// ```
    /// use wordstat_stats::regression::LinearFit;
    ///
    /// let fit = LinearFit::fit([(0.0, 1.0), (1.0, 3.0), (2.0, 5.0)]).unwrap();
    /// assert!((fit.slope - 2.0).abs() < 1e-12);
    /// assert!((fit.intercept - 1.0).abs() < 1e-12);
    /// assert!((fit.predict(10.0) - 21.0).abs() < 1e-12);
    /// ```
    #[expect(clippy::cast_precision_loss)]
    #[must_use]
    pub fn fit<I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = (f64, f64)>,
    {
        let points = points.into_iter().collect::<Vec<_>>();
        let count = points.len();
        if count < 2 {
            return None;
        }
        let n = count as f64;
        let mean_x = points.iter().map(|(x, _)| x).sum::<f64>() / n;
        let mean_y = points.iter().map(|(_, y)| y).sum::<f64>() / n;

        let (sxx, sxy) = points.iter().fold((0.0, 0.0), |(sxx, sxy), (x, y)| {
            let dx = x - mean_x;
            (sxx + dx * dx, sxy + dx * (y - mean_y))
        });
        if sxx <= 0.0 {
            return None;
        }

        let slope = sxy / sxx;
        Some(Self {
            slope,
            intercept: mean_y - slope * mean_x,
            count,
        })
    }

    #[must_use]
    pub fn predict(&self, x: f64) -> f64 {
        self.slope.mul_add(x, self.intercept)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_noisy_fit() {
        let fit = LinearFit::fit([(1.0, 2.0), (2.0, 2.0), (3.0, 4.0), (4.0, 4.0)]).unwrap();
        assert!((fit.slope - 0.8).abs() < 1e-12);
        assert!((fit.intercept - 1.0).abs() < 1e-12);
        assert_eq!(fit.count, 4);
    }

    #[test]
    fn test_degenerate_inputs() {
        assert!(LinearFit::fit([(1.0, 2.0)]).is_none());
        assert!(LinearFit::fit([(3.0, 2.0), (3.0, 5.0)]).is_none());
    }
}
