use crate::special;

/// Pearson product-moment correlation between two paired samples.
///
/// # Examples
///
/// ```
/// use wordstat_stats::correlation::Correlation;
///
/// let pairs = [(1.0, 2.0), (2.0, 4.0), (3.0, 6.5), (4.0, 8.0)];
/// let corr = Correlation::pearson(pairs).unwrap();
/// assert!(corr.r > 0.99);
/// assert!(corr.p_value < 0.01);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Correlation {
    /// Number of pairs used.
    pub count: usize,
    /// Correlation coefficient in `[-1, 1]`.
    pub r: f64,
    /// Two-sided p-value for the null hypothesis `r = 0`.
    pub p_value: f64,
}

impl Correlation {
    /// Computes Pearson's r and its p-value from `(x, y)` pairs.
    ///
    /// Returns `None` when fewer than two pairs are given or either series
    /// has zero variance, since r is undefined there.
    ///
    /// The p-value uses a t statistic with `n - 2` degrees of freedom. With
    /// exactly two pairs every line fits perfectly and the p-value is `1.0`.
    #[expect(clippy::cast_precision_loss)]
    #[must_use]
    pub fn pearson<I>(pairs: I) -> Option<Self>
    where
        I: IntoIterator<Item = (f64, f64)>,
    {
        let pairs = pairs.into_iter().collect::<Vec<_>>();
        let count = pairs.len();
        if count < 2 {
            return None;
        }
        let n = count as f64;
        let mean_x = pairs.iter().map(|(x, _)| x).sum::<f64>() / n;
        let mean_y = pairs.iter().map(|(_, y)| y).sum::<f64>() / n;

        let (mut sxx, mut syy, mut sxy) = (0.0, 0.0, 0.0);
        for (x, y) in &pairs {
            let dx = x - mean_x;
            let dy = y - mean_y;
            sxx += dx * dx;
            syy += dy * dy;
            sxy += dx * dy;
        }
        if sxx <= 0.0 || syy <= 0.0 {
            return None;
        }

        let r = (sxy / (sxx * syy).sqrt()).clamp(-1.0, 1.0);
        let p_value = if count == 2 {
            1.0
        } else {
            let df = n - 2.0;
            let one_minus_r2 = 1.0 - r * r;
            if one_minus_r2 <= f64::EPSILON {
                0.0
            } else {
                let t = r * (df / one_minus_r2).sqrt();
                special::student_t_two_sided(t, df)
            }
        };

        Some(Self { count, r, p_value })
    }

    /// Coefficient of determination (`r²`).
    #[must_use]
    pub fn r_squared(&self) -> f64 {
        self.r * self.r
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_perfect_correlation() {
        let corr = Correlation::pearson([(1.0, 3.0), (2.0, 5.0), (3.0, 7.0)]).unwrap();
        assert!((corr.r - 1.0).abs() < 1e-12);
        assert!((corr.r_squared() - 1.0).abs() < 1e-12);
        assert!(corr.p_value.abs() < 1e-12);
    }

    #[test]
    fn test_negative_correlation() {
        let corr = Correlation::pearson([(1.0, 4.0), (2.0, 3.0), (3.0, 1.0), (4.0, 1.0)]).unwrap();
        assert!(corr.r < -0.9);
        assert!(corr.r_squared() > 0.8);
    }

    #[test]
    fn test_known_p_value() {
        // r ~= 0.90 over 12 points, t ~= 6.57 at 10 degrees of freedom
        let xs = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0, 11.0, 12.0];
        let ys = [2.0, 1.0, 4.0, 3.0, 7.0, 5.0, 6.0, 9.0, 6.0, 10.0, 8.0, 12.0];
        let corr = Correlation::pearson(xs.into_iter().zip(ys)).unwrap();
        let df = 10.0;
        let t = corr.r * (df / (1.0 - corr.r * corr.r)).sqrt();
        let expected = special::student_t_two_sided(t, df);
        assert!((corr.p_value - expected).abs() < 1e-15);
        assert!(corr.p_value > 0.0 && corr.p_value < 0.01);
    }

    #[test]
    fn test_two_points_have_unit_p_value() {
        let corr = Correlation::pearson([(1.0, 5.0), (2.0, 4.0)]).unwrap();
        assert!((corr.r + 1.0).abs() < 1e-12);
        assert!((corr.p_value - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_undefined_cases() {
        assert!(Correlation::pearson(std::iter::empty()).is_none());
        assert!(Correlation::pearson([(1.0, 1.0)]).is_none());
        assert!(Correlation::pearson([(1.0, 2.0), (2.0, 2.0), (3.0, 2.0)]).is_none());
    }
}
