#[doc = "Arithmetic mean, `None` for an empty slice."]
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }

    Some(values.iter().sum::<f64>() / values.len() as f64)
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearFit {
    pub slope: f64,
    pub intercept: f64,
}

impl LinearFit {
    pub fn value_at(&self, x: f64) -> f64 {
        self.intercept + self.slope * x
    }
}

#[doc = r#"
    Ordinary least-squares line through `(xs[i], ys[i])`.

    With fewer than two points, or when every x is identical, the slope is zero
    and the line passes through the mean of `ys`. Returns `None` for empty or
    mismatched input.
"#]
pub fn linear_fit(xs: &[f64], ys: &[f64]) -> Option<LinearFit> {
    if xs.len() != ys.len() {
        return None;
    }

    let mean_x: f64 = mean(xs)?;
    let mean_y: f64 = mean(ys)?;

    let (sxx, sxy) = xs
        .iter()
        .zip(ys)
        .fold((0.0_f64, 0.0_f64), |(sxx, sxy), (x, y)| {
            let dx: f64 = x - mean_x;
            (sxx + dx * dx, sxy + dx * (y - mean_y))
        });

    if xs.len() < 2 || sxx <= f64::EPSILON {
        return Some(LinearFit {
            slope: 0.0,
            intercept: mean_y,
        });
    }

    let slope: f64 = sxy / sxx;

    Some(LinearFit {
        slope,
        intercept: mean_y - slope * mean_x,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mean_of_values() {
        assert_eq!(mean(&[]), None);
        assert_eq!(mean(&[84.0, 86.0]), Some(85.0));
    }

    #[test]
    fn fit_recovers_exact_line() {
        let xs = [0.0, 1.0, 2.0, 3.0];
        let ys = [10.0, 8.0, 6.0, 4.0];

        let fit = linear_fit(&xs, &ys).unwrap();

        assert!((fit.slope + 2.0).abs() < 1e-12);
        assert!((fit.intercept - 10.0).abs() < 1e-12);
        assert!((fit.value_at(5.0) - 0.0).abs() < 1e-12);
    }

    #[test]
    fn degenerate_inputs_fall_back_to_flat_line() {
        let single = linear_fit(&[3.0], &[80.0]).unwrap();
        assert_eq!(single.slope, 0.0);
        assert_eq!(single.value_at(100.0), 80.0);

        let same_x = linear_fit(&[1.0, 1.0], &[80.0, 82.0]).unwrap();
        assert_eq!(same_x.slope, 0.0);
        assert_eq!(same_x.intercept, 81.0);

        assert!(linear_fit(&[], &[]).is_none());
        assert!(linear_fit(&[1.0], &[]).is_none());
    }
}
