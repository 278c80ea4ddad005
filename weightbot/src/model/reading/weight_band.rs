use crate::common::*;

use crate::model::configs::stats_config::*;

#[doc = "Open interval of plausible weights, `min < w < max`."]
#[derive(Debug, Clone, Copy, PartialEq, Getters, new)]
#[getset(get = "pub")]
pub struct WeightBand {
    pub min: f64,
    pub max: f64,
}

impl WeightBand {
    pub fn from_stats_config(stats_config: &StatsConfig) -> Self {
        WeightBand::new(stats_config.min_weight, stats_config.max_weight)
    }

    pub fn contains(&self, weight: f64) -> bool {
        self.min < weight && weight < self.max
    }
}

impl Default for WeightBand {
    fn default() -> Self {
        WeightBand::new(50.0, 150.0)
    }
}

#[doc = r#"
    Decides whether a chat message is a weight reading.

    Surrounding whitespace is ignored. The text must parse as a finite float
    strictly inside `band`; anything else yields `None` and has no side effects.
"#]
pub fn parse_weight(text: &str, band: &WeightBand) -> Option<f64> {
    let weight: f64 = text.trim().parse::<f64>().ok()?;

    if weight.is_finite() && band.contains(weight) {
        Some(weight)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_values_inside_band() {
        let band = WeightBand::default();

        assert_eq!(parse_weight("85.3", &band), Some(85.3));
        assert_eq!(parse_weight("  72 \n", &band), Some(72.0));
        assert_eq!(parse_weight("50.0001", &band), Some(50.0001));
        assert_eq!(parse_weight("149.9", &band), Some(149.9));
    }

    #[test]
    fn rejects_bounds_and_outliers() {
        let band = WeightBand::default();

        for text in ["50", "150", "49.9", "150.1", "-80", "0", "1e9"] {
            assert_eq!(parse_weight(text, &band), None, "{} should be rejected", text);
        }
    }

    #[test]
    fn rejects_non_numeric_text() {
        let band = WeightBand::default();

        for text in ["", "hello", "85kg", "85,3", "NaN", "inf", "/stats", "8 5"] {
            assert_eq!(parse_weight(text, &band), None, "{:?} should be rejected", text);
        }
    }

    #[test]
    fn band_follows_configuration() {
        let band = WeightBand::new(40.0, 60.0);

        assert_eq!(parse_weight("45", &band), Some(45.0));
        assert_eq!(parse_weight("85", &band), None);
    }
}
