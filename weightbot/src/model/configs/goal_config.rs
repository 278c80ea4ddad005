use crate::common::*;

#[derive(Debug, Clone, Copy, Deserialize, Serialize, Getters, new)]
#[getset(get = "pub")]
pub struct GoalConfig {
    /* kg per month, negative for weight loss */
    pub monthly_rate_kg: f64,
}

impl GoalConfig {
    #[doc = "Goal rate expressed in kg per year."]
    pub fn annual_rate_kg(&self) -> f64 {
        12.0 * self.monthly_rate_kg
    }
}
