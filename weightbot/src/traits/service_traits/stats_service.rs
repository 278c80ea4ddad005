use crate::dto::stats::{stats_request::*, weight_stats::*};
use crate::model::reading::weight_reading::*;

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum StatsError {
    #[error("no readings available for the {0}")]
    EmptyWindow(String),
}

pub trait StatsService: Send + Sync {
    fn compute_weight_stats(
        &self,
        readings: &[WeightReading],
        request: &StatsRequest,
    ) -> Result<WeightStats, StatsError>;
}
