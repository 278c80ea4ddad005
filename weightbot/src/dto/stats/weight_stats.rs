use crate::common::*;

use crate::model::reading::weight_reading::*;

#[doc = "Fitted trend over the analysed window, evaluated at its first and last sample."]
#[derive(Debug, Clone, PartialEq, Getters, new)]
#[getset(get = "pub")]
pub struct TrendLine {
    pub start_timestamp: DateTime<Tz>,
    pub start_weight: f64,
    pub end_timestamp: DateTime<Tz>,
    pub end_weight: f64,
    /* kg per day */
    pub slope_per_day: f64,
}

#[derive(Debug, Clone, PartialEq, Getters, new)]
#[getset(get = "pub")]
pub struct GoalProjection {
    /* kg per year */
    pub annual_rate: f64,
    pub start_weight: f64,
    pub expected_weight: f64,
    pub on_track: bool,
}

#[doc = r#"
    Everything the reply composer and the chart renderer need for one
    statistics reply.
"#]
#[derive(Debug, Clone, PartialEq, Getters, new)]
#[getset(get = "pub")]
pub struct WeightStats {
    pub weekly_mean: f64,
    pub min_weight: f64,
    pub min_timestamp: DateTime<Tz>,
    pub max_weight: f64,
    pub max_timestamp: DateTime<Tz>,
    pub trend: TrendLine,
    pub goal: GoalProjection,
    /* positive when weight was lost */
    pub weight_change: f64,
    pub elapsed_days: f64,
    pub show_goal: bool,
    pub window_readings: Vec<WeightReading>,
}
