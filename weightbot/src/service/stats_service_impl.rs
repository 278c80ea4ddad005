use crate::common::*;

use crate::dto::stats::{stats_request::*, weight_stats::*};
use crate::enums::stats_window::*;
use crate::model::{configs::goal_config::*, reading::weight_reading::*};
use crate::traits::service_traits::stats_service::*;
use crate::utils_modules::{stats_utils::*, time_utils::*};

const DAYS_PER_YEAR: f64 = 365.0;

#[doc = r#"
    Descriptive statistics over the weight log.

    The trend is an ordinary least-squares line over the raw window samples,
    and the goal line starts from the same fitted value so that both lines on
    the chart, and the on-track verdict, agree with each other.
"#]
#[derive(Debug, Clone, new)]
pub struct StatsServiceImpl {
    goal: GoalConfig,
    weekly_mean_days: i64,
}

impl StatsServiceImpl {
    #[doc = r#"
        Readings strictly newer than `last - days`, assuming `sorted` is ordered by time.
        A span reaching past the representable date range keeps the whole history.
    "#]
    fn trailing<'a>(sorted: &'a [WeightReading], days: i64) -> &'a [WeightReading] {
        let last_ts: DateTime<Tz> = match sorted.last() {
            Some(last) => last.timestamp,
            None => return sorted,
        };

        let cutoff: DateTime<Tz> = match chrono::Duration::try_days(days)
            .and_then(|span| last_ts.checked_sub_signed(span))
        {
            Some(cutoff) => cutoff,
            None => return sorted,
        };
        let start: usize = sorted.partition_point(|r| r.timestamp <= cutoff);

        &sorted[start..]
    }

    #[doc = "Lowest reading; the earliest one wins a tie."]
    fn min_reading(window: &[WeightReading]) -> Option<&WeightReading> {
        window.iter().fold(None, |best: Option<&WeightReading>, r| match best {
            Some(b) if b.weight <= r.weight => Some(b),
            _ => Some(r),
        })
    }

    #[doc = "Highest reading; the earliest one wins a tie."]
    fn max_reading(window: &[WeightReading]) -> Option<&WeightReading> {
        window.iter().fold(None, |best: Option<&WeightReading>, r| match best {
            Some(b) if b.weight >= r.weight => Some(b),
            _ => Some(r),
        })
    }

    fn is_on_track(annual_rate: f64, trend_end: f64, expected: f64) -> bool {
        if annual_rate > 0.0 {
            trend_end >= expected
        } else {
            trend_end <= expected
        }
    }
}

impl StatsService for StatsServiceImpl {
    fn compute_weight_stats(
        &self,
        readings: &[WeightReading],
        request: &StatsRequest,
    ) -> Result<WeightStats, StatsError> {
        let empty = || StatsError::EmptyWindow(request.window.to_string());

        let mut history: Vec<WeightReading> = readings.to_vec();
        history.sort_by(|a, b| a.timestamp.cmp(&b.timestamp));

        let weekly: Vec<f64> = Self::trailing(&history, self.weekly_mean_days)
            .iter()
            .map(|r| r.weight)
            .collect();
        let weekly_mean: f64 = mean(&weekly).ok_or_else(empty)?;

        let window: &[WeightReading] = match get_window_days(request.window) {
            Some(days) => Self::trailing(&history, days),
            None => &history,
        };

        let first: &WeightReading = window.first().ok_or_else(empty)?;
        let last: &WeightReading = window.last().ok_or_else(empty)?;
        let min: &WeightReading = Self::min_reading(window).ok_or_else(empty)?;
        let max: &WeightReading = Self::max_reading(window).ok_or_else(empty)?;

        let xs: Vec<f64> = window
            .iter()
            .map(|r| days_between(&first.timestamp, &r.timestamp))
            .collect();
        let ys: Vec<f64> = window.iter().map(|r| r.weight).collect();
        let fit: LinearFit = linear_fit(&xs, &ys).ok_or_else(empty)?;

        let elapsed_days: f64 = days_between(&first.timestamp, &last.timestamp);
        let trend_start: f64 = fit.value_at(0.0);
        let trend_end: f64 = fit.value_at(elapsed_days);

        let annual_rate: f64 = self.goal.annual_rate_kg();
        let expected_weight: f64 = trend_start + annual_rate * elapsed_days / DAYS_PER_YEAR;
        let on_track: bool = Self::is_on_track(annual_rate, trend_end, expected_weight);

        let trend: TrendLine = TrendLine::new(
            first.timestamp,
            trend_start,
            last.timestamp,
            trend_end,
            fit.slope,
        );

        let goal: GoalProjection =
            GoalProjection::new(annual_rate, trend_start, expected_weight, on_track);

        Ok(WeightStats::new(
            weekly_mean,
            min.weight,
            min.timestamp,
            max.weight,
            max.timestamp,
            trend,
            goal,
            trend_start - trend_end,
            elapsed_days,
            request.show_goal,
            window.to_vec(),
        ))
    }
}
