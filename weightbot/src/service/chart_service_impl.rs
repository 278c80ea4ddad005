use crate::common::*;
use crate::dto::stats::weight_stats::*;
use crate::traits::service_traits::chart_service::*;
use crate::utils_modules::time_utils::*;
use plotters::prelude::*;
use plotters::style::FontTransform;

const ON_TRACK_COLOR: RGBColor = RGBColor(0, 128, 0);
const BEHIND_COLOR: RGBColor = RGBColor(220, 20, 20);
const GOAL_COLOR: RGBColor = RGBColor(255, 165, 0);
const POINT_COLOR: RGBColor = RGBColor(0, 0, 0);

#[derive(Debug, Clone, new)]
pub struct ChartServiceImpl;

impl ChartServiceImpl {
    #[doc = "Y-axis bounds: every plotted value padded by 1kg on both sides"]
    fn calculate_y_range(&self, stats: &WeightStats) -> (f64, f64) {
        let mut values: Vec<f64> = stats.window_readings.iter().map(|r| r.weight).collect();
        values.push(stats.trend.start_weight);
        values.push(stats.trend.end_weight);

        if stats.show_goal {
            values.push(stats.goal.expected_weight);
        }

        let min_val: f64 = values.iter().cloned().fold(f64::INFINITY, f64::min);
        let max_val: f64 = values.iter().cloned().fold(f64::NEG_INFINITY, f64::max);

        (min_val - 1.0, max_val + 1.0)
    }

    #[doc = "X-axis bounds in days since the first sample, with a little air around the points"]
    fn calculate_x_range(&self, stats: &WeightStats) -> (f64, f64) {
        let span: f64 = stats.elapsed_days.max(0.0);
        let padding: f64 = (span * 0.03).max(0.5);

        (-padding, span + padding)
    }
}

#[async_trait]
impl ChartService for ChartServiceImpl {
    async fn generate_weight_chart(
        &self,
        stats: &WeightStats,
        output_path: &Path,
    ) -> anyhow::Result<()> {
        if stats.window_readings.is_empty() {
            return Err(anyhow!(
                "[ChartServiceImpl->generate_weight_chart] Cannot generate chart with empty data"
            ));
        }

        let output_path_str: String = output_path.to_string_lossy().to_string();

        /* Calculate ranges before moving into closure */
        let (y_min, y_max) = self.calculate_y_range(stats);
        let (x_min, x_max) = self.calculate_x_range(stats);

        let origin: DateTime<Tz> = stats.trend.start_timestamp;
        let points: Vec<(f64, f64)> = stats
            .window_readings
            .iter()
            .map(|r| (days_between(&origin, &r.timestamp), r.weight))
            .collect();
        let trend: Vec<(f64, f64)> = vec![
            (0.0, stats.trend.start_weight),
            (stats.elapsed_days, stats.trend.end_weight),
        ];
        let goal: Option<Vec<(f64, f64)>> = stats.show_goal.then(|| {
            vec![
                (0.0, stats.goal.start_weight),
                (stats.elapsed_days, stats.goal.expected_weight),
            ]
        });
        let trend_color: RGBColor = if stats.goal.on_track {
            ON_TRACK_COLOR
        } else {
            BEHIND_COLOR
        };

        let handle: tokio::task::JoinHandle<Result<(), anyhow::Error>> =
            tokio::task::spawn_blocking(move || {
                let root = BitMapBackend::new(&output_path_str, (1200, 700)).into_drawing_area();
                root.fill(&WHITE)?;

                let mut chart = ChartBuilder::on(&root)
                    .margin(20)
                    .x_label_area_size(110)
                    .y_label_area_size(70)
                    .right_y_label_area_size(70)
                    .build_cartesian_2d(x_min..x_max, y_min..y_max)?
                    .set_secondary_coord(x_min..x_max, y_min..y_max);

                let date_label = |x: &f64| add_days(&origin, *x).format("%Y-%m-%d").to_string();
                let kg_label = |y: &f64| format!("{:.1}", y);

                chart
                    .configure_mesh()
                    .y_desc("kg")
                    .x_labels(8)
                    .y_labels(10)
                    .x_label_formatter(&date_label)
                    .y_label_formatter(&kg_label)
                    .x_label_style(
                        ("sans-serif", 16)
                            .into_font()
                            .transform(FontTransform::Rotate90),
                    )
                    .y_label_style(("sans-serif", 16))
                    .draw()?;

                /* mirrored ticks on the right-hand side */
                chart
                    .configure_secondary_axes()
                    .y_labels(10)
                    .y_label_formatter(&kg_label)
                    .draw()?;

                chart.draw_series(
                    points
                        .iter()
                        .map(|&(x, y)| Circle::new((x, y), 4, POINT_COLOR.filled())),
                )?;

                chart.draw_series(LineSeries::new(
                    trend,
                    ShapeStyle::from(&trend_color).stroke_width(3),
                ))?;

                if let Some(goal) = goal {
                    chart.draw_series(DashedLineSeries::new(
                        goal,
                        12,
                        8,
                        ShapeStyle::from(&GOAL_COLOR).stroke_width(3),
                    ))?;
                }

                root.present()?;
                Ok(())
            });

        let drawing_result: Result<(), anyhow::Error> = handle.await.context(
            "[ChartServiceImpl->generate_weight_chart] blocking task join failed (panic/cancelled)",
        )?;

        drawing_result
            .context("[ChartServiceImpl->generate_weight_chart] drawing/present failed")?;

        info!("Weight chart generated: {:?}", output_path);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::model::reading::weight_reading::*;

    fn stats_with(show_goal: bool, expected_weight: f64) -> WeightStats {
        let start: DateTime<Tz> =
            parse_store_timestamp("2024-01-01T08:00:00+01:00", &chrono_tz::Europe::Brussels)
                .unwrap();
        let end: DateTime<Tz> = start + chrono::Duration::days(20);

        WeightStats::new(
            87.0,
            86.0,
            end,
            90.0,
            start,
            TrendLine::new(start, 89.5, end, 86.5, -0.15),
            GoalProjection::new(-12.0, 89.5, expected_weight, true),
            3.0,
            20.0,
            show_goal,
            vec![WeightReading::new(start, 90.0), WeightReading::new(end, 86.0)],
        )
    }

    #[test]
    fn y_range_pads_points_and_trend_by_one() {
        let (lo, hi) = ChartServiceImpl::new().calculate_y_range(&stats_with(false, 70.0));

        assert_eq!(lo, 85.0);
        assert_eq!(hi, 91.0);
    }

    #[test]
    fn y_range_includes_goal_only_when_shown() {
        let (lo, hi) = ChartServiceImpl::new().calculate_y_range(&stats_with(true, 80.0));

        assert_eq!(lo, 79.0);
        assert_eq!(hi, 91.0);
    }

    #[test]
    fn x_range_is_never_empty() {
        let chart = ChartServiceImpl::new();
        let mut single = stats_with(false, 0.0);
        single.elapsed_days = 0.0;

        let (lo, hi) = chart.calculate_x_range(&single);
        assert!(lo < 0.0 && hi > 0.0);

        let (lo, hi) = chart.calculate_x_range(&stats_with(false, 0.0));
        assert!(lo < 0.0);
        assert!(hi > 20.0);
    }

    #[tokio::test]
    async fn renders_png_with_goal_line() {
        let dir = tempfile::tempdir().unwrap();
        let output_path: PathBuf = dir.path().join("chart.png");

        ChartServiceImpl::new()
            .generate_weight_chart(&stats_with(true, 88.0), &output_path)
            .await
            .unwrap();

        let bytes: Vec<u8> = fs::read(&output_path).unwrap();
        assert!(!bytes.is_empty());
        assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");
    }

    #[tokio::test]
    async fn renders_single_reading_behind_goal() {
        let dir = tempfile::tempdir().unwrap();
        let output_path: PathBuf = dir.path().join("single.png");
        let mut stats = stats_with(false, 0.0);
        stats.window_readings.truncate(1);
        stats.elapsed_days = 0.0;
        stats.goal.on_track = false;

        ChartServiceImpl::new()
            .generate_weight_chart(&stats, &output_path)
            .await
            .unwrap();

        assert!(fs::metadata(&output_path).unwrap().len() > 0);
    }

    #[tokio::test]
    async fn empty_window_is_rejected_before_drawing() {
        let mut stats = stats_with(false, 0.0);
        stats.window_readings.clear();
        let dir = tempfile::tempdir().unwrap();

        let result = ChartServiceImpl::new()
            .generate_weight_chart(&stats, &dir.path().join("chart.png"))
            .await;

        assert!(result.is_err());
        assert!(!dir.path().join("chart.png").exists());
    }
}
