use crate::common::*;

use crate::dto::stats::weight_stats::*;

use crate::traits::repository_traits::telegram_repository::*;
use crate::traits::service_traits::notification_service::*;

use crate::utils_modules::time_utils::*;

pub const WELCOME_MESSAGE: &str = "Hi! Just type in your current weight and I'll store it for you!";
pub const FAILURE_MESSAGE: &str = "[some error occurred; check the log]";

#[doc = "Acknowledgement sent right after a reading has been appended, echoing what the user typed."]
pub fn compose_stored_message(weight_text: &str) -> String {
    format!("{}kg successfully stored!", weight_text.trim())
}

#[doc = "Weekly mean and the window extremes with how long ago they were measured."]
pub fn compose_summary_message(stats: &WeightStats, now: &DateTime<Tz>) -> String {
    format!(
        "Your weight mean the past week is {:.1}kg. \
         The minimum over the shown period was {:.1}kg ({}) \
         and maximum was {:.1}kg ({}).",
        stats.weekly_mean,
        stats.min_weight,
        diff_for_humans(&stats.min_timestamp, now),
        stats.max_weight,
        diff_for_humans(&stats.max_timestamp, now),
    )
}

#[doc = "Trend change over the window, e.g. `You have lost 2.3kg in 30 days`."]
pub fn compose_progress_message(stats: &WeightStats) -> String {
    let gained_lost: &str = if stats.weight_change >= 0.0 {
        "lost"
    } else {
        "gained"
    };

    format!(
        "You have {} {:.1}kg in {:.0} days",
        gained_lost,
        stats.weight_change.abs(),
        stats.elapsed_days
    )
}

#[derive(Debug, new)]
pub struct NotificationServiceImpl<T: TelegramRepository> {
    telegram_repo: Arc<T>,
}

#[async_trait]
impl<T> NotificationService for NotificationServiceImpl<T>
where
    T: TelegramRepository,
{
    async fn send_typing(&self, chat_id: i64) -> anyhow::Result<()> {
        self.telegram_repo.send_typing(chat_id).await
    }

    async fn send_welcome(&self, chat_id: i64) -> anyhow::Result<()> {
        self.telegram_repo.send_message(chat_id, WELCOME_MESSAGE).await
    }

    async fn send_weight_stored(&self, chat_id: i64, weight_text: &str) -> anyhow::Result<()> {
        self.telegram_repo
            .send_message(chat_id, &compose_stored_message(weight_text))
            .await
    }

    async fn send_stats_summary(
        &self,
        chat_id: i64,
        stats: &WeightStats,
        now: &DateTime<Tz>,
    ) -> anyhow::Result<()> {
        self.telegram_repo
            .send_message(chat_id, &compose_summary_message(stats, now))
            .await
    }

    async fn send_chart(&self, chat_id: i64, chart_path: &Path) -> anyhow::Result<()> {
        self.telegram_repo.send_photo(chat_id, chart_path).await
    }

    async fn send_progress(&self, chat_id: i64, stats: &WeightStats) -> anyhow::Result<()> {
        self.telegram_repo
            .send_message(chat_id, &compose_progress_message(stats))
            .await
    }

    async fn send_failure_notice(&self, chat_id: i64) -> anyhow::Result<()> {
        self.telegram_repo.send_message(chat_id, FAILURE_MESSAGE).await
    }
}
