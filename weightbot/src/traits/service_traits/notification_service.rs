use crate::common::*;

use crate::dto::stats::weight_stats::*;

#[async_trait]
pub trait NotificationService: Send + Sync {
    async fn send_typing(&self, chat_id: i64) -> anyhow::Result<()>;
    async fn send_welcome(&self, chat_id: i64) -> anyhow::Result<()>;
    async fn send_weight_stored(&self, chat_id: i64, weight_text: &str) -> anyhow::Result<()>;
    async fn send_stats_summary(
        &self,
        chat_id: i64,
        stats: &WeightStats,
        now: &DateTime<Tz>,
    ) -> anyhow::Result<()>;
    async fn send_chart(&self, chat_id: i64, chart_path: &Path) -> anyhow::Result<()>;
    async fn send_progress(&self, chat_id: i64, stats: &WeightStats) -> anyhow::Result<()>;
    async fn send_failure_notice(&self, chat_id: i64) -> anyhow::Result<()>;
}
